use log::debug;

use crate::lyrics::matcher::Match;

// 重なった候補を解決し、開始位置順に並べる
//
// - 他の候補に完全に含まれる候補は捨てる（外側が残る）
// - 範囲が完全に一致する候補は先に見つかったもの（優先度の高いもの）を残す
// - 包含関係にない部分的な重なりは先に始まるものを残す
pub fn resolve_overlaps(candidates: Vec<Match>) -> Vec<Match> {
    let is_covered = |index: usize, candidate: &Match| {
        candidates.iter().enumerate().any(|(other_index, other)| {
            if other_index == index || !other.contains(candidate) {
                return false;
            }
            !other.same_span(candidate) || other_index < index
        })
    };

    let mut survivors: Vec<&Match> = candidates
        .iter()
        .enumerate()
        .filter(|&(i, candidate)| !is_covered(i, candidate))
        .map(|(_, candidate)| candidate)
        .collect();

    // 安定ソート
    survivors.sort_by_key(|m| m.start);

    let mut resolved: Vec<Match> = Vec::with_capacity(survivors.len());
    for candidate in survivors {
        if let Some(last) = resolved.last() {
            if candidate.start < last.end() {
                debug!(
                    "Discarded {:?} overlapping {:?}",
                    candidate.raw_text, last.raw_text
                );
                continue;
            }
        }
        resolved.push(candidate.clone());
    }

    resolved
}
