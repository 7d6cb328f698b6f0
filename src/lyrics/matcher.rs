use once_cell::sync::Lazy;
use regex::Regex;

use crate::pronunciation::table::PronunciationTable;

// 優先度の高い順
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Version,  // __{{対象:読み}}__
    Advanced, // {{対象:読み}}
    Manual,   // 漢字(かんじ)
    Fixed,    // 辞書
}

impl Tier {
    pub fn is_explicit(&self) -> bool {
        !matches!(self, Tier::Fixed)
    }
}

// 行中の注記候補 (位置はバイト単位)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub length: usize,
    pub content: String,
    pub reading: String,
    pub tier: Tier,
    pub raw_text: String,
}

impl Match {
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn contains(&self, other: &Match) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }

    pub fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    pub fn same_span(&self, other: &Match) -> bool {
        self.start == other.start && self.length == other.length
    }
}

static REGEX_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__\{\{(?P<content>[^{}:]+?):(?P<reading>[^{}]+?)\}\}__").unwrap());

static REGEX_ADVANCED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{(?P<content>[^{}:]{1,50}):(?P<reading>[^{}:]{1,50})\}\}").unwrap()
});

static REGEX_MANUAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<content>\p{Han}+)\((?P<reading>[\p{Hiragana}\p{Katakana}ー]+)\)").unwrap()
});

fn find_by_regex(line: &str, regex: &Regex, tier: Tier) -> Vec<Match> {
    regex
        .captures_iter(line)
        .map(|captures| {
            let whole = captures.get(0).unwrap();
            Match {
                start: whole.start(),
                length: whole.len(),
                content: captures["content"].to_owned(),
                reading: captures["reading"].to_owned(),
                tier,
                raw_text: whole.as_str().to_owned(),
            }
        })
        .collect()
}

// 1 行から全ての注記候補を集める
//
// 重なりは解決しない。ただし明示的な注記と重なる辞書の候補はここで除く
pub fn find_matches(line: &str, table: &PronunciationTable) -> Vec<Match> {
    let mut matches = Vec::new();
    matches.extend(find_by_regex(line, &REGEX_VERSION, Tier::Version));
    matches.extend(find_by_regex(line, &REGEX_ADVANCED, Tier::Advanced));
    matches.extend(find_by_regex(line, &REGEX_MANUAL, Tier::Manual));

    // 記号は単語境界を使えないため先にそのまま照合する
    let special = table
        .special_symbols()
        .iter()
        .flat_map(|s| s.find_all(line).map(move |span| (span, &s.word, &s.reading)));
    let regular = table
        .regular_words()
        .iter()
        .flat_map(|w| w.find_all(line).map(move |span| (span, &w.word, &w.reading)));

    for ((start, end), word, reading) in special.chain(regular) {
        let candidate = Match {
            start,
            length: end - start,
            content: word.clone(),
            reading: reading.clone(),
            tier: Tier::Fixed,
            raw_text: line[start..end].to_owned(),
        };

        if matches
            .iter()
            .any(|m| m.tier.is_explicit() && m.overlaps(&candidate))
        {
            continue;
        }

        matches.push(candidate);
    }

    matches
}
