use crate::{
    lyrics::{
        element::LyricsElement, line_parser::assemble_elements, matcher::find_matches,
        resolver::resolve_overlaps,
    },
    pronunciation::table::PronunciationTable,
};

// 読みの中の注記を 1 段だけ解析する
//
// 辞書は使わない。注記がなければ None
pub fn resolve_nested(reading: &str) -> Option<Vec<LyricsElement>> {
    let matches = resolve_overlaps(find_matches(reading, PronunciationTable::empty()));
    if matches.is_empty() {
        return None;
    }

    Some(assemble_elements(reading, &matches, false))
}
