use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    lyrics::{
        element::LyricsElement, multi_column::rewrite_multi_column_blocks,
        segmenter::segment_lines,
    },
    pronunciation::table::PronunciationTable,
};

// 閉じられないまま文書が終わった HTML ブロックの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedHtml {
    #[default]
    Discard,
    Flush,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub unterminated_html: UnterminatedHtml,
}

// ---
// title: ...
// ---
static REGEX_FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---(?P<front_matter>.*?)---").unwrap());

// (front matter, 本文)
pub fn split_front_matter(document: &str) -> (Option<&str>, &str) {
    let document = document.trim();

    match REGEX_FRONT_MATTER.captures(document) {
        Some(captures) => {
            let whole = captures.get(0).unwrap();
            let front_matter = captures.name("front_matter").unwrap().as_str().trim();
            (Some(front_matter), document[whole.end()..].trim())
        }
        None => (None, document),
    }
}

// 文書全体を行ごとの要素列にする
pub fn parse_lyrics(document: &str, table: &PronunciationTable) -> Vec<Vec<LyricsElement>> {
    parse_lyrics_with_options(document, table, &ParseOptions::default())
}

pub fn parse_lyrics_with_options(
    document: &str,
    table: &PronunciationTable,
    options: &ParseOptions,
) -> Vec<Vec<LyricsElement>> {
    let (_, body) = split_front_matter(document);
    let body = rewrite_multi_column_blocks(body, options);

    segment_lines(body.split('\n'), table, options)
}
