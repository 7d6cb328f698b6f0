use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    lyrics::{
        element::LyricsElement,
        line_parser::parse_line,
        multi_column::{decode_multi_column, is_multi_column_sentinel},
        parser::{ParseOptions, UnterminatedHtml},
    },
    pronunciation::table::PronunciationTable,
};

static DEFAULT_CLOSING_MARKER: &str = "</div>";

// 空要素は閉じタグを持たない
static VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

static REGEX_HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static REGEX_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(?P<close>/)?(?P<name>[A-Za-z][A-Za-z0-9-]*)[^>]*?(?P<self_closing>/)?>").unwrap()
});

static REGEX_CLOSE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</[^>]+>").unwrap());

enum SegmenterState {
    Normal,
    InHtmlBlock {
        buffer: Vec<String>,
        closing_marker: String,
    },
}

enum SegmentedLine {
    Elements(Vec<LyricsElement>),
    MultiColumn(String),
}

// 閉じられていない最初の開始タグ名
//
// 開始タグと終了タグの数が釣り合っていれば None
fn find_unclosed_tag(line: &str) -> Option<Option<String>> {
    let mut open_tags: Vec<String> = Vec::new();
    let mut open_count = 0;

    for captures in REGEX_TAG.captures_iter(line) {
        let name = captures["name"].to_lowercase();

        if captures.name("close").is_some() {
            if let Some(i) = open_tags.iter().rposition(|n| n == &name) {
                open_tags.remove(i);
            }
            continue;
        }

        if captures.name("self_closing").is_some() || VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }

        open_count += 1;
        open_tags.push(name);
    }

    let close_count = REGEX_CLOSE_TAG.find_iter(line).count();
    if open_count == close_count {
        return None;
    }

    Some(open_tags.into_iter().next())
}

// 行の列を要素列の列にする
pub fn segment_lines<'a, I>(
    lines: I,
    table: &PronunciationTable,
    options: &ParseOptions,
) -> Vec<Vec<LyricsElement>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segmented = Vec::new();
    let mut state = SegmenterState::Normal;

    for line in lines {
        let trimmed_line = line.trim();

        // 空行はどの状態でも改行
        if trimmed_line.is_empty() {
            segmented.push(SegmentedLine::Elements(vec![LyricsElement::line_break()]));
            continue;
        }

        state = match state {
            // ブロック内の複数列は、それまでの HTML を出力してから置く
            SegmenterState::InHtmlBlock {
                buffer,
                closing_marker,
            } if is_multi_column_sentinel(line) => {
                if !buffer.is_empty() {
                    segmented.push(SegmentedLine::Elements(vec![LyricsElement::Html {
                        content: buffer.join("\n"),
                    }]));
                }
                segmented.push(SegmentedLine::MultiColumn(line.to_owned()));
                SegmenterState::InHtmlBlock {
                    buffer: Vec::new(),
                    closing_marker,
                }
            }

            SegmenterState::InHtmlBlock {
                mut buffer,
                closing_marker,
            } => {
                buffer.push(line.to_owned());

                // 終了タグ名は小文字で保持している
                if line.to_lowercase().contains(closing_marker.as_str()) {
                    segmented.push(SegmentedLine::Elements(vec![LyricsElement::Html {
                        content: buffer.join("\n"),
                    }]));
                    SegmenterState::Normal
                } else {
                    SegmenterState::InHtmlBlock {
                        buffer,
                        closing_marker,
                    }
                }
            }

            SegmenterState::Normal if is_multi_column_sentinel(line) => {
                segmented.push(SegmentedLine::MultiColumn(line.to_owned()));
                SegmenterState::Normal
            }

            SegmenterState::Normal if REGEX_HTML_TAG.is_match(trimmed_line) => {
                match find_unclosed_tag(line) {
                    None => {
                        segmented.push(SegmentedLine::Elements(vec![LyricsElement::html(line)]));
                        SegmenterState::Normal
                    }
                    Some(tag) => SegmenterState::InHtmlBlock {
                        buffer: vec![line.to_owned()],
                        closing_marker: tag
                            .map(|name| format!("</{}>", name))
                            .unwrap_or_else(|| DEFAULT_CLOSING_MARKER.to_owned()),
                    },
                }
            }

            SegmenterState::Normal => {
                let mut elements = parse_line(line, table);
                elements.push(LyricsElement::line_break());
                segmented.push(SegmentedLine::Elements(elements));
                SegmenterState::Normal
            }
        };
    }

    if let SegmenterState::InHtmlBlock {
        buffer,
        closing_marker,
    } = state
    {
        match options.unterminated_html {
            UnterminatedHtml::Discard => {
                warn!(
                    "HTML block is not closed with {:?}, discarded {} lines",
                    closing_marker,
                    buffer.len()
                );
            }
            UnterminatedHtml::Flush if !buffer.is_empty() => {
                warn!(
                    "HTML block is not closed with {:?}, flushed {} lines",
                    closing_marker,
                    buffer.len()
                );
                segmented.push(SegmentedLine::Elements(vec![LyricsElement::Html {
                    content: buffer.join("\n"),
                }]));
            }
            UnterminatedHtml::Flush => {
                warn!("HTML block is not closed with {:?}", closing_marker);
            }
        }
    }

    // 複数列ブロックは最後に展開する
    segmented
        .into_iter()
        .map(|line| match line {
            SegmentedLine::Elements(elements) => elements,
            SegmentedLine::MultiColumn(line) => vec![decode_multi_column(&line, table)],
        })
        .collect()
}
