use anyhow::Result;

use lyrics_ruby_json::{
    lyrics::{
        element::{Column, LyricsElement},
        multi_column::{
            decode_multi_column, is_multi_column_sentinel, rewrite_multi_column_blocks,
        },
        parser::{parse_lyrics, parse_lyrics_with_options, ParseOptions, UnterminatedHtml},
    },
    pronunciation::table::PronunciationTable,
};

fn text(content: &str) -> LyricsElement {
    LyricsElement::text(content)
}

fn br() -> LyricsElement {
    LyricsElement::line_break()
}

fn column(number: usize, content: Vec<Vec<LyricsElement>>) -> Column {
    Column { number, content }
}

#[test]
fn test_multi_column_block() {
    let input = ":::multi-column\n::column-1\nA\n::column-2\nB\n::end\n:::";

    let result = parse_lyrics(input, PronunciationTable::empty());

    assert_eq!(
        result,
        vec![vec![LyricsElement::MultiColumn {
            columns: vec![
                column(1, vec![vec![text("A"), br()]]),
                column(2, vec![vec![text("B"), br()]]),
            ],
        }]]
    );
}

#[test]
fn test_columns_are_sorted_by_number() {
    let input = ":::multi-column\n::column-2\nB\n::end\n::column-1\nA\n::end\n:::";

    let result = parse_lyrics(input, PronunciationTable::empty());

    assert_eq!(
        result,
        vec![vec![LyricsElement::MultiColumn {
            columns: vec![
                column(1, vec![vec![text("A"), br()]]),
                column(2, vec![vec![text("B"), br()]]),
            ],
        }]]
    );
}

#[test]
fn test_multi_column_block_between_lines() {
    let input = "前\n:::multi-column\n::column-１\n空(そら)\n\n<div>x</div>\n::end\n:::\n後";

    let result = parse_lyrics(input, PronunciationTable::empty());

    assert_eq!(
        result,
        vec![
            vec![text("前"), br()],
            vec![LyricsElement::MultiColumn {
                columns: vec![column(
                    1,
                    vec![
                        vec![
                            LyricsElement::Furigana {
                                content: "空".to_owned(),
                                reading: "そら".to_owned(),
                                nested: None,
                            },
                            br(),
                        ],
                        vec![br()],
                        vec![LyricsElement::html("<div>x</div>")],
                    ],
                )],
            }],
            vec![text("後"), br()],
        ]
    );
}

#[test]
fn test_multi_column_block_inside_html_block_keeps_order() {
    let input = "<div>\n:::multi-column\n::column-1\nA\n::end\n:::\n</div>\n後";

    let result = parse_lyrics(input, PronunciationTable::empty());

    assert_eq!(
        result,
        vec![
            vec![LyricsElement::html("<div>")],
            vec![LyricsElement::MultiColumn {
                columns: vec![column(1, vec![vec![text("A"), br()]])],
            }],
            vec![LyricsElement::html("</div>")],
            vec![text("後"), br()],
        ]
    );
}

#[test]
fn test_unterminated_html_block_after_multi_column() {
    let options = ParseOptions {
        unterminated_html: UnterminatedHtml::Flush,
    };
    let input = "<div>\n:::multi-column\n::column-1\nA\n::end\n:::";

    let result = parse_lyrics_with_options(input, PronunciationTable::empty(), &options);

    assert_eq!(
        result,
        vec![
            vec![LyricsElement::html("<div>")],
            vec![LyricsElement::MultiColumn {
                columns: vec![column(1, vec![vec![text("A"), br()]])],
            }],
        ]
    );
}

#[test]
fn test_dictionary_is_applied_to_column_text() -> Result<()> {
    let table = PronunciationTable::new([("ar", "アル")])?;
    let input = ":::multi-column\n::column-1\nWas ar\n::end\n:::";

    let result = parse_lyrics(input, &table);

    assert_eq!(
        result,
        vec![vec![LyricsElement::MultiColumn {
            columns: vec![column(
                1,
                vec![vec![
                    text("Was "),
                    LyricsElement::Furigana {
                        content: "ar".to_owned(),
                        reading: "アル".to_owned(),
                        nested: None,
                    },
                    br(),
                ]],
            )],
        }]]
    );
    Ok(())
}

#[test]
fn test_unterminated_column_is_emitted() {
    let input = ":::multi-column\n::column-1\nA\n::column-2\nB\n:::";

    let result = parse_lyrics(input, PronunciationTable::empty());

    assert_eq!(
        result,
        vec![vec![LyricsElement::MultiColumn {
            columns: vec![
                column(1, vec![vec![text("A"), br()]]),
                column(2, vec![vec![text("B"), br()]]),
            ],
        }]]
    );
}

#[test]
fn test_lines_outside_columns_are_ignored() {
    let input = ":::multi-column\nignored\n::column-1\nA\n::end\nignored too\n:::";

    let result = parse_lyrics(input, PronunciationTable::empty());

    assert_eq!(
        result,
        vec![vec![LyricsElement::MultiColumn {
            columns: vec![column(1, vec![vec![text("A"), br()]])],
        }]]
    );
}

#[test]
fn test_unclosed_block_is_kept_as_text() {
    let input = ":::multi-column\n::column-1\nA";

    let result = parse_lyrics(input, PronunciationTable::empty());

    assert_eq!(
        result,
        vec![
            vec![text(":::multi-column"), br()],
            vec![text("::column-1"), br()],
            vec![text("A"), br()],
        ]
    );
}

#[test]
fn test_rewrite_replaces_block_with_single_line() {
    let body = "前\n:::multi-column\n::column-1\nA\n::end\n:::\n後";

    let rewritten = rewrite_multi_column_blocks(body, &ParseOptions::default());
    let lines: Vec<&str> = rewritten.split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "前");
    assert!(is_multi_column_sentinel(lines[1]));
    assert_eq!(lines[2], "後");
}

#[test]
fn test_malformed_sentinel_becomes_text() {
    let rewritten = rewrite_multi_column_blocks(
        ":::multi-column\n::column-1\nA\n::end\n:::",
        &ParseOptions::default(),
    );
    let broken = &rewritten[..rewritten.len() - 3];

    assert_eq!(
        decode_multi_column(broken, PronunciationTable::empty()),
        text(broken)
    );
    assert_eq!(
        decode_multi_column("not a sentinel", PronunciationTable::empty()),
        text("not a sentinel")
    );
}
