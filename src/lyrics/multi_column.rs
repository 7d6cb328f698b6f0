// 複数列ブロック
//
// :::multi-column
// ::column-1
// 一列目
// ::end
// ::column-2
// 二列目
// ::end
// :::
//
// ブロック全体を 1 行の番兵に置き換えてから行単位の解析を行い、
// 最後に番兵を MultiColumn に戻す

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    lyrics::{
        element::{Column, LyricsElement},
        line_parser::parse_line,
        parser::ParseOptions,
        segmenter::segment_lines,
    },
    pronunciation::table::PronunciationTable,
    utility::str::parse_number,
};

// 私用領域の文字で囲み、本文と衝突しないようにする
static SENTINEL_PREFIX: &str = "\u{E000}multi-column\u{E000}";

static REGEX_BLOCK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:::multi-column\s*$").unwrap());
static REGEX_BLOCK_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:::\s*$").unwrap());
static REGEX_COLUMN_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^::column-(?P<number>[0-9０-９]+)\s*$").unwrap());
static REGEX_COLUMN_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^::end\s*$").unwrap());

struct RawColumn<'a> {
    number: usize,
    lines: Vec<&'a str>,
}

struct RawBlock<'a> {
    source: Vec<&'a str>,
    columns: Vec<RawColumn<'a>>,
    in_column: bool,
}

impl<'a> RawBlock<'a> {
    fn new(start_line: &'a str) -> Self {
        Self {
            source: vec![start_line],
            columns: Vec::new(),
            in_column: false,
        }
    }

    fn push(&mut self, line: &'a str) {
        self.source.push(line);

        if let Some(captures) = REGEX_COLUMN_START.captures(line) {
            match parse_number(&captures["number"]) {
                Ok(number) => {
                    // ::end のない列もここで閉じる
                    self.columns.push(RawColumn {
                        number,
                        lines: Vec::new(),
                    });
                    self.in_column = true;
                    return;
                }
                Err(e) => warn!("Invalid column marker {:?}: {:#}", line, e),
            }
        }

        if REGEX_COLUMN_END.is_match(line) {
            self.in_column = false;
            return;
        }

        match self.columns.last_mut() {
            Some(column) if self.in_column => column.lines.push(line),
            _ => debug!("Ignored line outside of columns: {:?}", line),
        }
    }

    fn encode(self, options: &ParseOptions) -> Result<String> {
        let mut columns: Vec<Column> = self
            .columns
            .into_iter()
            .map(|column| Column {
                number: column.number,
                // 構造だけを決めるので辞書は使わない
                content: segment_lines(column.lines, PronunciationTable::empty(), options),
            })
            .collect();
        columns.sort_by_key(|column| column.number);

        let payload = serde_json::to_string(&columns).context("Failed to encode columns")?;
        Ok(format!("{}{}", SENTINEL_PREFIX, payload))
    }
}

// 複数列ブロックをそれぞれ 1 行の番兵に置き換える
//
// 閉じられていないブロックは置き換えずに残す
pub fn rewrite_multi_column_blocks(body: &str, options: &ParseOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut block: Option<RawBlock> = None;

    for line in body.lines() {
        block = match block {
            None => {
                if REGEX_BLOCK_START.is_match(line) {
                    Some(RawBlock::new(line))
                } else {
                    lines.push(line.to_owned());
                    None
                }
            }

            Some(mut raw_block) => {
                if REGEX_BLOCK_END.is_match(line) {
                    raw_block.source.push(line);
                    let source = raw_block.source.clone();
                    match raw_block.encode(options) {
                        Ok(sentinel) => lines.push(sentinel),
                        Err(e) => {
                            warn!("{:#}", e);
                            lines.extend(source.into_iter().map(|l| l.to_owned()));
                        }
                    }
                    None
                } else {
                    raw_block.push(line);
                    Some(raw_block)
                }
            }
        };
    }

    if let Some(raw_block) = block {
        warn!(
            "Multi-column block is not closed with \":::\", kept {} lines as text",
            raw_block.source.len()
        );
        lines.extend(raw_block.source.into_iter().map(|l| l.to_owned()));
    }

    lines.join("\n")
}

pub fn is_multi_column_sentinel(line: &str) -> bool {
    line.starts_with(SENTINEL_PREFIX)
}

fn decode_columns(line: &str) -> Result<Vec<Column>> {
    let payload = line
        .strip_prefix(SENTINEL_PREFIX)
        .context("Multi-column sentinel is not found")?;
    let mut columns: Vec<Column> =
        serde_json::from_str(payload).context("Failed to decode multi-column payload")?;
    columns.sort_by_key(|column| column.number);
    Ok(columns)
}

// 列の中の Text にだけ辞書を適用する
fn apply_pronunciations(
    elements: Vec<LyricsElement>,
    table: &PronunciationTable,
) -> Vec<LyricsElement> {
    elements
        .into_iter()
        .flat_map(|element| match element {
            LyricsElement::Text { content } => parse_line(&content, table),
            element => vec![element],
        })
        .collect()
}

// 番兵の行を MultiColumn に戻す
//
// 解釈できない場合は行をそのまま Text にする
pub fn decode_multi_column(line: &str, table: &PronunciationTable) -> LyricsElement {
    let columns = match decode_columns(line) {
        Ok(columns) => columns,
        Err(e) => {
            warn!("{:#}", e);
            return LyricsElement::text(line);
        }
    };

    if table.is_empty() {
        return LyricsElement::MultiColumn { columns };
    }

    let columns = columns
        .into_iter()
        .map(|column| Column {
            number: column.number,
            content: column
                .content
                .into_iter()
                .map(|line| apply_pronunciations(line, table))
                .collect(),
        })
        .collect();

    LyricsElement::MultiColumn { columns }
}
