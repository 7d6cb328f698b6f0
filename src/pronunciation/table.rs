use std::collections::BTreeMap;

use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::utility::str::is_word;

#[derive(Debug, Clone)]
pub struct RegularWord {
    pub word: String,
    pub reading: String,
    pattern: Regex,
}

impl RegularWord {
    // 単語境界で区切られた出現位置 (start, end) をすべて返す
    pub fn find_all<'a>(&'a self, line: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.pattern.find_iter(line).map(|m| (m.start(), m.end()))
    }
}

#[derive(Debug, Clone)]
pub struct SpecialSymbol {
    pub word: String,
    pub reading: String,
}

impl SpecialSymbol {
    pub fn find_all<'a>(&'a self, line: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        line.match_indices(self.word.as_str())
            .map(|(start, word)| (start, start + word.len()))
    }
}

// 一つの系列の 語 → 読み
#[derive(Debug, Clone, Default)]
pub struct PronunciationTable {
    entries: BTreeMap<String, String>,
    special_symbols: Vec<SpecialSymbol>,
    regular_words: Vec<RegularWord>,
}

#[derive(Debug, Deserialize)]
struct PronunciationRecord {
    word: String,
    reading: String,
}

static EMPTY_TABLE: Lazy<PronunciationTable> = Lazy::new(PronunciationTable::default);

impl PronunciationTable {
    pub fn new<I, W, R>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, R)>,
        W: Into<String>,
        R: Into<String>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(w, r)| (w.into(), r.into()))
            .collect();

        let mut special_symbols = Vec::new();
        let mut regular_words = Vec::new();

        for (word, reading) in &entries {
            ensure!(!word.is_empty(), "Empty word is found (reading: {:?})", reading);

            if is_word(word) {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                    .with_context(|| format!("Failed to compile pattern for {:?}", word))?;
                regular_words.push(RegularWord {
                    word: word.clone(),
                    reading: reading.clone(),
                    pattern,
                });
            } else {
                special_symbols.push(SpecialSymbol {
                    word: word.clone(),
                    reading: reading.clone(),
                });
            }
        }

        Ok(Self {
            entries,
            special_symbols,
            regular_words,
        })
    }

    pub fn empty() -> &'static Self {
        &EMPTY_TABLE
    }

    // ヘッダ "word,reading" 付きの CSV
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());

        let mut entries = Vec::new();
        for (i, record) in reader.deserialize::<PronunciationRecord>().enumerate() {
            let record = record.with_context(|| format!("Failed to parse record at {}", i))?;
            entries.push((record.word, record.reading));
        }

        Self::new(entries)
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|r| r.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn special_symbols(&self) -> &[SpecialSymbol] {
        &self.special_symbols
    }

    pub fn regular_words(&self) -> &[RegularWord] {
        &self.regular_words
    }
}
