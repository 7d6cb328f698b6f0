use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use log::debug;

use crate::pronunciation::{ar_tonelico::AR_TONELICO_PRONUNCIATIONS, table::PronunciationTable};

#[derive(Debug, PartialEq, Eq)]
pub struct SeriesPronunciation {
    pub series_id: String,
    pub reading: String,
}

// 系列 ID → 標音表
#[derive(Debug, Default)]
pub struct PronunciationRegistry {
    tables: BTreeMap<String, PronunciationTable>,
}

impl PronunciationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // 同梱の系列
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.insert(
            "ar-tonelico",
            PronunciationTable::new(AR_TONELICO_PRONUNCIATIONS.iter().copied())
                .context("Failed to build ar-tonelico pronunciations")?,
        );
        registry.insert("sound-horizon", PronunciationTable::default());
        registry.insert("linked-horizon", PronunciationTable::default());
        Ok(registry)
    }

    // 既にある系列は置き換える
    pub fn insert(&mut self, series_id: &str, table: PronunciationTable) {
        self.tables.insert(series_id.to_owned(), table);
    }

    // 未登録の系列は空の表
    pub fn lookup(&self, series_id: &str) -> &PronunciationTable {
        self.tables
            .get(series_id)
            .unwrap_or_else(|| PronunciationTable::empty())
    }

    pub fn series_ids(&self) -> Vec<&str> {
        self.tables.keys().map(|id| id.as_str()).collect()
    }

    pub fn pronunciation_count(&self, series_id: &str) -> usize {
        self.lookup(series_id).len()
    }

    pub fn has_pronunciation(&self, series_id: &str, word: &str) -> bool {
        self.lookup(series_id).contains(word)
    }

    // 全系列から語の読みを探す
    pub fn search_word(&self, word: &str) -> Vec<SeriesPronunciation> {
        self.tables
            .iter()
            .filter_map(|(series_id, table)| {
                table.get(word).map(|reading| SeriesPronunciation {
                    series_id: series_id.clone(),
                    reading: reading.to_owned(),
                })
            })
            .collect()
    }

    // <series-id>.csv をすべて読み込む
    pub fn load_csv_dir(&mut self, dir: &Path) -> Result<()> {
        let entries =
            fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }

            let series_id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("Invalid file name: {}", path.display()))?
                .to_owned();

            let csv = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let table = PronunciationTable::from_csv(&csv)
                .with_context(|| format!("Failed to load {}", path.display()))?;

            debug!("Loaded {} pronunciations for {}", table.len(), series_id);
            self.insert(&series_id, table);
        }

        Ok(())
    }
}
