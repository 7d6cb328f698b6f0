use std::fs;

use anyhow::Result;

use lyrics_ruby_json::pronunciation::{
    registry::{PronunciationRegistry, SeriesPronunciation},
    table::PronunciationTable,
};

#[test]
fn test_builtin_registry() -> Result<()> {
    let registry = PronunciationRegistry::builtin()?;

    assert_eq!(registry.series_ids(), vec!["ar-tonelico", "linked-horizon", "sound-horizon"]);
    assert_eq!(registry.pronunciation_count("ar-tonelico"), 33);
    assert_eq!(registry.pronunciation_count("sound-horizon"), 0);
    assert!(registry.has_pronunciation("ar-tonelico", "Rrha"));
    assert!(!registry.has_pronunciation("ar-tonelico", "rrha"));
    assert_eq!(registry.lookup("ar-tonelico").get("hymmne"), Some("ヒュムネ"));
    Ok(())
}

#[test]
fn test_unknown_series_is_empty() -> Result<()> {
    let registry = PronunciationRegistry::builtin()?;

    assert!(registry.lookup("unknown").is_empty());
    assert_eq!(registry.pronunciation_count("unknown"), 0);
    assert!(!registry.has_pronunciation("unknown", "ar"));
    Ok(())
}

#[test]
fn test_search_word_across_series() -> Result<()> {
    let mut registry = PronunciationRegistry::builtin()?;
    registry.insert("other", PronunciationTable::new([("ar", "アー")])?);

    assert_eq!(
        registry.search_word("ar"),
        vec![
            SeriesPronunciation {
                series_id: "ar-tonelico".to_owned(),
                reading: "アル".to_owned(),
            },
            SeriesPronunciation {
                series_id: "other".to_owned(),
                reading: "アー".to_owned(),
            },
        ]
    );
    assert!(registry.search_word("nothing").is_empty());
    Ok(())
}

#[test]
fn test_table_partitions_entries() -> Result<()> {
    let table = PronunciationTable::new([
        ("ar", "アル"),
        (">>", "ヤ"),
        ("歌", "うた"),
        ("a b", "x"),
    ])?;

    let regular: Vec<&str> = table.regular_words().iter().map(|w| w.word.as_str()).collect();
    let special: Vec<&str> = table.special_symbols().iter().map(|s| s.word.as_str()).collect();

    assert_eq!(regular, vec!["ar", "歌"]);
    assert_eq!(special, vec![">>", "a b"]);
    assert_eq!(table.len(), 4);
    Ok(())
}

#[test]
fn test_kana_punctuation_is_special_symbol() -> Result<()> {
    let table = PronunciationTable::new([
        ("・・", "テンテン"),
        ("ゞ゛", "x"),
        ("①", "いち"),
        ("ルー", "る"),
    ])?;

    let regular: Vec<&str> = table.regular_words().iter().map(|w| w.word.as_str()).collect();
    let special: Vec<&str> = table.special_symbols().iter().map(|s| s.word.as_str()).collect();

    assert_eq!(regular, vec!["ルー"]);
    assert_eq!(special, vec!["①", "ゞ゛", "・・"]);
    Ok(())
}

#[test]
fn test_empty_word_is_rejected() {
    assert!(PronunciationTable::new([("", "なし")]).is_err());
}

#[test]
fn test_table_from_csv() -> Result<()> {
    let table = PronunciationTable::from_csv("word,reading\nar,アル\n\">>\",ヤ\n")?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("ar"), Some("アル"));
    assert_eq!(table.get(">>"), Some("ヤ"));
    Ok(())
}

#[test]
fn test_table_from_invalid_csv() {
    assert!(PronunciationTable::from_csv("word,reading\nonly-word\n").is_err());
}

#[test]
fn test_load_csv_dir() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("lyrics-ruby-json-{}", std::process::id()));
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("my-series.csv"), "word,reading\nsyec,セク\n")?;
    fs::write(dir.join("ignored.txt"), "word,reading\nx,y\n")?;

    let mut registry = PronunciationRegistry::new();
    let loaded = registry.load_csv_dir(&dir);
    fs::remove_dir_all(&dir)?;
    loaded?;

    assert_eq!(registry.series_ids(), vec!["my-series"]);
    assert_eq!(registry.lookup("my-series").get("syec"), Some("セク"));
    Ok(())
}
