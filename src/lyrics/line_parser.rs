use crate::{
    lyrics::{
        element::LyricsElement,
        matcher::{find_matches, Match, Tier},
        nested::resolve_nested,
        resolver::resolve_overlaps,
    },
    pronunciation::table::PronunciationTable,
};

// 1 行を要素列にする（改行は付けない）
pub fn parse_line(line: &str, table: &PronunciationTable) -> Vec<LyricsElement> {
    let matches = resolve_overlaps(find_matches(line, table));
    assemble_elements(line, &matches, true)
}

// 解決済みの候補と、その間の文字列から要素列を作る
//
// with_nested が true のときだけ読みの中の注記を解析する
pub(crate) fn assemble_elements(
    line: &str,
    matches: &[Match],
    with_nested: bool,
) -> Vec<LyricsElement> {
    let mut elements = Vec::new();
    let mut last_index = 0;

    for m in matches {
        if last_index < m.start {
            elements.push(LyricsElement::text(&line[last_index..m.start]));
        }

        let nested = if with_nested {
            resolve_nested(&m.reading)
        } else {
            None
        };

        elements.push(match m.tier {
            Tier::Version => LyricsElement::Special {
                content: m.content.clone(),
                reading: m.reading.clone(),
                is_modified: true,
                nested,
            },
            Tier::Advanced | Tier::Manual | Tier::Fixed => LyricsElement::Furigana {
                content: m.content.clone(),
                reading: m.reading.clone(),
                nested,
            },
        });

        last_index = m.end();
    }

    if last_index < line.len() {
        elements.push(LyricsElement::text(&line[last_index..]));
    }

    elements
}
