use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// \b と同じ Unicode の単語構成文字
static REGEX_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").unwrap());

// 辞書の語が単語境界で照合できる文字だけで構成されているか
// ・ ゛ ① などは単語構成文字ではない
pub fn is_word(s: &str) -> bool {
    REGEX_WORD.is_match(s)
}

pub fn parse_number(s: &str) -> Result<usize> {
    if s.is_empty() {
        bail!("Failed to parse empty number");
    }

    let mut ret: usize = 0;
    for c in s.chars() {
        let zero = match c {
            '0'..='9' => '0',
            '０'..='９' => '０',
            _ => bail!("Failed to parse {:?}", s),
        } as usize;

        let d = (c as usize) - zero;

        ret = match ret.checked_mul(10).and_then(|r| r.checked_add(d)) {
            Some(r) => r,
            None => bail!("Number is too large: {:?}", s),
        };
    }
    Ok(ret)
}
