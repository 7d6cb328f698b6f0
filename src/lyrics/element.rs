use serde::{Deserialize, Serialize};

pub static LINE_BREAK: &str = "<br>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum LyricsElement {
    Text {
        content: String,
    },
    Html {
        content: String,
    },

    // 漢字(かんじ), {{対象:読み}}, 辞書
    Furigana {
        content: String,
        reading: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nested: Option<Vec<LyricsElement>>,
    },
    // __{{対象:読み}}__
    Special {
        content: String,
        reading: String,
        #[serde(rename = "isModified")]
        is_modified: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nested: Option<Vec<LyricsElement>>,
    },

    MultiColumn {
        columns: Vec<Column>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub number: usize,
    pub content: Vec<Vec<LyricsElement>>,
}

impl LyricsElement {
    pub fn text(content: &str) -> Self {
        Self::Text {
            content: content.to_owned(),
        }
    }

    pub fn html(content: &str) -> Self {
        Self::Html {
            content: content.to_owned(),
        }
    }

    pub fn line_break() -> Self {
        Self::html(LINE_BREAK)
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::Html { content } if content == LINE_BREAK)
    }

    // ルビを除いた本文
    pub fn base_text(&self) -> Option<&str> {
        match self {
            Self::Text { content }
            | Self::Html { content }
            | Self::Furigana { content, .. }
            | Self::Special { content, .. } => Some(content.as_str()),
            Self::MultiColumn { .. } => None,
        }
    }
}
