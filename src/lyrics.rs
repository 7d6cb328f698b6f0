// 歌詞 Markdown の解析
//
// 1 行ごとに次の注記を解析する：
// - 漢字(かんじ)               手動ルビ
// - {{対象:読み}}              拡張ルビ
// - __{{対象:読み}}__          改変箇所のルビ
// - 辞書による固定読み          明示的な注記と重なる場合は使わない
//
// 複数の注記が重なる場合は外側のものを残す。
// ブロックとして HTML と :::multi-column ... ::: を扱う

pub mod element;
pub mod line_parser;
pub mod matcher;
pub mod multi_column;
pub mod nested;
pub mod parser;
pub mod resolver;
pub mod segmenter;
