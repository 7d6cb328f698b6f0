// 系列ごとの固定読み辞書
//
// 語 → 読み の対応表。歌詞中の語に対して明示的な注記がない場合に使われる
// - 英数字・かな・漢字のみの語は単語境界で照合する
// - それ以外（記号を含むもの）はそのまま照合する

pub mod ar_tonelico;
pub mod registry;
pub mod table;
