// Ar tonelico 系列 (Hymmnos) の標音

pub static AR_TONELICO_PRONUNCIATIONS: &[(&str, &str)] = &[
    ("Rrha", "[ルル]ラ"),
    ("tie", "ティエ"),
    ("yor", "ヨア"),
    ("ini", "イニ"),
    ("nha", "ニャ"),
    ("ki", "キ"),
    ("ra", "ラ"),
    ("en", "エン"),
    ("Wee", "ウィ"),
    ("parge", "パジェ"),
    ("ar", "アル"),
    ("ciel", "シェール"),
    ("Was", "ワス"),
    ("yea", "イェア"),
    ("chs", "チス"),
    ("mea", "ミーァ"),
    ("fwal", "フワル"),
    ("Ma", "マ"),
    ("ga", "ガ"),
    ("ks", "ケス"),
    ("maya", "マヤ"),
    ("syec", "セク"),
    ("hymmne", "ヒュムネ"),
    ("frawr", "ラーワ"),
    ("ene", "エヌ"),
    ("foul", "フォウル"),
    ("enrer", "エンリャ"),
    ("hymme", "ヒュム"),
    ("gyen", "ジェン"),
    ("yeal", "イェーア"),
    ("innna", "インナ"),
    ("hopb", "ホップ"),
    ("tonelico", "トネリコ"),
];
