//! Latin letters with diacritics, special letters and ligatures
//!
//! Dotless `\i` and `\j` forms come before the plain ones so that encoding
//! produces `\'\i` rather than `\'i`.

use crate::core::table::Symbol;

/// Letters that have their own control word
pub static SPECIAL_LETTERS: &[Symbol] = &[
    Symbol::text("ß", r"\ss"),
    Symbol::text("å", r"\aa"),
    Symbol::text("Å", r"\AA"),
    Symbol::text("æ", r"\ae"),
    Symbol::text("Æ", r"\AE"),
    Symbol::text("œ", r"\oe"),
    Symbol::text("Œ", r"\OE"),
    Symbol::text("ø", r"\o"),
    Symbol::text("Ø", r"\O"),
    Symbol::text("ł", r"\l"),
    Symbol::text("Ł", r"\L"),
    Symbol::text("ı", r"\i"),
    Symbol::text("ȷ", r"\j"),
    Symbol::text("ð", r"\dh"),
    Symbol::text("Ð", r"\DH"),
    Symbol::text("þ", r"\th"),
    Symbol::text("Þ", r"\TH"),
    Symbol::text("đ", r"\dj"),
    Symbol::text("Đ", r"\DJ"),
    Symbol::text("ŋ", r"\ng"),
    Symbol::text("Ŋ", r"\NG"),
];

/// Accent commands applied to nothing, producing the spacing accent
pub static STANDALONE_ACCENTS: &[Symbol] = &[
    Symbol::text("¨", r#"\"{}"#),
    Symbol::text("¯", r"\={}"),
    Symbol::text("´", r"\'{}"),
    Symbol::text("¸", r"\c{}"),
    Symbol::text("˜", r"\~{}"),
    Symbol::text("ˆ", r"\^{}"),
    Symbol::text("ˇ", r"\v{}"),
    Symbol::text("˘", r"\u{}"),
    Symbol::text("˙", r"\.{}"),
    Symbol::text("˚", r"\r{}"),
    Symbol::text("˛", r"\k{}"),
    Symbol::text("˝", r"\H{}"),
];

/// Accented letters, grouped by accent
pub static ACCENTED_LETTERS: &[Symbol] = &[
    // grave
    Symbol::text("À", r"\`A"),
    Symbol::text("à", r"\`a"),
    Symbol::text("È", r"\`E"),
    Symbol::text("è", r"\`e"),
    Symbol::text("Ì", r"\`I"),
    Symbol::text("ì", r"\`\i"),
    Symbol::text("ì", r"\`i"),
    Symbol::text("Ò", r"\`O"),
    Symbol::text("ò", r"\`o"),
    Symbol::text("Ù", r"\`U"),
    Symbol::text("ù", r"\`u"),
    Symbol::text("Ǹ", r"\`N"),
    Symbol::text("ǹ", r"\`n"),
    // acute
    Symbol::text("Á", r"\'A"),
    Symbol::text("á", r"\'a"),
    Symbol::text("Ć", r"\'C"),
    Symbol::text("ć", r"\'c"),
    Symbol::text("É", r"\'E"),
    Symbol::text("é", r"\'e"),
    Symbol::text("Ǵ", r"\'G"),
    Symbol::text("ǵ", r"\'g"),
    Symbol::text("Í", r"\'I"),
    Symbol::text("í", r"\'\i"),
    Symbol::text("í", r"\'i"),
    Symbol::text("Ĺ", r"\'L"),
    Symbol::text("ĺ", r"\'l"),
    Symbol::text("Ń", r"\'N"),
    Symbol::text("ń", r"\'n"),
    Symbol::text("Ó", r"\'O"),
    Symbol::text("ó", r"\'o"),
    Symbol::text("Ŕ", r"\'R"),
    Symbol::text("ŕ", r"\'r"),
    Symbol::text("Ś", r"\'S"),
    Symbol::text("ś", r"\'s"),
    Symbol::text("Ú", r"\'U"),
    Symbol::text("ú", r"\'u"),
    Symbol::text("Ý", r"\'Y"),
    Symbol::text("ý", r"\'y"),
    Symbol::text("Ź", r"\'Z"),
    Symbol::text("ź", r"\'z"),
    Symbol::text("Ǽ", r"\'\AE"),
    Symbol::text("ǽ", r"\'\ae"),
    Symbol::text("Ǿ", r"\'\O"),
    Symbol::text("ǿ", r"\'\o"),
    // circumflex
    Symbol::text("Â", r"\^A"),
    Symbol::text("â", r"\^a"),
    Symbol::text("Ĉ", r"\^C"),
    Symbol::text("ĉ", r"\^c"),
    Symbol::text("Ê", r"\^E"),
    Symbol::text("ê", r"\^e"),
    Symbol::text("Ĝ", r"\^G"),
    Symbol::text("ĝ", r"\^g"),
    Symbol::text("Ĥ", r"\^H"),
    Symbol::text("ĥ", r"\^h"),
    Symbol::text("Î", r"\^I"),
    Symbol::text("î", r"\^\i"),
    Symbol::text("î", r"\^i"),
    Symbol::text("Ĵ", r"\^J"),
    Symbol::text("ĵ", r"\^\j"),
    Symbol::text("ĵ", r"\^j"),
    Symbol::text("Ô", r"\^O"),
    Symbol::text("ô", r"\^o"),
    Symbol::text("Ŝ", r"\^S"),
    Symbol::text("ŝ", r"\^s"),
    Symbol::text("Û", r"\^U"),
    Symbol::text("û", r"\^u"),
    Symbol::text("Ŵ", r"\^W"),
    Symbol::text("ŵ", r"\^w"),
    Symbol::text("Ŷ", r"\^Y"),
    Symbol::text("ŷ", r"\^y"),
    // tilde
    Symbol::text("Ã", r"\~A"),
    Symbol::text("ã", r"\~a"),
    Symbol::text("Ĩ", r"\~I"),
    Symbol::text("ĩ", r"\~\i"),
    Symbol::text("ĩ", r"\~i"),
    Symbol::text("Ñ", r"\~N"),
    Symbol::text("ñ", r"\~n"),
    Symbol::text("Õ", r"\~O"),
    Symbol::text("õ", r"\~o"),
    Symbol::text("Ũ", r"\~U"),
    Symbol::text("ũ", r"\~u"),
    // diaeresis
    Symbol::text("Ä", r#"\"A"#),
    Symbol::text("ä", r#"\"a"#),
    Symbol::text("Ë", r#"\"E"#),
    Symbol::text("ë", r#"\"e"#),
    Symbol::text("Ï", r#"\"I"#),
    Symbol::text("ï", r#"\"\i"#),
    Symbol::text("ï", r#"\"i"#),
    Symbol::text("Ö", r#"\"O"#),
    Symbol::text("ö", r#"\"o"#),
    Symbol::text("Ü", r#"\"U"#),
    Symbol::text("ü", r#"\"u"#),
    Symbol::text("Ÿ", r#"\"Y"#),
    Symbol::text("ÿ", r#"\"y"#),
    // ring
    Symbol::text("Ů", r"\r U"),
    Symbol::text("ů", r"\r u"),
    Symbol::text("Å", r"\r A").decode_only(),
    Symbol::text("å", r"\r a").decode_only(),
    // cedilla
    Symbol::text("Ç", r"\c C"),
    Symbol::text("ç", r"\c c"),
    Symbol::text("Ģ", r"\c G"),
    Symbol::text("ģ", r"\c g"),
    Symbol::text("Ķ", r"\c K"),
    Symbol::text("ķ", r"\c k"),
    Symbol::text("Ļ", r"\c L"),
    Symbol::text("ļ", r"\c l"),
    Symbol::text("Ņ", r"\c N"),
    Symbol::text("ņ", r"\c n"),
    Symbol::text("Ŗ", r"\c R"),
    Symbol::text("ŗ", r"\c r"),
    Symbol::text("Ş", r"\c S"),
    Symbol::text("ş", r"\c s"),
    // t with cedilla is left to the sub-encoding when encoding
    Symbol::text("Ţ", r"\c T").decode_only(),
    Symbol::text("ţ", r"\c t").decode_only(),
    // macron
    Symbol::text("Ā", r"\=A"),
    Symbol::text("ā", r"\=a"),
    Symbol::text("Ē", r"\=E"),
    Symbol::text("ē", r"\=e"),
    Symbol::text("Ī", r"\=I"),
    Symbol::text("ī", r"\=\i"),
    Symbol::text("ī", r"\=i"),
    Symbol::text("Ō", r"\=O"),
    Symbol::text("ō", r"\=o"),
    Symbol::text("Ū", r"\=U"),
    Symbol::text("ū", r"\=u"),
    // breve
    Symbol::text("Ă", r"\u A"),
    Symbol::text("ă", r"\u a"),
    Symbol::text("Ĕ", r"\u E"),
    Symbol::text("ĕ", r"\u e"),
    Symbol::text("Ğ", r"\u G"),
    Symbol::text("ğ", r"\u g"),
    Symbol::text("Ĭ", r"\u I"),
    Symbol::text("ĭ", r"\u\i"),
    Symbol::text("ĭ", r"\u i"),
    Symbol::text("Ŏ", r"\u O"),
    Symbol::text("ŏ", r"\u o"),
    Symbol::text("Ŭ", r"\u U"),
    Symbol::text("ŭ", r"\u u"),
    // ogonek
    Symbol::text("Ą", r"\k A"),
    Symbol::text("ą", r"\k a"),
    Symbol::text("Ę", r"\k E"),
    Symbol::text("ę", r"\k e"),
    Symbol::text("Į", r"\k I"),
    Symbol::text("į", r"\k i"),
    Symbol::text("Ǫ", r"\k O"),
    Symbol::text("ǫ", r"\k o"),
    Symbol::text("Ų", r"\k U"),
    Symbol::text("ų", r"\k u"),
    Symbol::text("Ǭ", r"\textogonekcentered{\=O}").encode_only(),
    Symbol::text("ǭ", r"\textogonekcentered{\=o}").encode_only(),
    // dot above
    Symbol::text("Ċ", r"\.C"),
    Symbol::text("ċ", r"\.c"),
    Symbol::text("Ė", r"\.E"),
    Symbol::text("ė", r"\.e"),
    Symbol::text("Ġ", r"\.G"),
    Symbol::text("ġ", r"\.g"),
    Symbol::text("İ", r"\.I"),
    Symbol::text("Ż", r"\.Z"),
    Symbol::text("ż", r"\.z"),
    // caron
    Symbol::text("Ǎ", r"\v A"),
    Symbol::text("ǎ", r"\v a"),
    Symbol::text("Č", r"\v C"),
    Symbol::text("č", r"\v c"),
    Symbol::text("Ď", r"\v D"),
    Symbol::text("ď", r"\v d"),
    Symbol::text("Ě", r"\v E"),
    Symbol::text("ě", r"\v e"),
    Symbol::text("Ǧ", r"\v G"),
    Symbol::text("ǧ", r"\v g"),
    Symbol::text("Ǐ", r"\v I"),
    Symbol::text("ǐ", r"\v\i"),
    Symbol::text("ǰ", r"\v\j"),
    Symbol::text("Ǩ", r"\v K"),
    Symbol::text("ǩ", r"\v k"),
    Symbol::text("Ľ", r"\v L"),
    Symbol::text("ľ", r"\v l"),
    Symbol::text("Ň", r"\v N"),
    Symbol::text("ň", r"\v n"),
    Symbol::text("Ǒ", r"\v O"),
    Symbol::text("ǒ", r"\v o"),
    Symbol::text("Ř", r"\v R"),
    Symbol::text("ř", r"\v r"),
    Symbol::text("Š", r"\v S"),
    Symbol::text("š", r"\v s"),
    Symbol::text("Ť", r"\v T"),
    Symbol::text("ť", r"\v t"),
    Symbol::text("Ǔ", r"\v U"),
    Symbol::text("ǔ", r"\v u"),
    Symbol::text("Ž", r"\v Z"),
    Symbol::text("ž", r"\v z"),
    Symbol::text("Ǆ", r"D\v Z"),
    Symbol::text("ǅ", r"D\v z"),
    Symbol::text("ǆ", r"d\v z"),
    // double acute
    Symbol::text("Ő", r"\H O"),
    Symbol::text("ő", r"\H o"),
    Symbol::text("Ű", r"\H U"),
    Symbol::text("ű", r"\H u"),
];

/// Ligatures and digraphs, written out letter by letter
pub static LIGATURES: &[Symbol] = &[
    Symbol::text("Ĳ", "IJ").encode_only(),
    Symbol::text("ĳ", "ij").encode_only(),
    Symbol::text("Ǳ", "DZ").encode_only(),
    Symbol::text("ǲ", "Dz").encode_only(),
    Symbol::text("ǳ", "dz").encode_only(),
    Symbol::text("Ǉ", "LJ").encode_only(),
    Symbol::text("ǈ", "Lj").encode_only(),
    Symbol::text("ǉ", "lj").encode_only(),
    Symbol::text("Ǌ", "NJ").encode_only(),
    Symbol::text("ǋ", "Nj").encode_only(),
    Symbol::text("ǌ", "nj").encode_only(),
    Symbol::text("ﬀ", "ff").encode_only(),
    Symbol::text("ﬁ", "fi").encode_only(),
    Symbol::text("ﬂ", "fl").encode_only(),
    Symbol::text("ﬃ", "ffi").encode_only(),
    Symbol::text("ﬄ", "ffl").encode_only(),
    Symbol::text("ﬆ", "st").encode_only(),
];
