//! Special characters, punctuation, spacing and text symbols
//!
//! Registry order is priority order: when two rows share a Unicode string,
//! the first one is used for encoding.

use crate::core::table::Symbol;

/// Characters that must be escaped, paragraph breaks and control spaces
pub static SPECIAL_CHARACTERS: &[Symbol] = &[
    Symbol::text("\n\n", r"\par").decode_only(),
    Symbol::text("\n\n", r" \par").decode_only(),
    Symbol::text(" ", r"\ ").decode_only(),
    Symbol::both("%", r"\%"),
    Symbol::both("#", r"\#"),
    Symbol::both("&", r"\&"),
    Symbol::both("_", r"\_"),
    Symbol::both("$", r"\$"),
    Symbol::both("{", r"\{").decode_only(),
    Symbol::both("}", r"\}").decode_only(),
    Symbol::text("\\", r"\textbackslash"),
    Symbol::math("\\", r"\backslash"),
    Symbol::text("~", r"\textasciitilde"),
    Symbol::text("^", r"\textasciicircum").decode_only(),
    Symbol::text("_", r"\textunderscore").decode_only(),
    Symbol::text("|", r"\textbar").decode_only(),
    Symbol::text("<", r"\textless").decode_only(),
    Symbol::text(">", r"\textgreater").decode_only(),
];

/// Dashes, quotes and other punctuation
pub static PUNCTUATION: &[Symbol] = &[
    Symbol::text("\u{2013}", "--"),
    Symbol::text("\u{2013}", r"\textendash"),
    Symbol::text("\u{2014}", "---"),
    Symbol::text("\u{2014}", r"\textemdash"),
    Symbol::text("\u{2010}", "-").encode_only(),
    Symbol::math("\u{2212}", "-"),
    Symbol::text("\u{2018}", "`").encode_only(),
    Symbol::text("\u{2019}", "'").encode_only(),
    Symbol::text("\u{201C}", "``"),
    Symbol::text("\u{201D}", "''"),
    Symbol::text("\u{2018}", r"\textquoteleft"),
    Symbol::text("\u{2019}", r"\textquoteright"),
    Symbol::text("\u{201C}", r"\textquotedblleft"),
    Symbol::text("\u{201D}", r"\textquotedblright"),
    Symbol::text("\u{201E}", ",,"),
    Symbol::text("\u{201E}", r"\glqq"),
    Symbol::text("\u{201A}", r"\glq"),
    Symbol::text("\u{201A}", r"\quotesinglbase"),
    Symbol::text("\u{201E}", r"\quotedblbase"),
    Symbol::text("«", r"\guillemotleft"),
    Symbol::text("»", r"\guillemotright"),
    Symbol::text("‹", r"\guilsinglleft"),
    Symbol::text("›", r"\guilsinglright"),
    Symbol::text("¡", "!`"),
    Symbol::text("¡", r"\textexclamdown"),
    Symbol::text("¿", "?`"),
    Symbol::text("¿", r"\textquestiondown"),
    Symbol::both("…", r"\ldots"),
    Symbol::text("…", r"\dots"),
    Symbol::text("…", r"\textellipsis"),
    Symbol::text("\u{00AD}", r"\-"),
];

/// Spacing commands and invisible characters
pub static SPACING: &[Symbol] = &[
    Symbol::both("\u{00A0}", "~"),
    Symbol::both("\u{2009}", r"\,"),
    Symbol::text("\u{2002}", r"\enspace"),
    Symbol::text("\u{2003}", r"\quad"),
    Symbol::text("\u{2003}\u{2003}", r"\qquad"),
    Symbol::text("\u{200B}", r"\hspace{0pt}").encode_only(),
    Symbol::text("\u{200C}", "{}").encode_only(),
    Symbol::text("\u{200D}", "").encode_only(),
];

/// Currency, legal and other text symbols (mostly textcomp)
pub static TEXT_SYMBOLS: &[Symbol] = &[
    Symbol::text("†", r"\dag"),
    Symbol::text("†", r"\textdagger"),
    Symbol::text("‡", r"\ddag"),
    Symbol::text("‡", r"\textdaggerdbl"),
    Symbol::text("§", r"\S"),
    Symbol::text("§", r"\textsection"),
    Symbol::text("¶", r"\P"),
    Symbol::text("¶", r"\textparagraph"),
    Symbol::text("©", r"\copyright"),
    Symbol::text("©", r"\textcopyright"),
    Symbol::text("®", r"\textregistered"),
    Symbol::math("™", "^{TM}"),
    Symbol::text("™", r"\texttrademark").package("textcomp"),
    Symbol::text("£", r"\pounds"),
    Symbol::text("£", r"\textsterling").package("textcomp"),
    Symbol::text("¢", r"\not{c}"),
    Symbol::text("¢", r"\textcent").package("textcomp"),
    Symbol::text("¥", r"\textyen").package("textcomp"),
    Symbol::text("€", r"\texteuro").package("textcomp"),
    Symbol::text("€", r"\euro").package("eurosym"),
    Symbol::text("¤", r"\textcurrency").package("textcomp"),
    Symbol::text("¦", r"\textbrokenbar").package("textcomp"),
    Symbol::math("°", r"^\circ"),
    Symbol::text("°", r"\textdegree").package("textcomp"),
    Symbol::math("±", r"\pm"),
    Symbol::text("±", r"\textpm").package("textcomp"),
    Symbol::math("¬", r"\neg"),
    Symbol::text("¬", r"\textlnot").package("textcomp"),
    Symbol::math("¹", "^1"),
    Symbol::text("¹", r"\textonesuperior").package("textcomp"),
    Symbol::math("²", "^2"),
    Symbol::text("²", r"\texttwosuperior").package("textcomp"),
    Symbol::math("³", "^3"),
    Symbol::text("³", r"\textthreesuperior").package("textcomp"),
    Symbol::text("µ", r"\micro").package("gensymb"),
    Symbol::text("µ", r"\textmu").package("textcomp"),
    Symbol::math("·", r"\cdot"),
    Symbol::text("·", r"\textperiodcentered").package("textcomp"),
    Symbol::math("•", r"\bullet"),
    Symbol::text("•", r"\textbullet").package("textcomp"),
    Symbol::text("ª", r"\textordfeminine").package("textcomp"),
    Symbol::text("º", r"\textordmasculine").package("textcomp"),
    Symbol::text("¼", r"\textonequarter").package("textcomp"),
    Symbol::text("½", r"\textonehalf").package("textcomp"),
    Symbol::text("¾", r"\textthreequarters").package("textcomp"),
    Symbol::text("‰", r"\textperthousand").package("textcomp"),
    Symbol::text("\u{02F7}", r"\texttildelow").package("textcomp"),
    Symbol::text("θ", r"\texttheta").package("tipa").decode_only(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_rows() {
        for list in [SPECIAL_CHARACTERS, PUNCTUATION, SPACING, TEXT_SYMBOLS] {
            for (i, a) in list.iter().enumerate() {
                for b in &list[i + 1..] {
                    assert!(
                        !(a.unicode == b.unicode && a.latex == b.latex),
                        "duplicate row {:?}",
                        a
                    );
                }
            }
        }
    }

    #[test]
    fn test_escaped_ascii_come_first() {
        let escaped: Vec<_> = SPECIAL_CHARACTERS
            .iter()
            .filter(|s| s.direction.encodes())
            .map(|s| s.unicode)
            .collect();
        for c in ["%", "#", "&", "_", "$", "\\", "~"] {
            assert!(escaped.contains(&c), "{} is not escaped", c);
        }
    }
}
