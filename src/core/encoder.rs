//! Unicode → LaTeX encoding
//!
//! At each position of the input the encoder tries, in order:
//!
//! 1. the longest table match, used right away when it covers more than one
//!    character or starts with an ASCII character (escaping `%`, `#`, ...);
//! 2. the character itself, when the sub-encoding can represent it;
//! 3. the single-character table match;
//! 4. the error mode.
//!
//! Output goes to a [`Sink`]: bytes in the sub-encoding for `latex`, text
//! for `ulatex`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::core::table::{EncodeMatch, Entry, TranslationTable};
use crate::utils::charset::SubEncoding;
use crate::utils::error::{CodecError, EncodeError, EncodeResult};

// =============================================================================
// Encoding Options
// =============================================================================

/// What to do with characters that have no LaTeX or sub-encoding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EncodeErrors {
    /// Fail with the character and its position
    #[default]
    Strict,
    /// Drop the character
    Ignore,
    /// Write `{\charN}` with N the decimal code point
    Replace,
    /// Pass the character through unchanged
    Keep,
}

impl EncodeErrors {
    pub fn as_str(self) -> &'static str {
        match self {
            EncodeErrors::Strict => "strict",
            EncodeErrors::Ignore => "ignore",
            EncodeErrors::Replace => "replace",
            EncodeErrors::Keep => "keep",
        }
    }
}

impl fmt::Display for EncodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodeErrors {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(EncodeErrors::Strict),
            "ignore" => Ok(EncodeErrors::Ignore),
            "replace" => Ok(EncodeErrors::Replace),
            "keep" => Ok(EncodeErrors::Keep),
            _ => Err(CodecError::InvalidErrorMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Options for Unicode to LaTeX encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    /// Default: strict
    pub errors: EncodeErrors,

    /// Encode as if inside math mode (`\alpha` rather than `$\alpha$`)
    /// Default: false
    pub math: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::default()
    }

    /// Pass unmappable characters through
    pub fn keep() -> Self {
        Self {
            errors: EncodeErrors::Keep,
            ..Self::default()
        }
    }

    /// Output meant for a math-mode context
    pub fn math() -> Self {
        Self {
            math: true,
            ..Self::default()
        }
    }

    pub fn with_errors(mut self, errors: EncodeErrors) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_math(mut self, math: bool) -> Self {
        self.math = math;
        self
    }
}

// =============================================================================
// Output sinks
// =============================================================================

/// Destination of encoded output
pub trait Sink {
    /// Write LaTeX markup or characters the sub-encoding represents
    fn write_str(&mut self, s: &str) -> EncodeResult<()>;

    /// Write a character kept by [`EncodeErrors::Keep`]
    fn write_kept(&mut self, c: char) -> EncodeResult<()>;
}

impl Sink for String {
    fn write_str(&mut self, s: &str) -> EncodeResult<()> {
        self.push_str(s);
        Ok(())
    }

    fn write_kept(&mut self, c: char) -> EncodeResult<()> {
        self.push(c);
        Ok(())
    }
}

/// Byte output in a sub-encoding; kept characters are written as UTF-8
#[derive(Debug, Clone, Default)]
pub struct ByteSink {
    encoding: SubEncoding,
    bytes: Vec<u8>,
}

impl ByteSink {
    pub fn new(encoding: SubEncoding) -> Self {
        Self {
            encoding,
            bytes: Vec::new(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Sink for ByteSink {
    fn write_str(&mut self, s: &str) -> EncodeResult<()> {
        if s.is_ascii() {
            self.bytes.extend_from_slice(s.as_bytes());
            return Ok(());
        }
        for c in s.chars() {
            if !self.encoding.encode_char(c, &mut self.bytes) {
                return Err(EncodeError::charset(format!(
                    "{:?} cannot be written as {}",
                    c, self.encoding
                )));
            }
        }
        Ok(())
    }

    fn write_kept(&mut self, c: char) -> EncodeResult<()> {
        let mut buf = [0u8; 4];
        self.bytes
            .extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        Ok(())
    }
}

// =============================================================================
// Encoder
// =============================================================================

/// Table-driven LaTeX encoder
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t> {
    table: &'t TranslationTable,
    encoding: SubEncoding,
    options: EncodeOptions,
}

/// One step of output
enum Piece<'t> {
    Latex {
        text: Cow<'t, str>,
        control_word: bool,
        /// Table entry the text came from, if any
        entry: Option<&'t Entry>,
    },
    Raw(char),
    Kept(char),
    Nothing,
}

impl<'t> Piece<'t> {
    fn from_entry(entry: &'t Entry) -> Self {
        Piece::Latex {
            text: Cow::Borrowed(entry.latex.as_str()),
            control_word: entry.ends_with_control_word(),
            entry: Some(entry),
        }
    }

    fn first_char(&self) -> Option<char> {
        match self {
            Piece::Latex { text, .. } => text.chars().next(),
            Piece::Raw(c) | Piece::Kept(c) => Some(*c),
            Piece::Nothing => None,
        }
    }

    /// Last character the next piece could run into; a control word is
    /// always followed by a separator
    fn trailing_char(&self) -> Option<char> {
        match self {
            Piece::Latex {
                control_word: true, ..
            } => None,
            Piece::Latex { text, .. } => text.chars().last(),
            Piece::Raw(c) | Piece::Kept(c) => Some(*c),
            Piece::Nothing => None,
        }
    }

    fn is_table(&self) -> bool {
        matches!(self, Piece::Latex { entry: Some(_), .. })
    }
}

/// Whether the lexer would read `left` followed by `right` as one ligature
fn forms_ligature(left: char, right: char) -> bool {
    match (left, right) {
        ('-', '-') | ('`', '`') | ('\'', '\'') | (',', ',') => true,
        ('?', '`') | ('!', '`') => true,
        _ => false,
    }
}

fn is_ligature_char(c: char) -> bool {
    matches!(c, '-' | '`' | '\'' | ',' | '?' | '!')
}

impl Encoder<'static> {
    /// Encoder over the built-in table
    pub fn new(encoding: SubEncoding) -> Self {
        Self::with_table(TranslationTable::latex(), encoding)
    }
}

impl<'t> Encoder<'t> {
    pub fn with_table(table: &'t TranslationTable, encoding: SubEncoding) -> Self {
        Self {
            table,
            encoding,
            options: EncodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    pub fn encoding(&self) -> SubEncoding {
        self.encoding
    }

    /// Encode to bytes in the sub-encoding
    pub fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        let mut sink = ByteSink::new(self.encoding);
        self.encode_into(text, &mut sink)?;
        Ok(sink.into_bytes())
    }

    /// Encode to text; characters the sub-encoding represents stay as they are
    pub fn encode_text(&self, text: &str) -> EncodeResult<String> {
        let mut out = String::with_capacity(text.len());
        self.encode_into(text, &mut out)?;
        Ok(out)
    }

    pub fn encode_into<S: Sink + ?Sized>(&self, text: &str, sink: &mut S) -> EncodeResult<()> {
        let mut pieces = Vec::new();
        let mut rest = text;
        let mut position = 0;
        while let Some(c) = rest.chars().next() {
            let (piece, consumed) = self.next_piece(rest, c, position)?;
            pieces.push(piece);
            position += rest[..consumed].chars().count();
            rest = &rest[consumed..];
        }

        let mut after_control_word = false;
        for piece in self.separate_ligatures(pieces) {
            let Some(first) = piece.first_char() else {
                continue;
            };
            // a control word eats the whitespace after it
            let mut skip = 0;
            if after_control_word {
                if matches!(first, ' ' | '\t' | '\n' | '\r') {
                    sink.write_str("\\ ")?;
                    skip = 1;
                } else {
                    sink.write_str(" ")?;
                }
            }
            after_control_word = false;
            match piece {
                Piece::Latex {
                    text, control_word, ..
                } => {
                    sink.write_str(&text[skip..])?;
                    after_control_word = control_word;
                }
                Piece::Raw(c) if skip == 0 => {
                    let mut buf = [0u8; 4];
                    sink.write_str(c.encode_utf8(&mut buf))?;
                }
                Piece::Kept(c) if skip == 0 => sink.write_kept(c)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Keep neighbouring pieces from lexing as one ligature (`--` then `-`).
    ///
    /// One side is respelled without ligature characters (`\textendash`);
    /// failing that, the two are separated by `{}`. Two raw characters are
    /// left as they are.
    fn separate_ligatures(&self, pieces: Vec<Piece<'t>>) -> Vec<Piece<'t>> {
        let mut out: Vec<Piece<'t>> = Vec::with_capacity(pieces.len());
        let mut last = None;
        for mut piece in pieces {
            let Some(first) = piece.first_char() else {
                out.push(piece);
                continue;
            };
            if let Some(index) = last {
                let before: &mut Piece<'t> = &mut out[index];
                if before
                    .trailing_char()
                    .is_some_and(|left| forms_ligature(left, first))
                    && (before.is_table() || piece.is_table())
                    && !self.respell(before)
                    && !self.respell(&mut piece)
                {
                    out.push(Piece::Latex {
                        text: Cow::Borrowed("{}"),
                        control_word: false,
                        entry: None,
                    });
                }
            }
            last = Some(out.len());
            out.push(piece);
        }
        out
    }

    /// Replace a table piece by a spelling of the same text that neither
    /// starts nor ends with a ligature character
    fn respell(&self, piece: &mut Piece<'t>) -> bool {
        let entry = match piece {
            Piece::Latex {
                entry: Some(entry), ..
            } => *entry,
            _ => return false,
        };
        let alternative = self
            .table
            .spellings(&entry.unicode, self.options.math)
            .find(|alt| {
                !alt.latex.is_empty()
                    && !alt.latex.starts_with(is_ligature_char)
                    && !alt.latex.ends_with(is_ligature_char)
            });
        match alternative {
            Some(alt) => {
                *piece = Piece::from_entry(alt);
                true
            }
            None => false,
        }
    }

    /// What to emit for the input starting at `rest`, and how many bytes it covers
    fn next_piece(&self, rest: &str, c: char, position: usize) -> EncodeResult<(Piece<'t>, usize)> {
        let found = self.table.lookup_encode(rest, self.options.math);
        let width = c.len_utf8();

        if let Some(found) = found {
            if found.len > width || c.is_ascii() {
                return Ok(latex_piece(found));
            }
        }
        if self.encoding.can_encode(c) {
            return Ok((Piece::Raw(c), width));
        }
        if let Some(found) = found {
            return Ok(latex_piece(found));
        }

        log::trace!("no LaTeX for {:?} at position {}", c, position);
        let piece = match self.options.errors {
            EncodeErrors::Strict => return Err(EncodeError::unmappable(c, position)),
            EncodeErrors::Ignore => Piece::Nothing,
            EncodeErrors::Keep => Piece::Kept(c),
            EncodeErrors::Replace => Piece::Latex {
                text: Cow::Owned(format!("{{\\char{}}}", c as u32)),
                control_word: false,
                entry: None,
            },
        };
        Ok((piece, width))
    }
}

fn latex_piece(found: EncodeMatch<'_>) -> (Piece<'_>, usize) {
    (Piece::from_entry(found.entry), found.len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{Symbol, TableBuilder};
    use pretty_assertions::assert_eq;

    fn encode(text: &str) -> String {
        Encoder::new(SubEncoding::Ascii).encode_text(text).unwrap()
    }

    fn encode_as(text: &str, label: &str) -> Vec<u8> {
        Encoder::new(SubEncoding::for_label(label).unwrap())
            .encode(text)
            .unwrap()
    }

    #[test]
    fn test_accents_and_spacing() {
        assert_eq!(encode("ångström"), r#"\aa ngstr\"om"#);
        assert_eq!(encode("mælström"), r#"m\ae lstr\"om"#);
        assert_eq!(encode("Seraf{í}n"), r"Seraf{\'\i }n");
        assert_eq!(encode("ææ"), r"\ae \ae");
        assert_eq!(encode("æ æ"), r"\ae\ \ae");
        assert_eq!(encode("æ\u{2003}æ"), r"\ae \quad \ae");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(encode("# hello"), r"\# hello");
        assert_eq!(encode("_"), r"\_");
        assert_eq!(encode("This is a % test."), r"This is a \% test.");
        assert_eq!(encode("a\\b"), r"a\textbackslash b");
        assert_eq!(encode("{x}"), "{x}");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(encode("\u{201C}a+b\u{201D}"), "``a+b''");
        assert_eq!(encode("\u{201C}á\u{201D}"), r"``\'a''");
        assert_eq!(encode("This is a \u{2010} test."), "This is a - test.");
        assert_eq!(encode("\u{201E}"), ",,");
        assert_eq!(
            encode("«quote»"),
            r"\guillemotleft quote\guillemotright"
        );
        assert_eq!(
            encode("This is a ˜, ˷, ∼ and ~test."),
            r"This is a \~{}, \texttildelow , $\sim$ and \textasciitilde test."
        );
    }

    #[test]
    fn test_math() {
        assert_eq!(encode("α"), r"$\alpha$");
        assert_eq!(encode("This is a ψ test."), r"This is a $\psi$ test.");
        assert_eq!(encode("This is a − test."), r"This is a $-$ test.");
        assert_eq!(encode("θ"), r"$\theta$");
        assert_eq!(encode("ℝ"), r"$\mathbb R$");
        assert_eq!(encode("ℓ"), r"$\ell$");

        let math = Encoder::new(SubEncoding::Ascii).with_options(EncodeOptions::math());
        assert_eq!(math.encode_text("α+β").unwrap(), r"\alpha +\beta");
        assert_eq!(math.encode_text("%").unwrap(), r"\%");
    }

    #[test]
    fn test_neighbouring_ligatures_are_respelled() {
        assert_eq!(encode("\u{2013}\u{2014}"), r"\textendash ---");
        assert_eq!(
            encode("\u{2013}\u{2013}\u{2013}"),
            r"\textendash \textendash --"
        );
        assert_eq!(encode("\u{2013}-"), r"\textendash -");
        assert_eq!(encode("-\u{2013}"), r"-\textendash");
        assert_eq!(encode("\u{201E},"), r"\glqq ,");
        // no other spelling: keep the two apart with a group
        assert_eq!(encode("\u{2010}\u{2010}"), "-{}-");
        // characters typed as such are left alone
        assert_eq!(encode("a--b"), "a--b");
    }

    #[test]
    fn test_whitespace_after_control_word() {
        assert_eq!(encode("å b"), r"\aa\ b");
        assert_eq!(encode("å\tb"), r"\aa\ b");
        assert_eq!(encode("å\nb"), r"\aa\ b");
        assert_eq!(encode("å  b"), r"\aa\  b");
    }

    #[test]
    fn test_ligatures_and_invisible_characters() {
        assert_eq!(encode("ﬀ ﬁ ﬂ ﬃ ﬄ ﬆ"), "ff fi fl ffi ffl st");
        assert_eq!(encode("Ǳ"), "DZ");
        assert_eq!(encode("1\u{200b}2\u{200c}3\u{200d}4"), r"1\hspace{0pt}2{}34");
    }

    #[test]
    fn test_ogonek() {
        assert_eq!(
            encode("ĄąĘęĮįǪǫŲų"),
            r"\k A\k a\k E\k e\k I\k i\k O\k o\k U\k u"
        );
        assert_eq!(
            encode("Ǭǭ"),
            r"\textogonekcentered{\=O}\textogonekcentered{\=o}"
        );
    }

    #[test]
    fn test_sub_encodings() {
        assert_eq!(encode_as("mælström", "latin1"), b"m\xe6lstr\xf6m");
        assert_eq!(encode_as("ţ", "latin2"), b"\xfe");
        assert_eq!(encode_as("# ψ", "utf8"), "\\# ψ".as_bytes());

        let err = Encoder::new(SubEncoding::Latin1).encode("ţ").unwrap_err();
        assert_eq!(err, EncodeError::unmappable('ţ', 0));
    }

    #[test]
    fn test_utf8_never_fails() {
        let encoder = Encoder::new(SubEncoding::Utf8);
        assert_eq!(encoder.encode("⌨ ţ").unwrap(), "⌨ ţ".as_bytes());
    }

    #[test]
    fn test_error_modes() {
        let encoder = Encoder::new(SubEncoding::Ascii);
        assert_eq!(
            encoder.encode("ab\u{2328}").unwrap_err(),
            EncodeError::unmappable('\u{2328}', 2)
        );

        let ignore = encoder.with_options(EncodeOptions::new().with_errors(EncodeErrors::Ignore));
        assert_eq!(ignore.encode("a\u{2328}b").unwrap(), b"ab");

        let replace = encoder.with_options(EncodeOptions::new().with_errors(EncodeErrors::Replace));
        assert_eq!(replace.encode("\u{2328}").unwrap(), br"{\char9000}");

        let keep = encoder.with_options(EncodeOptions::keep());
        assert_eq!(keep.encode_text("\u{2328}").unwrap(), "\u{2328}");
        assert_eq!(keep.encode("é\u{2328}").unwrap(), "\\'e\u{2328}".as_bytes());
    }

    #[test]
    fn test_kept_character_is_separated_from_control_word() {
        let keep = Encoder::new(SubEncoding::Ascii).with_options(EncodeOptions::keep());
        assert_eq!(keep.encode_text("å\u{2328}").unwrap(), "\\aa \u{2328}");
    }

    #[test]
    fn test_error_position_counts_characters() {
        let err = Encoder::new(SubEncoding::Ascii)
            .encode("ååå\u{2328}")
            .unwrap_err();
        assert_eq!(err, EncodeError::unmappable('\u{2328}', 3));
    }

    #[test]
    fn test_multi_character_entry_wins() {
        assert_eq!(encode("\u{2003}\u{2003}"), r"\qquad");
        assert_eq!(
            Encoder::new(SubEncoding::Utf8).encode_text("\u{2003}\u{2003}").unwrap(),
            r"\qquad"
        );
    }

    #[test]
    fn test_byte_sink_rejects_unencodable_markup() {
        let table = TableBuilder::new()
            .symbol(Symbol::text("x", "é"))
            .build()
            .unwrap();
        let err = Encoder::with_table(&table, SubEncoding::Ascii)
            .encode("x")
            .unwrap_err();
        assert!(matches!(err, EncodeError::Charset { .. }));
        assert_eq!(
            Encoder::with_table(&table, SubEncoding::Latin1).encode("x").unwrap(),
            b"\xe9"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_error_mode_names() {
        for mode in ["strict", "ignore", "replace", "keep"] {
            assert_eq!(mode.parse::<EncodeErrors>().unwrap().as_str(), mode);
        }
        assert_eq!(
            "**baderror**".parse::<EncodeErrors>().unwrap_err(),
            CodecError::InvalidErrorMode {
                mode: "**baderror**".to_string()
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_serde() {
        let options: EncodeOptions = serde_json::from_str(r#"{"errors": "keep"}"#).unwrap();
        assert_eq!(options, EncodeOptions::keep());
        assert_eq!(
            serde_json::to_string(&EncodeOptions::math()).unwrap(),
            r#"{"errors":"strict","math":true}"#
        );
    }
}
