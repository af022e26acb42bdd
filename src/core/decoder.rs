//! LaTeX → Unicode decoding
//!
//! The input is tokenized once, then scanned left to right. At every
//! position the longest token sequence registered in the translation table
//! wins; tokens nothing matches are rendered on their own, with bytes
//! outside LaTeX's ASCII core going through the sub-encoding.

use std::fmt;
use std::str::FromStr;

use crate::core::lexer::{tokenize, Token, TokenKind};
use crate::core::table::TranslationTable;
use crate::utils::charset::SubEncoding;
use crate::utils::error::{CodecError, DecodeError, DecodeResult};

// =============================================================================
// Decoding Options
// =============================================================================

/// What to do with bytes that cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecodeErrors {
    /// Fail with the offending offset
    #[default]
    Strict,
    /// Drop the offending bytes
    Ignore,
    /// U+FFFD for undecodable bytes, `?` for unknown tokens
    Replace,
}

impl DecodeErrors {
    pub fn as_str(self) -> &'static str {
        match self {
            DecodeErrors::Strict => "strict",
            DecodeErrors::Ignore => "ignore",
            DecodeErrors::Replace => "replace",
        }
    }
}

impl fmt::Display for DecodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodeErrors {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(DecodeErrors::Strict),
            "ignore" => Ok(DecodeErrors::Ignore),
            "replace" => Ok(DecodeErrors::Replace),
            "keep" => Err(DecodeError::UnsupportedErrorMode {
                mode: s.to_string(),
            }
            .into()),
            _ => Err(CodecError::InvalidErrorMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Options for LaTeX to Unicode decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Default: strict
    pub errors: DecodeErrors,

    /// Copy comments to the output instead of dropping them
    /// Default: false
    pub keep_comments: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the first undecodable byte
    pub fn strict() -> Self {
        Self::default()
    }

    /// Never fail on content: replace what cannot be decoded
    pub fn lenient() -> Self {
        Self {
            errors: DecodeErrors::Replace,
            ..Self::default()
        }
    }

    pub fn with_errors(mut self, errors: DecodeErrors) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_keep_comments(mut self, keep_comments: bool) -> Self {
        self.keep_comments = keep_comments;
        self
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// Table-driven LaTeX decoder
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    table: &'t TranslationTable,
    encoding: SubEncoding,
    options: DecodeOptions,
}

impl Decoder<'static> {
    /// Decoder over the built-in table
    pub fn new(encoding: SubEncoding) -> Self {
        Self::with_table(TranslationTable::latex(), encoding)
    }
}

impl<'t> Decoder<'t> {
    pub fn with_table(table: &'t TranslationTable, encoding: SubEncoding) -> Self {
        Self {
            table,
            encoding,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn encoding(&self) -> SubEncoding {
        self.encoding
    }

    /// Decode a LaTeX buffer to Unicode.
    ///
    /// A malformed control sequence anywhere in the input fails the whole
    /// call; nothing is returned for the part before it.
    pub fn decode(&self, input: &[u8]) -> DecodeResult<String> {
        let tokens = tokenize(input)?;
        let mut out = String::with_capacity(input.len());
        let mut i = 0;
        while i < tokens.len() {
            if let Some(found) = self.table.lookup_decode(&tokens[i..]) {
                out.push_str(&found.entry.unicode);
                i += found.tokens;
                continue;
            }
            self.decode_token(&tokens[i], &mut out)?;
            i += 1;
        }
        Ok(out)
    }

    fn decode_token(&self, token: &Token<'_>, out: &mut String) -> DecodeResult<()> {
        match token.kind {
            TokenKind::ControlWord => {
                out.extend(token.name().iter().map(|&b| b as char));
                if token.gobbled_whitespace() {
                    out.push(' ');
                }
            }
            TokenKind::Space => out.push(' '),
            TokenKind::NewlineRun => out.push_str("\n\n"),
            TokenKind::Comment => {
                if self.options.keep_comments {
                    self.decode_bytes(token, out)?;
                }
            }
            TokenKind::Unknown => match self.options.errors {
                DecodeErrors::Strict => {
                    return Err(DecodeError::UnknownToken {
                        offset: token.offset,
                        byte: token.text[0],
                    })
                }
                DecodeErrors::Ignore => {}
                DecodeErrors::Replace => out.extend(token.text.iter().map(|_| '?')),
            },
            _ => self.decode_bytes(token, out)?,
        }
        Ok(())
    }

    /// Sub-encoding first, then UTF-8, then the error mode
    fn decode_bytes(&self, token: &Token<'_>, out: &mut String) -> DecodeResult<()> {
        if let Some(text) = self.encoding.decode(token.text) {
            out.push_str(&text);
            return Ok(());
        }
        if let Ok(text) = std::str::from_utf8(token.text) {
            log::trace!(
                "{} bytes at offset {} are not {}, decoded as UTF-8",
                token.len(),
                token.offset,
                self.encoding
            );
            out.push_str(text);
            return Ok(());
        }
        match self.options.errors {
            DecodeErrors::Strict => Err(DecodeError::undecodable(
                token.offset,
                token.len(),
                self.encoding.name(),
            )),
            DecodeErrors::Ignore => Ok(()),
            DecodeErrors::Replace => {
                out.push(char::REPLACEMENT_CHARACTER);
                Ok(())
            }
        }
    }
}
