//! Codec front-end
//!
//! Codecs are named `latex`, `latex+<encoding>`, `ulatex` or
//! `ulatex+<encoding>`. The `latex` family works on bytes in the
//! sub-encoding; the `ulatex` family works on text and keeps every character
//! the sub-encoding can represent.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::decoder::{DecodeErrors, DecodeOptions, Decoder};
use crate::core::encoder::{EncodeErrors, EncodeOptions, Encoder};
use crate::utils::charset::SubEncoding;
use crate::utils::error::{CodecError, CodecResult, DecodeError};

lazy_static! {
    static ref CODEC_NAME: Regex =
        Regex::new(r"(?i)^(u?latex)(?:\+(.+))?$").expect("codec name pattern is valid");
}

/// Codec family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// LaTeX bytes in the sub-encoding
    Latex,
    /// LaTeX text, non-ASCII characters kept where the sub-encoding allows
    ULatex,
}

impl CodecKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CodecKind::Latex => "latex",
            CodecKind::ULatex => "ulatex",
        }
    }
}

/// A parsed codec name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecName {
    pub kind: CodecKind,
    /// Sub-encoding label, lowercased; `None` means ascii
    pub encoding: Option<String>,
}

impl FromStr for CodecName {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = CODEC_NAME
            .captures(s.trim())
            .ok_or_else(|| CodecError::unknown_codec(s))?;
        let kind = if caps[1].eq_ignore_ascii_case("ulatex") {
            CodecKind::ULatex
        } else {
            CodecKind::Latex
        };
        Ok(CodecName {
            kind,
            encoding: caps.get(2).map(|m| m.as_str().to_ascii_lowercase()),
        })
    }
}

impl fmt::Display for CodecName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.encoding {
            Some(encoding) => write!(f, "{}+{}", self.kind.as_str(), encoding),
            None => f.write_str(self.kind.as_str()),
        }
    }
}

/// A resolved codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    name: CodecName,
    encoding: SubEncoding,
}

impl Codec {
    pub fn new(kind: CodecKind, encoding: SubEncoding) -> Self {
        let label = (encoding != SubEncoding::Ascii).then(|| encoding.name().to_ascii_lowercase());
        Self {
            name: CodecName {
                kind,
                encoding: label,
            },
            encoding,
        }
    }

    /// Parse a codec name and resolve its sub-encoding
    pub fn from_name(name: &str) -> CodecResult<Self> {
        let name: CodecName = name.parse()?;
        let encoding = match &name.encoding {
            Some(label) => {
                SubEncoding::for_label(label).ok_or_else(|| CodecError::unknown_encoding(label))?
            }
            None => SubEncoding::Ascii,
        };
        Ok(Self { name, encoding })
    }

    pub fn name(&self) -> &CodecName {
        &self.name
    }

    pub fn kind(&self) -> CodecKind {
        self.name.kind
    }

    pub fn encoding(&self) -> SubEncoding {
        self.encoding
    }

    /// Encode text to LaTeX bytes; `ulatex` codecs produce UTF-8
    pub fn encode(&self, text: &str, errors: EncodeErrors) -> CodecResult<Vec<u8>> {
        self.encode_with(text, EncodeOptions::new().with_errors(errors))
    }

    pub fn encode_with(&self, text: &str, options: EncodeOptions) -> CodecResult<Vec<u8>> {
        let encoder = Encoder::new(self.encoding).with_options(options);
        let bytes = match self.kind() {
            CodecKind::Latex => encoder.encode(text)?,
            CodecKind::ULatex => encoder.encode_text(text)?.into_bytes(),
        };
        Ok(bytes)
    }

    /// Encode text to LaTeX text
    pub fn encode_text(&self, text: &str, errors: EncodeErrors) -> CodecResult<String> {
        let options = EncodeOptions::new().with_errors(errors);
        Ok(Encoder::new(self.encoding)
            .with_options(options)
            .encode_text(text)?)
    }

    /// Decode LaTeX bytes; `ulatex` codecs require UTF-8 input
    pub fn decode(&self, input: &[u8], errors: DecodeErrors) -> CodecResult<String> {
        self.decode_with(input, DecodeOptions::new().with_errors(errors))
    }

    pub fn decode_with(&self, input: &[u8], options: DecodeOptions) -> CodecResult<String> {
        let encoding = match self.kind() {
            CodecKind::Latex => self.encoding,
            CodecKind::ULatex => {
                if let Err(err) = std::str::from_utf8(input) {
                    return Err(DecodeError::invalid(format!(
                        "ulatex input is not UTF-8 (byte {})",
                        err.valid_up_to()
                    ))
                    .into());
                }
                SubEncoding::Utf8
            }
        };
        Ok(Decoder::new(encoding).with_options(options).decode(input)?)
    }

    /// Decode LaTeX text
    pub fn decode_text(&self, text: &str, errors: DecodeErrors) -> CodecResult<String> {
        let options = DecodeOptions::new().with_errors(errors);
        Ok(Decoder::new(SubEncoding::Utf8)
            .with_options(options)
            .decode(text.as_bytes())?)
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Codec search function for the `latex` family
pub fn find_latex(name: &str) -> Option<Codec> {
    match Codec::from_name(name) {
        Ok(codec) => Some(codec),
        Err(err) => {
            log::debug!("find_latex({:?}): {}", name, err);
            None
        }
    }
}
