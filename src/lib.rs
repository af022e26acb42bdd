//! # texcodec
//!
//! Bidirectional LaTeX ↔ Unicode codec written in Rust.
//!
//! ## Features
//!
//! - **Lossless lexer**: zero-copy tokens that concatenate back to the input
//! - **Longest match**: multi-token LaTeX sequences and multi-character
//!   Unicode strings are preferred over shorter ones
//! - **Sub-encodings**: `latex+latin1`, `latex+utf8`, or any ASCII-compatible
//!   encoding for characters LaTeX does not need to escape
//! - **Error modes**: `strict`, `ignore`, `replace`, and `keep` for encoding
//! - **Codec registry**: resolve `latex`, `latex+<enc>`, `ulatex`,
//!   `ulatex+<enc>` by name
//!
//! ## Usage Examples
//!
//! ### Decoding and encoding
//!
//! ```rust
//! use texcodec::{decode, encode};
//!
//! assert_eq!(decode(br"\'el\`eve").unwrap(), "élève");
//! assert_eq!(encode("ångström").unwrap(), br#"\aa ngstr\"om"#);
//! ```
//!
//! ### Named codecs
//!
//! ```rust
//! use texcodec::{lookup, register, DecodeErrors, EncodeErrors};
//!
//! register();
//! let codec = lookup("latex+latin2").unwrap();
//! assert_eq!(codec.decode(b"\xfe", DecodeErrors::Strict).unwrap(), "ţ");
//!
//! let ulatex = lookup("ulatex").unwrap();
//! assert_eq!(ulatex.encode_text("⌨", EncodeErrors::Keep).unwrap(), "⌨");
//! ```

/// Core codec modules
pub mod core;

/// Data layer - symbol registry
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core types
pub use crate::core::codec::{find_latex, Codec, CodecKind, CodecName};
pub use crate::core::decoder::{DecodeErrors, DecodeOptions, Decoder};
pub use crate::core::encoder::{EncodeErrors, EncodeOptions, Encoder};
pub use crate::core::lexer::{tokenize, Lexer, Token, TokenKind};
pub use crate::core::registry::{clear, lookup, register, register_search_function, unregister};
pub use crate::core::table::{Symbol, TableBuilder, TranslationTable};

// Re-export utilities
pub use crate::utils::charset::SubEncoding;
pub use crate::utils::error::{CodecError, DecodeError, EncodeError, LexError};

/// Decode LaTeX bytes with the `latex` codec (ascii sub-encoding, strict)
pub fn decode(input: &[u8]) -> Result<String, DecodeError> {
    Decoder::new(SubEncoding::Ascii).decode(input)
}

/// Encode text with the `latex` codec (ascii sub-encoding, strict)
pub fn encode(text: &str) -> Result<Vec<u8>, EncodeError> {
    Encoder::new(SubEncoding::Ascii).encode(text)
}

/// Decode LaTeX bytes in the given sub-encoding (`None` for ascii)
pub fn decode_with(input: &[u8], encoding: Option<&str>) -> Result<String, CodecError> {
    codec_for(CodecKind::Latex, encoding)?.decode(input, DecodeErrors::Strict)
}

/// Encode text to LaTeX bytes in the given sub-encoding (`None` for ascii)
pub fn encode_with(
    text: &str,
    encoding: Option<&str>,
    errors: EncodeErrors,
) -> Result<Vec<u8>, CodecError> {
    codec_for(CodecKind::Latex, encoding)?.encode(text, errors)
}

/// Convert LaTeX text to Unicode, replacing anything undecodable
pub fn latex_to_unicode(input: &str) -> Result<String, DecodeError> {
    Decoder::new(SubEncoding::Utf8)
        .with_options(DecodeOptions::lenient())
        .decode(input.as_bytes())
}

/// Convert Unicode text to LaTeX, escaping only what LaTeX needs escaped
///
/// Non-ASCII characters with a LaTeX form are translated; the rest are kept.
pub fn unicode_to_latex(text: &str) -> String {
    let encoder = Encoder::new(SubEncoding::Ascii).with_options(EncodeOptions::keep());
    match encoder.encode_text(text) {
        Ok(latex) => latex,
        Err(err) => {
            log::warn!("unicode_to_latex: {}", err);
            text.to_string()
        }
    }
}

fn codec_for(kind: CodecKind, encoding: Option<&str>) -> Result<Codec, CodecError> {
    match encoding {
        Some(label) => SubEncoding::for_label(label)
            .map(|encoding| Codec::new(kind, encoding))
            .ok_or_else(|| CodecError::unknown_encoding(label)),
        None => Ok(Codec::new(kind, SubEncoding::Ascii)),
    }
}
