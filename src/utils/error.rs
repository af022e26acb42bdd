//! Error handling for texcodec
//!
//! This module provides the error types for lexing, decoding, encoding and
//! codec lookup. Every error is terminal for the call that raised it.

use std::fmt;

/// Malformed control sequence found while lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    /// Byte offset of the offending token
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in bytes (1-indexed)
    pub column: usize,
}

impl LexError {
    pub fn new(message: impl Into<String>, offset: usize, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lex error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Decoding error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input could not be tokenized
    Lex(LexError),
    /// Bytes that neither the sub-encoding nor UTF-8 can decode
    Undecodable {
        offset: usize,
        len: usize,
        encoding: String,
    },
    /// A byte with no meaning in LaTeX (NUL or DEL)
    UnknownToken { offset: usize, byte: u8 },
    /// Input rejected before lexing (e.g. non UTF-8 input to `ulatex`)
    InvalidInput { message: String },
    /// The `keep` error mode only applies to encoding
    UnsupportedErrorMode { mode: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Lex(err) => write!(f, "{}", err),
            DecodeError::Undecodable {
                offset,
                len,
                encoding,
            } => write!(
                f,
                "Cannot decode {} byte(s) at offset {} as {}",
                len, offset, encoding
            ),
            DecodeError::UnknownToken { offset, byte } => {
                write!(f, "Unknown token {:#04x} at offset {}", byte, offset)
            }
            DecodeError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            DecodeError::UnsupportedErrorMode { mode } => {
                write!(f, "Error mode '{}' is not supported for decoding", mode)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for DecodeError {
    fn from(err: LexError) -> Self {
        DecodeError::Lex(err)
    }
}

impl DecodeError {
    pub fn undecodable(offset: usize, len: usize, encoding: impl Into<String>) -> Self {
        DecodeError::Undecodable {
            offset,
            len,
            encoding: encoding.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        DecodeError::InvalidInput {
            message: message.into(),
        }
    }

    /// Byte offset of the failure, when known
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::Lex(err) => Some(err.offset),
            DecodeError::Undecodable { offset, .. } | DecodeError::UnknownToken { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}

/// Encoding error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No table entry and no sub-encoding representation exists
    Unmappable {
        character: char,
        /// Offset in characters from the start of the input
        position: usize,
    },
    /// The sub-encoding rejected text it claimed to support
    Charset { message: String },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Unmappable {
                character,
                position,
            } => write!(
                f,
                "Don't know how to translate {:?} (U+{:04X}) at position {} into LaTeX",
                character, *character as u32, position
            ),
            EncodeError::Charset { message } => write!(f, "Sub-encoding error: {}", message),
        }
    }
}

impl std::error::Error for EncodeError {}

impl EncodeError {
    pub fn unmappable(character: char, position: usize) -> Self {
        EncodeError::Unmappable {
            character,
            position,
        }
    }

    pub fn charset(message: impl Into<String>) -> Self {
        EncodeError::Charset {
            message: message.into(),
        }
    }
}

/// Codec lookup and front-end error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// No registered search function knows this codec name
    UnknownCodec { name: String },
    /// The sub-encoding label does not name an ASCII-compatible encoding
    UnknownEncoding { label: String },
    /// An error mode name that is not `strict`, `ignore`, `replace` or `keep`
    InvalidErrorMode { mode: String },
    Decode(DecodeError),
    Encode(EncodeError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnknownCodec { name } => write!(f, "Unknown codec: {}", name),
            CodecError::UnknownEncoding { label } => {
                write!(f, "Unknown or unsupported sub-encoding: {}", label)
            }
            CodecError::InvalidErrorMode { mode } => {
                write!(f, "LaTeX codec does not support '{}' errors", mode)
            }
            CodecError::Decode(err) => write!(f, "{}", err),
            CodecError::Encode(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Decode(err) => Some(err),
            CodecError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for CodecError {
    fn from(err: DecodeError) -> Self {
        CodecError::Decode(err)
    }
}

impl From<EncodeError> for CodecError {
    fn from(err: EncodeError) -> Self {
        CodecError::Encode(err)
    }
}

impl From<LexError> for CodecError {
    fn from(err: LexError) -> Self {
        CodecError::Decode(DecodeError::Lex(err))
    }
}

impl CodecError {
    pub fn unknown_codec(name: impl Into<String>) -> Self {
        CodecError::UnknownCodec { name: name.into() }
    }

    pub fn unknown_encoding(label: impl Into<String>) -> Self {
        CodecError::UnknownEncoding {
            label: label.into(),
        }
    }
}

/// Result type for decoding
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encoding
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for front-end operations
pub type CodecResult<T> = Result<T, CodecError>;
