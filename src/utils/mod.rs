//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Sub-encoding resolution for non-LaTeX bytes

pub mod charset;
pub mod error;

// Re-export commonly used items
pub use charset::SubEncoding;
pub use error::{
    CodecError, CodecResult, DecodeError, DecodeResult, EncodeError, EncodeResult, LexError,
};
