//! Core codec modules
//!
//! This module contains the translation engine, leaf first:
//! - `lexer`: LaTeX tokenizer
//! - `table`: bidirectional Unicode ↔ LaTeX translation table
//! - `decoder` / `encoder`: table-driven conversion in each direction
//! - `codec` / `registry`: named codecs and the codec registry

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod lexer;
pub mod registry;
pub mod table;

// Re-export main types and functions
pub use codec::{find_latex, Codec, CodecKind, CodecName};
pub use decoder::{DecodeErrors, DecodeOptions, Decoder};
pub use encoder::{ByteSink, EncodeErrors, EncodeOptions, Encoder, Sink};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use registry::{lookup, register, register_search_function, unregister, SearchFunction};
pub use table::{Direction, Entry, Mode, Symbol, TableBuilder, TranslationTable};
