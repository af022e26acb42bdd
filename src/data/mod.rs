//! Data layer - Static symbol registry
//!
//! This module contains the rows the built-in translation table is built from:
//! - Special characters, punctuation, spacing and text symbols
//! - Accented and special letters, standalone accents, ligatures
//! - Greek letters and math symbols

pub mod accents;
pub mod math;
pub mod symbols;

use crate::core::table::Symbol;

// Re-export commonly used items
pub use accents::{ACCENTED_LETTERS, LIGATURES, SPECIAL_LETTERS, STANDALONE_ACCENTS};
pub use math::{GREEK_LETTERS, MATH_SYMBOLS};
pub use symbols::{PUNCTUATION, SPACING, SPECIAL_CHARACTERS, TEXT_SYMBOLS};

/// All registry rows in priority order
pub fn all_symbols() -> impl Iterator<Item = Symbol> {
    [
        SPECIAL_CHARACTERS,
        PUNCTUATION,
        SPACING,
        SPECIAL_LETTERS,
        STANDALONE_ACCENTS,
        ACCENTED_LETTERS,
        LIGATURES,
        GREEK_LETTERS,
        MATH_SYMBOLS,
        TEXT_SYMBOLS,
    ]
    .into_iter()
    .flatten()
    .copied()
}
