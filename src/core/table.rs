//! Translation table between Unicode and LaTeX
//!
//! The table is an arena of [`Entry`] values indexed by two tries: one keyed
//! on normalized token text for decoding, one keyed on code points for
//! encoding. Both directions use longest-match lookups.
//!
//! When several entries share a key, the one with the lowest `priority`
//! wins, ties going to the entry registered first. The default table
//! assigns priorities in registry order.

use std::fmt;

use fxhash::FxHashMap;
use lazy_static::lazy_static;

use crate::core::lexer::{tokenize, Token, TokenKind};
use crate::data;
use crate::utils::error::LexError;

lazy_static! {
    /// The built-in table, constructed on first use
    static ref LATEX_TABLE: TranslationTable = TableBuilder::new()
        .symbols(data::all_symbols())
        .build()
        .expect("built-in symbols must lex");
}

/// LaTeX mode in which an entry applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Text,
    Math,
    Both,
}

impl Mode {
    pub fn applies(self, math: bool) -> bool {
        match self {
            Mode::Text => !math,
            Mode::Math => math,
            Mode::Both => true,
        }
    }
}

/// Directions in which an entry is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Both,
    DecodeOnly,
    EncodeOnly,
}

impl Direction {
    pub fn decodes(self) -> bool {
        self != Direction::EncodeOnly
    }

    pub fn encodes(self) -> bool {
        self != Direction::DecodeOnly
    }
}

/// A registry row: what gets registered before tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub unicode: &'static str,
    pub latex: &'static str,
    pub mode: Mode,
    pub direction: Direction,
    /// Package providing the command, informational only
    pub package: Option<&'static str>,
}

impl Symbol {
    pub const fn text(unicode: &'static str, latex: &'static str) -> Self {
        Self {
            unicode,
            latex,
            mode: Mode::Text,
            direction: Direction::Both,
            package: None,
        }
    }

    /// Math symbol; also registered as `$latex$` and `\(latex\)` in text mode
    pub const fn math(unicode: &'static str, latex: &'static str) -> Self {
        Self {
            mode: Mode::Math,
            ..Self::text(unicode, latex)
        }
    }

    pub const fn both(unicode: &'static str, latex: &'static str) -> Self {
        Self {
            mode: Mode::Both,
            ..Self::text(unicode, latex)
        }
    }

    pub const fn decode_only(self) -> Self {
        Self {
            direction: Direction::DecodeOnly,
            ..self
        }
    }

    pub const fn encode_only(self) -> Self {
        Self {
            direction: Direction::EncodeOnly,
            ..self
        }
    }

    pub const fn package(self, package: &'static str) -> Self {
        Self {
            package: Some(package),
            ..self
        }
    }
}

/// A tokenized table entry
#[derive(Debug, Clone)]
pub struct Entry {
    pub unicode: String,
    pub latex: String,
    pub mode: Mode,
    pub direction: Direction,
    pub package: Option<&'static str>,
    /// Lower wins when entries share a key
    pub priority: u32,
    keys: Vec<Box<[u8]>>,
    ends_with_control_word: bool,
}

impl Entry {
    /// Normalized token keys of the LaTeX side
    pub fn keys(&self) -> &[Box<[u8]>] {
        &self.keys
    }

    /// Whether the LaTeX side ends in a control word, which eats a following space
    pub fn ends_with_control_word(&self) -> bool {
        self.ends_with_control_word
    }
}

/// Result of a decode lookup
#[derive(Debug, Clone, Copy)]
pub struct DecodeMatch<'t> {
    pub entry: &'t Entry,
    /// Number of tokens consumed
    pub tokens: usize,
}

/// Result of an encode lookup
#[derive(Debug, Clone, Copy)]
pub struct EncodeMatch<'t> {
    pub entry: &'t Entry,
    /// Number of bytes of input consumed
    pub len: usize,
}

#[derive(Debug, Default)]
struct DecodeNode {
    entries: Vec<usize>,
    children: FxHashMap<Box<[u8]>, DecodeNode>,
}

#[derive(Debug, Default)]
struct EncodeNode {
    entries: Vec<usize>,
    children: FxHashMap<char, EncodeNode>,
}

/// Immutable bidirectional LaTeX/Unicode table
pub struct TranslationTable {
    entries: Vec<Entry>,
    decode_root: DecodeNode,
    encode_root: EncodeNode,
    max_decode_tokens: usize,
}

impl fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationTable")
            .field("entries", &self.entries.len())
            .field("max_decode_tokens", &self.max_decode_tokens)
            .finish()
    }
}

impl TranslationTable {
    /// The built-in table
    pub fn latex() -> &'static TranslationTable {
        &LATEX_TABLE
    }

    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest decodable token sequence
    pub fn max_decode_tokens(&self) -> usize {
        self.max_decode_tokens
    }

    fn best(&self, candidates: &[usize], math: bool) -> Option<&Entry> {
        candidates
            .iter()
            .map(|&id| &self.entries[id])
            .find(|entry| entry.mode.applies(math))
    }

    /// Longest registered token sequence at the start of `tokens`.
    ///
    /// Applicability is judged by the math flag of the first token.
    pub fn lookup_decode<'t>(&'t self, tokens: &[Token<'_>]) -> Option<DecodeMatch<'t>> {
        let math = tokens.first()?.math;
        let mut node = &self.decode_root;
        let mut found = None;
        for (i, token) in tokens.iter().enumerate() {
            match node.children.get(token.key()) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(entry) = self.best(&node.entries, math) {
                found = Some(DecodeMatch {
                    entry,
                    tokens: i + 1,
                });
            }
        }
        found
    }

    /// Decode a LaTeX snippet in text mode if the whole of it is one entry
    pub fn decode_exact(&self, latex: &str) -> Option<&str> {
        let tokens = tokenize(latex.as_bytes()).ok()?;
        let found = self.lookup_decode(&tokens)?;
        (found.tokens == tokens.len()).then_some(found.entry.unicode.as_str())
    }

    /// Longest registered code point sequence at the start of `text`
    pub fn lookup_encode<'t>(&'t self, text: &str, math: bool) -> Option<EncodeMatch<'t>> {
        let mut node = &self.encode_root;
        let mut found = None;
        for (i, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(entry) = self.best(&node.entries, math) {
                found = Some(EncodeMatch {
                    entry,
                    len: i + c.len_utf8(),
                });
            }
        }
        found
    }

    /// LaTeX for `text` if all of it is one entry
    pub fn encode_exact(&self, text: &str, math: bool) -> Option<&str> {
        self.lookup_encode(text, math)
            .filter(|found| found.len == text.len())
            .map(|found| found.entry.latex.as_str())
    }

    /// Every encodable entry for exactly `unicode` in the given mode, best first
    pub fn spellings<'a>(
        &'a self,
        unicode: &str,
        math: bool,
    ) -> impl Iterator<Item = &'a Entry> + 'a {
        let mut node = Some(&self.encode_root);
        for c in unicode.chars() {
            node = node.and_then(|node| node.children.get(&c));
        }
        node.map_or(&[][..], |node| node.entries.as_slice())
            .iter()
            .map(move |&id| &self.entries[id])
            .filter(move |entry| entry.mode.applies(math))
    }
}

/// Builds a [`TranslationTable`] from symbols
#[derive(Debug, Default)]
pub struct TableBuilder {
    symbols: Vec<(Symbol, u32)>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol with the next priority in registration order
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        let priority = self.symbols.len() as u32;
        self.symbols.push((symbol, priority));
        self
    }

    pub fn symbols(self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        symbols.into_iter().fold(self, TableBuilder::symbol)
    }

    /// Add a symbol with an explicit priority (lower wins)
    pub fn symbol_with_priority(mut self, symbol: Symbol, priority: u32) -> Self {
        self.symbols.push((symbol, priority));
        self
    }

    pub fn build(self) -> Result<TranslationTable, LexError> {
        let mut table = TranslationTable {
            entries: Vec::new(),
            decode_root: DecodeNode::default(),
            encode_root: EncodeNode::default(),
            max_decode_tokens: 0,
        };

        for (symbol, priority) in self.symbols {
            if symbol.mode == Mode::Math {
                insert(&mut table, symbol, symbol.latex.to_string(), priority)?;
                let dollar = Symbol {
                    mode: Mode::Text,
                    ..symbol
                };
                insert(&mut table, dollar, format!("${}$", symbol.latex), priority)?;
                if symbol.direction.decodes() {
                    let parens = Symbol {
                        mode: Mode::Text,
                        direction: Direction::DecodeOnly,
                        ..symbol
                    };
                    insert(&mut table, parens, format!("\\({}\\)", symbol.latex), priority)?;
                }
            } else {
                insert(&mut table, symbol, symbol.latex.to_string(), priority)?;
            }
        }

        sort_decode(&mut table.decode_root, &table.entries);
        sort_encode(&mut table.encode_root, &table.entries);

        log::debug!(
            "built translation table: {} entries, longest decode key {} tokens",
            table.entries.len(),
            table.max_decode_tokens
        );
        Ok(table)
    }
}

fn insert(
    table: &mut TranslationTable,
    symbol: Symbol,
    latex: String,
    priority: u32,
) -> Result<(), LexError> {
    let tokens = tokenize(latex.as_bytes())?;
    let keys: Vec<Box<[u8]>> = tokens.iter().map(|t| Box::from(t.key())).collect();
    let ends_with_control_word = tokens
        .last()
        .is_some_and(|t| t.kind == TokenKind::ControlWord);

    // `\c c` also decodes from `\c{c}`, keeping the braces
    let braced = match tokens.as_slice() {
        [control, plain]
            if symbol.direction.decodes()
                && control.kind.is_control()
                && plain.kind == TokenKind::Character
                && plain.text[0].is_ascii_alphanumeric() =>
        {
            Some(vec![
                Box::from(control.key()),
                Box::from(&b"{"[..]),
                Box::from(plain.key()),
                Box::from(&b"}"[..]),
            ])
        }
        _ => None,
    };

    let id = table.entries.len();
    table.entries.push(Entry {
        unicode: symbol.unicode.to_string(),
        latex: latex.clone(),
        mode: symbol.mode,
        direction: symbol.direction,
        package: symbol.package,
        priority,
        keys: keys.clone(),
        ends_with_control_word,
    });

    if symbol.direction.decodes() && !keys.is_empty() {
        add_decode_path(table, &keys, id);
    }
    if symbol.direction.encodes() && !symbol.unicode.is_empty() {
        let mut node = &mut table.encode_root;
        for c in symbol.unicode.chars() {
            node = node.children.entry(c).or_default();
        }
        node.entries.push(id);
    }

    if let Some(braced_keys) = braced {
        let braced_latex = format!(
            "{}{{{}}}",
            String::from_utf8_lossy(&keys[0]),
            String::from_utf8_lossy(&keys[1])
        );
        let braced_id = table.entries.len();
        table.entries.push(Entry {
            unicode: format!("{{{}}}", symbol.unicode),
            latex: braced_latex,
            mode: symbol.mode,
            direction: Direction::DecodeOnly,
            package: symbol.package,
            priority,
            keys: braced_keys.clone(),
            ends_with_control_word: false,
        });
        add_decode_path(table, &braced_keys, braced_id);
    }
    Ok(())
}

fn add_decode_path(table: &mut TranslationTable, keys: &[Box<[u8]>], id: usize) {
    table.max_decode_tokens = table.max_decode_tokens.max(keys.len());
    let mut node = &mut table.decode_root;
    for key in keys {
        node = node.children.entry(key.clone()).or_default();
    }
    node.entries.push(id);
}

fn sort_decode(node: &mut DecodeNode, entries: &[Entry]) {
    node.entries.sort_by_key(|&id| (entries[id].priority, id));
    for child in node.children.values_mut() {
        sort_decode(child, entries);
    }
}

fn sort_encode(node: &mut EncodeNode, entries: &[Entry]) {
    node.entries.sort_by_key(|&id| (entries[id].priority, id));
    for child in node.children.values_mut() {
        sort_encode(child, entries);
    }
}
