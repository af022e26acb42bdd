//! LaTeX lexer
//!
//! Splits a LaTeX byte buffer into a lazy sequence of [`Token`]s. The lexer
//! works on bytes so that `latex+<encoding>` input can be tokenized before
//! it is decoded: every byte with a special meaning in LaTeX is ASCII, and
//! runs of non-ASCII bytes are kept together in one token.
//!
//! Tokens are zero-copy slices of the input and concatenate back to it
//! exactly. Control words keep the whitespace they gobble as part of their
//! text; [`Token::key`] gives the normalized form used for table lookups.
//!
//! ```rust
//! use texcodec::core::lexer::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new(br#"\aa ngstr\"om"#)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::ControlWord);
//! assert_eq!(tokens[0].text, br"\aa ");
//! assert_eq!(tokens[0].key(), br"\aa");
//! ```

use std::fmt;

use crate::utils::error::LexError;

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `\` followed by letters, plus any whitespace it gobbles
    ControlWord,
    /// `\` followed by exactly one non-letter
    ControlSymbol,
    /// `#` or `#<digit>`
    Parameter,
    /// `%` through the end of the line, newline included
    Comment,
    /// A single plain character
    Character,
    /// Ligature punctuation (`--`, `` ` ` ``, `''`, ...) or a run of non-ASCII bytes
    Chars,
    /// Whitespace containing at most one newline
    Space,
    /// Whitespace containing two or more newlines (a paragraph break)
    NewlineRun,
    /// `$` or `$$`
    MathShift,
    /// A byte LaTeX ignores or rejects (NUL, DEL)
    Unknown,
}

impl TokenKind {
    pub fn is_control(self) -> bool {
        matches!(self, TokenKind::ControlWord | TokenKind::ControlSymbol)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ControlWord => "control_word",
            TokenKind::ControlSymbol => "control_symbol",
            TokenKind::Parameter => "parameter",
            TokenKind::Comment => "comment",
            TokenKind::Character => "character",
            TokenKind::Chars => "chars",
            TokenKind::Space => "space",
            TokenKind::NewlineRun => "newline_run",
            TokenKind::MathShift => "math_mode_delimiter",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Raw token text, never empty
    pub text: &'a [u8],
    /// Byte offset of the token in the input
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column in bytes (1-indexed)
    pub column: usize,
    /// Whether math mode was active where the token starts
    pub math: bool,
}

impl<'a> Token<'a> {
    /// Normalized text used to match the token against the translation table
    pub fn key(&self) -> &'a [u8] {
        match self.kind {
            TokenKind::ControlWord => self.name(),
            TokenKind::Space => b" ",
            TokenKind::NewlineRun => b"\n\n",
            _ => self.text,
        }
    }

    /// Control word name without gobbled whitespace; the raw text otherwise
    pub fn name(&self) -> &'a [u8] {
        if self.kind != TokenKind::ControlWord {
            return self.text;
        }
        let end = self
            .text
            .iter()
            .rposition(|b| !is_whitespace(*b))
            .map_or(0, |i| i + 1);
        &self.text[..end]
    }

    /// Whether a control word swallowed whitespace after its name
    pub fn gobbled_whitespace(&self) -> bool {
        self.kind == TokenKind::ControlWord && self.name().len() < self.text.len()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Lazy, forward-only LaTeX tokenizer.
///
/// Yields `Err` once on a malformed control sequence and is exhausted
/// afterwards; re-create the lexer to start over.
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    line: usize,
    column: usize,
    math: bool,
    /// Math mode was entered by a single `$`
    inline_math: bool,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 1,
            math: false,
            inline_math: false,
            failed: false,
        }
    }

    /// Lexer over text input
    pub fn from_text(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }

    /// Whether math mode is active at the current position
    pub fn in_math(&self) -> bool {
        self.math
    }

    pub fn position(&self) -> usize {
        self.position
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.position + ahead).copied()
    }

    /// End of the whitespace run starting at `from`, and its newline count
    fn whitespace_run(&self, from: usize) -> (usize, usize) {
        let mut end = from;
        let mut newlines = 0;
        while let Some(&b) = self.input.get(end) {
            if !is_whitespace(b) {
                break;
            }
            if b == b'\n' {
                newlines += 1;
            }
            end += 1;
        }
        (end, newlines)
    }

    fn lex_control(&mut self) -> Result<(TokenKind, usize), LexError> {
        let start = self.position;
        let Some(next) = self.peek(1) else {
            return Err(LexError::new(
                "backslash at end of input",
                start,
                self.line,
                self.column,
            ));
        };

        if next.is_ascii_alphabetic() {
            let mut end = start + 2;
            while self.input.get(end).is_some_and(|b| b.is_ascii_alphabetic()) {
                end += 1;
            }
            // gobble spaces and a single line break, but never a paragraph break
            let (ws_end, newlines) = self.whitespace_run(end);
            if newlines < 2 {
                end = ws_end;
            }
            return Ok((TokenKind::ControlWord, end - start));
        }

        let mut end = start + 2;
        if next >= 0xC0 {
            while self.input.get(end).is_some_and(|b| (0x80..0xC0).contains(b)) {
                end += 1;
            }
        }
        match next {
            b'(' | b'[' => {
                self.math = true;
                self.inline_math = false;
            }
            b')' | b']' => {
                self.math = false;
                self.inline_math = false;
            }
            _ => {}
        }
        Ok((TokenKind::ControlSymbol, end - start))
    }

    fn lex_token(&mut self) -> Result<(TokenKind, usize), LexError> {
        let rest = &self.input[self.position..];
        let lexed = match rest[0] {
            b'\\' => return self.lex_control(),
            b'%' => {
                let len = rest
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(rest.len(), |i| i + 1);
                (TokenKind::Comment, len)
            }
            b'#' => {
                let len = if rest.get(1).is_some_and(u8::is_ascii_digit) {
                    2
                } else {
                    1
                };
                (TokenKind::Parameter, len)
            }
            b'$' => {
                // `$a$$b$` closes one inline formula and opens the next
                let display = rest.get(1) == Some(&b'$') && !self.inline_math;
                self.math = !self.math;
                self.inline_math = self.math && !display;
                (TokenKind::MathShift, if display { 2 } else { 1 })
            }
            b if is_whitespace(b) => {
                let (end, newlines) = self.whitespace_run(self.position);
                let kind = if newlines >= 2 {
                    TokenKind::NewlineRun
                } else {
                    TokenKind::Space
                };
                (kind, end - self.position)
            }
            b'-' => match (rest.get(1), rest.get(2)) {
                (Some(b'-'), Some(b'-')) => (TokenKind::Chars, 3),
                (Some(b'-'), _) => (TokenKind::Chars, 2),
                _ => (TokenKind::Character, 1),
            },
            b'`' | b'\'' | b',' if rest.get(1) == Some(&rest[0]) => (TokenKind::Chars, 2),
            b'?' | b'!' if rest.get(1) == Some(&b'`') => (TokenKind::Chars, 2),
            0x00 | 0x7F => (TokenKind::Unknown, 1),
            b if b >= 0x80 => {
                let len = rest.iter().take_while(|&&b| b >= 0x80).count();
                (TokenKind::Chars, len)
            }
            _ => (TokenKind::Character, 1),
        };
        Ok(lexed)
    }

    fn advance(&mut self, len: usize) {
        for &b in &self.input[self.position..self.position + len] {
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += len;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.input.len() {
            return None;
        }

        let (offset, line, column, math) = (self.position, self.line, self.column, self.math);
        match self.lex_token() {
            Ok((kind, len)) => {
                let token = Token {
                    kind,
                    text: &self.input[offset..offset + len],
                    offset,
                    line,
                    column,
                    math,
                };
                self.advance(len);
                Some(Ok(token))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize a whole buffer, failing on the first malformed control sequence
pub fn tokenize(input: &[u8]) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).collect()
}
