//! Sub-encodings
//!
//! A sub-encoding translates the characters the LaTeX table does not cover.
//! `ascii`, `latin1` and `utf8` are handled directly; any other label is
//! resolved through `encoding_rs` and must name an ASCII-compatible encoding,
//! since LaTeX markup itself is always ASCII.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;
use phf::phf_map;

/// Built-in labels, keyed by normalized name
static BUILTIN_LABELS: phf::Map<&'static str, SubEncoding> = phf_map! {
    "ascii" => SubEncoding::Ascii,
    "us-ascii" => SubEncoding::Ascii,
    "646" => SubEncoding::Ascii,
    "latin1" => SubEncoding::Latin1,
    "latin-1" => SubEncoding::Latin1,
    "l1" => SubEncoding::Latin1,
    "iso-8859-1" => SubEncoding::Latin1,
    "iso8859-1" => SubEncoding::Latin1,
    "utf8" => SubEncoding::Utf8,
    "utf-8" => SubEncoding::Utf8,
    "u8" => SubEncoding::Utf8,
};

/// A byte encoding used as fallback for characters outside the table
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SubEncoding {
    /// 7-bit ASCII, the default
    Ascii,
    /// ISO-8859-1, every byte is the code point of the same value
    Latin1,
    /// UTF-8, represents every code point
    Utf8,
    /// Any other ASCII-compatible encoding known to `encoding_rs`
    Other(&'static Encoding),
}

impl Default for SubEncoding {
    fn default() -> Self {
        SubEncoding::Ascii
    }
}

impl fmt::Debug for SubEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubEncoding({})", self.name())
    }
}

impl fmt::Display for SubEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_ascii_lowercase().replace('_', "-")
}

impl SubEncoding {
    /// Resolve a sub-encoding label such as `latin2` or `utf8`.
    ///
    /// Returns `None` for unknown labels and for encodings that are not
    /// ASCII-compatible (UTF-16, ISO-2022-JP).
    pub fn for_label(label: &str) -> Option<Self> {
        let normalized = normalize_label(label);
        if let Some(builtin) = BUILTIN_LABELS.get(normalized.as_str()) {
            return Some(*builtin);
        }
        let encoding = Encoding::for_label(normalized.as_bytes())?;
        if !encoding.is_ascii_compatible() {
            log::debug!("rejecting non ASCII-compatible sub-encoding {}", label);
            return None;
        }
        if encoding == encoding_rs::UTF_8 {
            return Some(SubEncoding::Utf8);
        }
        Some(SubEncoding::Other(encoding))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubEncoding::Ascii => "ascii",
            SubEncoding::Latin1 => "latin1",
            SubEncoding::Utf8 => "utf-8",
            SubEncoding::Other(encoding) => encoding.name(),
        }
    }

    /// Whether `c` has a representation in this encoding
    pub fn can_encode(&self, c: char) -> bool {
        match self {
            SubEncoding::Ascii => c.is_ascii(),
            SubEncoding::Latin1 => (c as u32) < 0x100,
            SubEncoding::Utf8 => true,
            SubEncoding::Other(encoding) => {
                let mut buf = [0u8; 4];
                let (_, _, had_errors) = encoding.encode(c.encode_utf8(&mut buf));
                !had_errors
            }
        }
    }

    /// Append the encoded form of `c` to `out`.
    ///
    /// Returns `false`, leaving `out` untouched, if `c` is not representable.
    pub fn encode_char(&self, c: char, out: &mut Vec<u8>) -> bool {
        match self {
            SubEncoding::Ascii | SubEncoding::Latin1 => {
                if !self.can_encode(c) {
                    return false;
                }
                out.push(c as u32 as u8);
                true
            }
            SubEncoding::Utf8 => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                true
            }
            SubEncoding::Other(encoding) => {
                let mut buf = [0u8; 4];
                let (bytes, _, had_errors) = encoding.encode(c.encode_utf8(&mut buf));
                if had_errors {
                    return false;
                }
                out.extend_from_slice(&bytes);
                true
            }
        }
    }

    /// Decode `bytes`, or `None` if they are malformed in this encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            SubEncoding::Ascii => {
                if bytes.is_ascii() {
                    std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
                } else {
                    None
                }
            }
            SubEncoding::Latin1 => {
                if bytes.is_ascii() {
                    return std::str::from_utf8(bytes).ok().map(Cow::Borrowed);
                }
                Some(Cow::Owned(bytes.iter().map(|&b| b as char).collect()))
            }
            SubEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            SubEncoding::Other(encoding) => {
                encoding.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_labels() {
        assert_eq!(SubEncoding::for_label("ascii"), Some(SubEncoding::Ascii));
        assert_eq!(SubEncoding::for_label("Latin1"), Some(SubEncoding::Latin1));
        assert_eq!(SubEncoding::for_label("utf_8"), Some(SubEncoding::Utf8));
        assert_eq!(SubEncoding::for_label(" UTF8 "), Some(SubEncoding::Utf8));
    }

    #[test]
    fn test_external_labels() {
        let latin2 = SubEncoding::for_label("latin2").unwrap();
        assert_eq!(latin2.name(), "ISO-8859-2");
        assert!(SubEncoding::for_label("no-such-encoding").is_none());
        // UTF-16 cannot carry ASCII LaTeX markup
        assert!(SubEncoding::for_label("utf-16le").is_none());
    }

    #[test]
    fn test_decode_single_byte() {
        assert_eq!(SubEncoding::Latin1.decode(b"\xfe").unwrap(), "þ");
        let latin2 = SubEncoding::for_label("latin2").unwrap();
        assert_eq!(latin2.decode(b"\xfe").unwrap(), "ţ");
        assert!(SubEncoding::Ascii.decode(b"\xfe").is_none());
        assert!(SubEncoding::Utf8.decode(b"\xe9").is_none());
    }

    #[test]
    fn test_encode_char() {
        let mut out = Vec::new();
        assert!(!SubEncoding::Latin1.encode_char('ţ', &mut out));
        assert!(out.is_empty());

        let latin2 = SubEncoding::for_label("latin2").unwrap();
        assert!(latin2.can_encode('ţ'));
        assert!(latin2.encode_char('ţ', &mut out));
        assert_eq!(out, b"\xfe");

        out.clear();
        assert!(SubEncoding::Utf8.encode_char('⌨', &mut out));
        assert_eq!(out, "⌨".as_bytes());
    }
}
