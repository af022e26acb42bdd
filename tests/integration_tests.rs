//! Integration tests for texcodec encoding and decoding

use texcodec::{
    decode, decode_with, encode, encode_with, find_latex, latex_to_unicode, lookup, register,
    tokenize, unicode_to_latex, Codec, CodecError, DecodeErrors, EncodeError, EncodeErrors,
    SubEncoding, TranslationTable,
};

// ============================================================================
// Decoding
// ============================================================================

mod decoding {
    use super::*;

    #[test]
    fn test_accented_words() {
        assert_eq!(decode(br"\'el\`eve").unwrap(), "élève");
        assert_eq!(
            decode(br#"\copyright\ l\aa ren av bj\"orn"#).unwrap(),
            "© låren av björn"
        );
        assert_eq!(
            decode(b"\\copyright\\ l\xe5ren av bj\xf6rn").unwrap_err().offset(),
            Some(13)
        );
        assert_eq!(
            decode_with(b"\\copyright\\ l\xe5ren av bj\xf6rn", Some("latin1")).unwrap(),
            "© låren av björn"
        );
    }

    #[test]
    fn test_french() {
        assert_eq!(
            decode(
                b"M\\^eme s'il a fait l'objet d'adaptations suite \
                  \\`a l'\\'evolution, \nla transformation sociale, \
                  \\'economique et politique du pays, \nle code civil \
                  fran\\c{c}ais est aujourd'hui encore le texte fondateur"
            )
            .unwrap(),
            "Même s'il a fait l'objet d'adaptations suite à l'évolution, \
             la transformation sociale, économique et politique du pays, \
             le code civil fran{ç}ais est aujourd'hui encore le texte fondateur"
        );
        assert_eq!(
            decode(br"D'un point de vue di\'et\'etique, l'\oe uf apaise la faim.").unwrap(),
            "D'un point de vue diététique, l'œuf apaise la faim."
        );
    }

    #[test]
    fn test_braces_are_retained() {
        assert_eq!(decode(br#"{\AA}ngstr{\"o}m"#).unwrap(), "{Å}ngstr{ö}m");
        assert_eq!(decode(br"\c{c}").unwrap(), "{ç}");
        assert_eq!(decode(b"{}").unwrap(), "{}");
    }

    #[test]
    fn test_paragraph_breaks() {
        let inputs: [&[u8]; 6] = [
            b"a\n\nb",
            b"a\n\n\nb",
            b"a \n \n \n b",
            b"a\r\n\r\nb",
            br"a\par b",
            br"a \par b",
        ];
        for input in inputs {
            assert_eq!(decode(input).unwrap(), "a\n\nb", "input {:?}", input);
        }
    }

    #[test]
    fn test_math_symbols() {
        assert_eq!(decode(br"$\alpha$").unwrap(), "α");
        assert_eq!(
            decode(br"\# $\psi$ and $\mathbb{Z}$").unwrap(),
            "# ψ and ℤ"
        );
        assert_eq!(decode(br"$\alpha\beta$").unwrap(), "$αβ$");
    }

    #[test]
    fn test_guillemets_and_quotes() {
        assert_eq!(
            decode(br"\guillemotleft quote\guillemotright").unwrap(),
            "«quote»"
        );
        assert_eq!(decode(br"``a+b''").unwrap(), "\u{201C}a+b\u{201D}");
        assert_eq!(decode(br",,quote``").unwrap(), "\u{201E}quote\u{201C}");
    }

    #[test]
    fn test_ogonek() {
        assert_eq!(
            decode(br"\k A\k a\k E\k e\k I\k i\k O\k o\k U\k u").unwrap(),
            "ĄąĘęĮįǪǫŲų"
        );
    }

    #[test]
    fn test_sub_encoding_bytes() {
        assert_eq!(decode_with(b"\xfe", Some("latin1")).unwrap(), "þ");
        assert_eq!(decode_with(b"\xfe", Some("latin2")).unwrap(), "ţ");
        assert_eq!(
            decode_with(b"``\xc4\xe3\xba\xc3''", Some("gb2312")).unwrap(),
            "\u{201C}你好\u{201D}"
        );
    }

    #[test]
    fn test_lex_error_aborts_call() {
        let err = decode(b"abc \\").unwrap_err();
        assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn test_lenient_text_decoding() {
        assert_eq!(
            latex_to_unicode("M\\\"uller \u{0}").unwrap(),
            "Müller ?"
        );
    }
}

// ============================================================================
// Encoding
// ============================================================================

mod encoding {
    use super::*;

    #[test]
    fn test_accented_words() {
        assert_eq!(encode("ångström").unwrap(), br#"\aa ngstr\"om"#);
        assert_eq!(
            encode("© låren av björn").unwrap(),
            br#"\copyright\ l\aa ren av bj\"orn"#
        );
        assert_eq!(
            encode_with("© låren av björn", Some("latin1"), EncodeErrors::Strict).unwrap(),
            b"\xa9 l\xe5ren av bj\xf6rn"
        );
        assert_eq!(encode("Ǆ").unwrap(), br"D\v Z");
    }

    #[test]
    fn test_french() {
        assert_eq!(
            encode("le code civil fran{ç}ais, \ndu droit civil français").unwrap(),
            b"le code civil fran{\\c c}ais, \ndu droit civil fran\\c cais"
        );
        assert_eq!(
            encode("D'un point de vue diététique, l'œuf apaise la faim.").unwrap(),
            br"D'un point de vue di\'et\'etique, l'\oe uf apaise la faim."
        );
    }

    #[test]
    fn test_escaped_ascii() {
        assert_eq!(encode("# $5 & 10% a_b").unwrap(), br"\# \$5 \& 10\% a\_b");
        assert_eq!(encode("# ψ").unwrap(), br"\# $\psi$");
    }

    #[test]
    fn test_sub_encodings() {
        assert_eq!(
            encode_with("ţ", Some("latin2"), EncodeErrors::Strict).unwrap(),
            b"\xfe"
        );
        assert_eq!(
            encode_with("ţ", Some("latin1"), EncodeErrors::Strict).unwrap_err(),
            CodecError::Encode(EncodeError::unmappable('ţ', 0))
        );
        assert_eq!(
            encode_with("# ψ", Some("utf8"), EncodeErrors::Strict).unwrap(),
            "\\# ψ".as_bytes()
        );
    }

    #[test]
    fn test_unmappable_character() {
        assert_eq!(
            encode("x\u{2328}").unwrap_err(),
            EncodeError::unmappable('\u{2328}', 1)
        );
        assert_eq!(
            encode_with("\u{2328}", None, EncodeErrors::Replace).unwrap(),
            br"{\char9000}"
        );
        assert_eq!(
            encode_with("\u{2328}", None, EncodeErrors::Ignore).unwrap(),
            b""
        );
        assert_eq!(
            encode_with("\u{2328}", Some("utf8"), EncodeErrors::Strict).unwrap(),
            "\u{2328}".as_bytes()
        );
    }

    #[test]
    fn test_adjacent_math_symbols() {
        assert_eq!(encode("αβ").unwrap(), br"$\alpha$$\beta$");
        for text in ["αβ", "α β", "−−", "ℝ²", "x²y"] {
            assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
        }
    }

    #[test]
    fn test_adjacent_dashes() {
        for text in ["\u{2013}\u{2014}", "\u{2013}\u{2013}\u{2013}", "\u{2013}-", "-\u{2014}"] {
            assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
        }
    }

    #[test]
    fn test_unicode_to_latex_keeps_unknown() {
        assert_eq!(unicode_to_latex("½ ⌨"), r"\textonehalf\ ⌨");
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use std::collections::HashSet;
    use texcodec::core::table::{Direction, Mode};

    /// Text whose preferred LaTeX spelling decodes back to it
    fn reversible_texts() -> Vec<&'static str> {
        let table = TranslationTable::latex();
        let mut seen = HashSet::new();
        table
            .entries()
            .filter(|entry| entry.direction.encodes() && seen.insert(entry.unicode.as_str()))
            .filter(|entry| {
                table
                    .spellings(&entry.unicode, false)
                    .next()
                    .is_some_and(|best| best.direction == Direction::Both)
            })
            .map(|entry| entry.unicode.as_str())
            .collect()
    }

    #[test]
    fn test_adjacent_entries_round_trip_through_ascii() {
        let codec = Codec::new(texcodec::CodecKind::Latex, SubEncoding::Ascii);
        let texts = reversible_texts();
        assert!(texts.len() > 300);
        for first in &texts {
            for second in &texts {
                let text = format!("{}{}", first, second);
                let bytes = codec.encode(&text, EncodeErrors::Strict).unwrap();
                assert_eq!(
                    codec.decode(&bytes, DecodeErrors::Strict).unwrap(),
                    text,
                    "round trip through {:?}",
                    String::from_utf8_lossy(&bytes)
                );
            }
        }
    }

    #[test]
    fn test_words_stay_apart_after_control_words() {
        for text in &reversible_texts() {
            for separator in [" ", "\t", "\n"] {
                let bytes = encode(&format!("{}{}x", text, separator)).unwrap();
                assert_eq!(decode(&bytes).unwrap(), format!("{} x", text));
            }
        }
    }

    #[test]
    fn test_round_trip_through_utf8() {
        let codec = Codec::new(texcodec::CodecKind::Latex, SubEncoding::Utf8);
        for entry in TranslationTable::latex().entries() {
            if entry.direction != Direction::Both || entry.mode == Mode::Math {
                continue;
            }
            let text = format!("a{}b", entry.unicode);
            let bytes = codec.encode(&text, EncodeErrors::Strict).unwrap();
            assert_eq!(
                codec.decode(&bytes, DecodeErrors::Strict).unwrap(),
                text,
                "round trip of {:?} through {:?}",
                entry.unicode,
                String::from_utf8_lossy(&bytes)
            );
        }
    }

    #[test]
    fn test_tokens_concatenate_to_input() {
        let inputs: [&[u8]; 5] = [
            br#"\'el\`eve \aa  ngstr\"om"#,
            b"% comment\n\\par\n\n\n$x^2$ \\(\\alpha\\) #1 {}",
            b"``a'' --- b -- c ?` !` ,,",
            "caf\u{e9} \\\u{e9}t\u{e9}".as_bytes(),
            b"\t\\foo\t\n  \\bar\n\n\\baz",
        ];
        for input in inputs {
            let tokens = tokenize(input).unwrap();
            assert!(tokens.iter().all(|t| !t.is_empty()));
            let joined: Vec<u8> = tokens.iter().flat_map(|t| t.text.iter().copied()).collect();
            assert_eq!(joined, input);
        }
    }

    #[test]
    fn test_table_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = "é".repeat(i + 1);
                    decode(&encode(&text).unwrap()).unwrap() == text
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}

// ============================================================================
// Codec registry
// ============================================================================

mod registry {
    use super::*;

    #[test]
    fn test_lookup_after_register() {
        register();
        let codec = lookup("ulatex+latin1").unwrap();
        assert_eq!(codec.encoding(), SubEncoding::Latin1);
        assert_eq!(codec.encode_text("ä ⌨", EncodeErrors::Keep).unwrap(), "ä ⌨");
        assert!(matches!(
            lookup("rot13"),
            Err(CodecError::UnknownCodec { .. })
        ));
    }

    #[test]
    fn test_find_latex_is_the_search_function() {
        assert_eq!(find_latex("LaTeX").map(|c| c.to_string()), Some("latex".into()));
        assert!(find_latex("ulatex+utf-16").is_none());
    }

    #[test]
    fn test_error_modes_parse() {
        assert_eq!("keep".parse::<EncodeErrors>().unwrap(), EncodeErrors::Keep);
        assert!("keep".parse::<DecodeErrors>().is_err());
        assert!("**baderror**".parse::<EncodeErrors>().is_err());
    }
}
