//! Beta Code alphabet tables.
//!
//! Each table maps a 1- or 2-character Beta Code token to the Unicode it
//! stands for. Uppercase Greek letters carry a `*` prefix; the explicit
//! sigma shapes use digit suffixes (`S1` medial, `S2` final, `S3`
//! lunate). Diacritics map to standalone combining marks, composed
//! left-to-right after their base letter rather than precomposed.
//!
//! Entries follow "The TLG Beta Code Manual" (January 14, 2016),
//! http://stephanus.tlg.uci.edu/encoding/BCM.pdf

/// The active alphabet of a Beta Code conversion.
///
/// Switched by the `$` (Greek) and `&` (Latin) escapes. Coptic and
/// Hebrew are part of the encoding but carry empty tables here; no
/// escape currently selects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Greek,
    Latin,
    Coptic,
    Hebrew,
}

impl Alphabet {
    /// Look up a token in this alphabet's table.
    pub fn lookup(self, token: &str) -> Option<&'static str> {
        match self {
            Alphabet::Greek => greek(token),
            Alphabet::Latin => latin(token),
            // Reserved; the manual defines them but no corpus text on
            // hand exercises them.
            Alphabet::Coptic | Alphabet::Hebrew => None,
        }
    }
}

fn greek(token: &str) -> Option<&'static str> {
    // Table keys are uppercase; corpus text appears in either case, with
    // majuscules always marked by `*`, so case carries no information.
    let mapped = match token.to_ascii_uppercase().as_str() {
        "*A" => "\u{0391}",
        "A" => "\u{03B1}",
        "*B" => "\u{0392}",
        "B" => "\u{03B2}",
        "*C" => "\u{039E}",
        "C" => "\u{03BE}",
        "*D" => "\u{0394}",
        "D" => "\u{03B4}",
        "*E" => "\u{0395}",
        "E" => "\u{03B5}",
        "*F" => "\u{03A6}",
        "F" => "\u{03C6}",
        "*G" => "\u{0393}",
        "G" => "\u{03B3}",
        "*H" => "\u{0397}",
        "H" => "\u{03B7}",
        "*I" => "\u{0399}",
        "I" => "\u{03B9}",
        "*K" => "\u{039A}",
        "K" => "\u{03BA}",
        "*L" => "\u{039B}",
        "L" => "\u{03BB}",
        "*M" => "\u{039C}",
        "M" => "\u{03BC}",
        "*N" => "\u{039D}",
        "N" => "\u{03BD}",
        "*O" => "\u{039F}",
        "O" => "\u{03BF}",
        "*P" => "\u{03A0}",
        "P" => "\u{03C0}",
        "*Q" => "\u{0398}",
        "Q" => "\u{03B8}",
        "*R" => "\u{03A1}",
        "R" => "\u{03C1}",
        "*S" => "\u{03A3}",
        // Bare S defaults to the medial shape; S1/S2/S3 select a shape
        // explicitly.
        "S" => "\u{03C3}",
        "S1" => "\u{03C3}",
        "S2" => "\u{03C2}",
        "*S3" => "\u{03F9}",
        "S3" => "\u{03F2}",
        "*T" => "\u{03A4}",
        "T" => "\u{03C4}",
        "*U" => "\u{03A5}",
        "U" => "\u{03C5}",
        "*V" => "\u{03DC}",
        "V" => "\u{03DD}",
        "*W" => "\u{03A9}",
        "W" => "\u{03C9}",
        "*X" => "\u{03A7}",
        "X" => "\u{03C7}",
        "*Y" => "\u{03A8}",
        "Y" => "\u{03C8}",
        "*Z" => "\u{0396}",
        "Z" => "\u{03B6}",
        // Diacritics: combining marks, appended after the base letter.
        ")" => "\u{0313}", // smooth breathing
        "(" => "\u{0314}", // rough breathing
        "/" => "\u{0301}", // acute
        "=" => "\u{0342}", // circumflex (perispomeni)
        "\\" => "\u{0300}", // grave
        "+" => "\u{0308}", // diaeresis
        "|" => "\u{0345}", // iota subscript
        "?" => "\u{0323}", // dot below
        // Punctuation substitutes.
        "." => "\u{002E}",
        "," => "\u{002C}",
        ":" => "\u{00B7}", // ano teleia
        ";" => "\u{003B}", // question mark
        "'" => "\u{2019}",
        "-" => "\u{2010}",
        "_" => "\u{2014}",
        _ => return None,
    };
    Some(mapped)
}

/// The Latin table is an identity mapping on letters; only the dash
/// substitutes change anything, so the letters are left to the caller's
/// pass-through path.
fn latin(token: &str) -> Option<&'static str> {
    match token {
        "-" => Some("\u{2010}"),
        "_" => Some("\u{2014}"),
        _ => None,
    }
}
