//! Quote and bracket escape tables.
//!
//! The `"` escape selects a quotation style by modifier id; each style
//! has an opening and a closing glyph and the transliterator alternates
//! between them per id. The `[` and `]` escapes are plain id-to-glyph
//! lookups covering the structural, editorial and papyrological bracket
//! conventions. Several ids are defined by non-TLG projects and map to
//! nothing; they stay in the tables so they resolve (to empty output)
//! instead of tripping the unmapped-id diagnostic.

/// Opening/closing glyph pair for quote style `id`, ids 0-8.
///
/// Ids 50-59 (papyrological) and 60-69 (epigraphical) are reserved and
/// unmapped.
pub(super) fn quote_glyphs(id: u32) -> Option<(&'static str, &'static str)> {
    let pair = match id {
        0 => ("\u{201C}", "\u{201D}"), // double quotation marks
        1 => ("\u{201E}", "\u{201E}"), // low double quotation mark
        2 => ("\u{201C}", "\u{201C}"), // high double quotation mark
        3 => ("\u{2018}", "\u{2019}"), // single quotation marks
        4 => ("\u{201A}", "\u{201A}"), // low single quotation mark
        5 => ("\u{201B}", "\u{201B}"), // high single quotation mark
        6 => ("\u{00AB}", "\u{00BB}"), // double angle quotation marks
        7 => ("\u{2039}", "\u{203A}"), // single angle quotation marks
        8 => ("\u{201C}", "\u{201E}"), // high-open, low-close double
        _ => return None,
    };
    Some(pair)
}

pub(super) fn left_bracket(id: u32) -> Option<&'static str> {
    let glyph = match id {
        0 => "\u{005B}",         // [ left square bracket
        1 => "\u{0028}",         // ( left parenthesis
        2 => "\u{2329}",         // left-pointing angle bracket
        3 => "\u{007B}",         // { left curly bracket
        4 => "\u{27E6}",         // left white square bracket
        5 => "\u{2E44}",         // left low corner bracket
        6 => "\u{2E42}",         // left high corner bracket
        7 => "\u{2E42}",         // left high corner bracket
        8 => "\u{2E44}",         // left low corner bracket
        9 => "\u{2027}",         // left raised dot bracket
        10 => "\u{005B}",        // large left square bracket
        11 => "\u{208D}",        // subscript left parenthesis
        12 => "\u{2192}",        // left arrow bracket
        13 => "$3\u{005B}",      // italic left square bracket
        14 => "\u{7C}\u{3A}",    // |: left hymn refrain bracket
        15 => "",                // non-TLG Franklin decipherment of codes
        16 => "\u{27E6}",        // left white square bracket
        17 => "\u{230A}\u{230A}", // left low white corner bracket
        18 => "\u{27EA}",        // left double angle bracket
        20 => "\u{23A7}",        // left curly bracket upper hook
        21 => "\u{23AA}",        // curly bracket extension
        22 => "\u{23A8}",        // left curly bracket middle piece
        23 => "\u{23A9}",        // left curly bracket lower hook
        30 => "\u{239B}",        // left parenthesis upper hook
        31 => "\u{239C}",        // left parenthesis extension
        32 => "\u{239D}",        // parenthesis lower hook
        33 => "",                // non-TLG parenthesis
        34 => "",                // non-TLG parenthesis
        35 => "",                // non-TLG papyrological project brackets
        50 => "",                // non-TLG rejected text of main edition
        51 => "",                // non-TLG erased text
        52 => "",                // non-TLG text before correction
        53 => "",                // non-TLG parenthesis
        54 => "",                // non-TLG epigraphical project brackets
        70 => "\u{2E02}",        // left substitution bracket
        71 => "\u{2E04}",        // left dotted substitution bracket
        72 => "\u{2E09}",        // left transposition bracket
        73 => "\u{2E0B}",        // left raised omission bracket
        80 => "\u{002F}",        // interlinear addition printed inline
        81 => "\u{002F}\u{002F}", // marginal addition printed inline
        82 => "\u{2E20}",        // opening editorial deletion bracket
        83 => "\u{2E21}",        // opening editorial dittography bracket
        84 => "\u{2E26}",        // left sideways U bracket
        85 => "\u{2E28}",        // left double parenthesis
        _ => return None,
    };
    Some(glyph)
}

pub(super) fn right_bracket(id: u32) -> Option<&'static str> {
    let glyph = match id {
        0 => "\u{005D}",         // ] right square bracket
        1 => "\u{0029}",         // ) right parenthesis
        2 => "\u{232A}",         // right-pointing angle bracket
        3 => "\u{007D}",         // } right curly bracket
        4 => "\u{27E7}",         // right white square bracket
        5 => "\u{2E45}",         // right low corner bracket
        6 => "\u{2E43}",         // right high corner bracket
        7 => "\u{2E45}",         // right high corner bracket
        8 => "\u{2E43}",         // right low corner bracket
        9 => "\u{2027}",         // right raised dot bracket
        10 => "\u{005B}",        // large right square bracket
        11 => "\u{208E}",        // subscript right parenthesis
        12 => "\u{2190}",        // right arrow bracket
        13 => "\u{005D}$",       // italic right square bracket
        14 => "\u{3A}\u{7C}",    // :| right hymn refrain bracket
        15 => "",                // non-TLG Franklin decipherment of codes
        16 => "\u{27E7}",        // right white square bracket
        17 => "\u{230B}\u{230B}", // right low white corner bracket
        18 => "\u{27EB}",        // right double angle bracket
        20 => "\u{23AB}",        // right curly bracket upper hook
        21 => "\u{23AA}",        // curly bracket extension
        22 => "\u{23AC}",        // right curly bracket middle piece
        23 => "\u{23AD}",        // right curly bracket lower hook
        30 => "\u{239E}",        // right parenthesis upper hook
        31 => "\u{239F}",        // right parenthesis extension
        32 => "\u{23A0}",        // parenthesis lower hook
        33 => "",                // non-TLG parenthesis
        34 => "",                // non-TLG parenthesis
        35 => "",                // non-TLG papyrological project brackets
        50 => "",                // non-TLG rejected text of main edition
        51 => "",                // non-TLG erased text
        52 => "",                // non-TLG text before correction
        53 => "",                // non-TLG parenthesis
        54 => "",                // non-TLG epigraphical project brackets
        70 => "\u{2E03}",        // right substitution bracket
        71 => "\u{2E05}",        // right dotted substitution bracket
        72 => "\u{2E0A}",        // right transposition bracket
        73 => "\u{2E0C}",        // right raised omission bracket
        80 => "\u{002F}",        // interlinear addition printed inline
        81 => "\u{002F}\u{002F}", // marginal addition printed inline
        82 => "\u{2E21}",        // closing editorial deletion bracket
        83 => "\u{2E20}",        // closing editorial dittography bracket
        84 => "\u{2E27}",        // right sideways U bracket
        85 => "\u{2E29}",        // right double parenthesis
        _ => return None,
    };
    Some(glyph)
}
