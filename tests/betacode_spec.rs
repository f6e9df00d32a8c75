//! Beta Code transliteration tests.

use ibycus_reader::{beta, BetaCode};

#[test]
fn default_alphabet_is_latin() {
    assert_eq!(beta::convert("a"), "a");
    assert_eq!(beta::convert("Arma virumque cano"), "Arma virumque cano");
}

#[test]
fn latin_substitutes_dashes() {
    assert_eq!(beta::convert("uolnus-"), "uolnus\u{2010}");
    assert_eq!(beta::convert("_"), "\u{2014}");
}

#[test]
fn dollar_switches_to_greek() {
    assert_eq!(beta::convert("$a"), "\u{03B1}");
    assert_eq!(beta::convert("$*a"), "\u{0391}");
    assert_eq!(beta::convert("$A"), "\u{03B1}", "case carries no information in Greek");
}

#[test]
fn ampersand_switches_back_to_latin() {
    assert_eq!(beta::convert("$a&a"), "\u{03B1}a");
}

#[test]
fn breathings_are_appended_combining_marks() {
    // Alpha + smooth breathing: two code points, not precomposed.
    assert_eq!(beta::convert("$a)"), "\u{03B1}\u{0313}");
    // Rough breathing, acute, iota subscript compose left to right.
    assert_eq!(beta::convert("$a(/|"), "\u{03B1}\u{0314}\u{0301}\u{0345}");
}

#[test]
fn greek_word_with_circumflex() {
    // mh=nin -> μη + combining perispomeni + νιν.
    assert_eq!(
        beta::convert("$mh=nin"),
        "\u{03BC}\u{03B7}\u{0342}\u{03BD}\u{03B9}\u{03BD}"
    );
}

#[test]
fn sigma_shapes_select_by_suffix() {
    assert_eq!(beta::convert("$s"), "\u{03C3}");
    assert_eq!(beta::convert("$s1"), "\u{03C3}");
    assert_eq!(beta::convert("$s2"), "\u{03C2}");
    assert_eq!(beta::convert("$s3"), "\u{03F2}");
    assert_eq!(beta::convert("$*s3"), "\u{03F9}");
}

#[test]
fn greek_punctuation_substitutes() {
    assert_eq!(beta::convert("$:"), "\u{00B7}", "colon becomes ano teleia");
    assert_eq!(beta::convert("$;"), ";", "question mark keeps its code point");
    assert_eq!(beta::convert("$'"), "\u{2019}");
}

#[test]
fn unknown_characters_pass_through() {
    assert_eq!(beta::convert("$123 !"), "123 !");
    assert_eq!(beta::convert("*5"), "*5", "majuscule pair outside the table stays raw");
}

#[test]
fn caret_emits_quarter_spaces() {
    assert_eq!(beta::convert("^8"), "  ");
    assert_eq!(beta::convert("^4a"), " a");
    assert_eq!(beta::convert("^3"), "", "below one full space emits nothing");
    assert_eq!(beta::convert("^"), "", "missing modifier defaults to zero");
}

#[test]
fn reserved_escapes_emit_nothing() {
    // Each reserved escape consumes its digit modifier along with it.
    assert_eq!(beta::convert("a@1{2}3<4>5%6#7b"), "ab");
    assert_eq!(beta::convert("{1x}1"), "x");
}

#[test]
fn backtick_after_escape_is_consumed() {
    assert_eq!(beta::convert("$`a"), "\u{03B1}");
    assert_eq!(beta::convert("^4`x"), " x");
}

#[test]
fn quote_style_zero_alternates_within_one_instance() {
    let mut bc = BetaCode::new();
    assert_eq!(bc.convert("\"0"), "\u{201C}", "first use opens");
    assert_eq!(bc.convert("\"0"), "\u{201D}", "second use closes");
    assert_eq!(bc.convert("\"0abc\"0"), "\u{201C}abc\u{201D}");
}

#[test]
fn quote_toggles_are_tracked_per_style() {
    let mut bc = BetaCode::new();
    assert_eq!(bc.convert("\"0\"3"), "\u{201C}\u{2018}", "each style opens independently");
    assert_eq!(bc.convert("\"3\"0"), "\u{2019}\u{201D}");
}

#[test]
fn quote_state_does_not_leak_between_instances() {
    assert_eq!(beta::convert("\"0"), "\u{201C}");
    assert_eq!(beta::convert("\"0"), "\u{201C}", "fresh instance starts opening again");
}

#[test]
fn reset_restores_fresh_state() {
    let mut bc = BetaCode::new();
    assert_eq!(bc.convert("$\"0a"), "\u{201C}\u{03B1}");
    bc.reset();
    assert_eq!(bc.convert("\"0a"), "\u{201C}a", "Latin again, quote opening again");
}

#[test]
fn bracket_escapes_map_by_id() {
    assert_eq!(beta::convert("[0"), "[");
    assert_eq!(beta::convert("]0"), "]");
    assert_eq!(beta::convert("[1"), "(");
    assert_eq!(beta::convert("[4text]4"), "\u{27E6}text\u{27E7}");
    assert_eq!(beta::convert("[70"), "\u{2E02}");
    assert_eq!(beta::convert("]85"), "\u{2E29}");
}

#[test]
fn non_tlg_bracket_ids_map_to_empty() {
    assert_eq!(beta::convert("[50a]50"), "a");
}

#[test]
fn unmapped_ids_degrade_to_empty_output() {
    // Not in any table: conversion continues, nothing is emitted.
    assert_eq!(beta::convert("[99a"), "a");
    assert_eq!(beta::convert("\"50a"), "a");
    assert_eq!(beta::convert("\"60a"), "a");
}

#[test]
fn modifier_parses_greedily() {
    // [8 followed by a literal 5, versus [85.
    assert_eq!(beta::convert("[85"), "\u{2E28}");
    assert_eq!(beta::convert("[8`5"), "\u{2E44}5");
}

#[test]
fn mixed_greek_passage() {
    // Iliad 1.1 opening: *MH=NIN A)/EIDE QEA\
    assert_eq!(
        beta::convert("$*mh=nin a)/eide qea\\"),
        "\u{039C}\u{03B7}\u{0342}\u{03BD}\u{03B9}\u{03BD} \
         \u{03B1}\u{0313}\u{0301}\u{03B5}\u{03B9}\u{03B4}\u{03B5} \
         \u{03B8}\u{03B5}\u{03B1}\u{0300}"
    );
}
