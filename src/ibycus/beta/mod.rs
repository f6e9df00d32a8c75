//! Beta Code to Unicode conversion.
//!
//! Beta Code is the ASCII mnemonic notation the TLG and PHI corpora use
//! for polytonic Greek (and Latin): letters transliterate one-for-one,
//! `*` marks a majuscule, diacritics follow their base letter, and a
//! fixed set of escape symbols carries alphabet switches, spacing,
//! quotation marks and editorial brackets.
//!
//! Conversion is a single left-to-right pass with one character of
//! lookahead. An escape consumes its trigger symbol, a greedy run of
//! decimal digits as the modifier (0 if absent) and an optional
//! backtick, then dispatches on the symbol. Anything else is looked up
//! in the active alphabet table, falling back to the raw character, so
//! digits, whitespace and residual punctuation pass through unchanged.

mod alphabet;
mod escapes;

use std::collections::HashMap;

use log::warn;

pub use alphabet::Alphabet;

/// The 13 escape trigger symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    /// `$`: switch to the Greek alphabet.
    Dollar,
    /// `&`: switch to the Latin alphabet.
    Ampersand,
    /// `^`: horizontal space, one space per four quarter-space units.
    Caret,
    /// `@`: page formatting (not modeled).
    At,
    /// `{` / `}`: textual markup (not modeled).
    LeftCurly,
    RightCurly,
    /// `<` / `>`: text formatting (not modeled).
    LeftAngle,
    RightAngle,
    /// `"`: quotation mark, style selected by the modifier.
    Quote,
    /// `[` / `]`: bracket, kind selected by the modifier.
    LeftSquare,
    RightSquare,
    /// `%`: additional punctuation (not modeled).
    Percent,
    /// `#`: additional characters (not modeled).
    Hash,
}

impl Escape {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '$' => Some(Escape::Dollar),
            '&' => Some(Escape::Ampersand),
            '^' => Some(Escape::Caret),
            '@' => Some(Escape::At),
            '{' => Some(Escape::LeftCurly),
            '}' => Some(Escape::RightCurly),
            '<' => Some(Escape::LeftAngle),
            '>' => Some(Escape::RightAngle),
            '"' => Some(Escape::Quote),
            '[' => Some(Escape::LeftSquare),
            ']' => Some(Escape::RightSquare),
            '%' => Some(Escape::Percent),
            '#' => Some(Escape::Hash),
            _ => None,
        }
    }
}

/// Stateful Beta Code converter.
///
/// Owns the two pieces of state a conversion carries: the active
/// alphabet (Latin until a `$` escape) and the per-style quote toggles.
/// Construct one instance per logical conversion unit; state never leaks
/// between instances. An instance may be reused across related strings
/// when quote pairing is meant to span them, and [`reset`] restores the
/// freshly-constructed state.
///
/// [`reset`]: BetaCode::reset
#[derive(Debug)]
pub struct BetaCode {
    alphabet: Alphabet,
    /// Per quote-style toggle; `true` means the next use opens.
    quote_open: HashMap<u32, bool>,
}

impl BetaCode {
    /// Fresh converter: Latin alphabet, every quote style opening.
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::Latin,
            quote_open: HashMap::new(),
        }
    }

    /// Restore the freshly-constructed state.
    pub fn reset(&mut self) {
        self.alphabet = Alphabet::Latin;
        self.quote_open.clear();
    }

    /// Convert one Beta Code string to Unicode.
    ///
    /// Never fails: unmapped quote/bracket ids contribute empty output
    /// and a logged diagnostic, and unknown characters pass through
    /// unchanged.
    pub fn convert(&mut self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            let Some(escape) = Escape::from_char(c) else {
                // A `*` majuscule marker always pairs with the next
                // character. Beyond that, extend the token only while
                // the longer form is in the active table: this is how
                // the explicit sigma shape suffixes (`S1`, `*S3`, ...)
                // are reached.
                let mut token = String::with_capacity(3);
                token.push(c);
                if c == '*' {
                    if let Some(&next) = chars.peek() {
                        token.push(next);
                        chars.next();
                    }
                }
                while let Some(&next) = chars.peek() {
                    let mut longer = token.clone();
                    longer.push(next);
                    if self.alphabet.lookup(&longer).is_none() {
                        break;
                    }
                    token = longer;
                    chars.next();
                }
                match self.alphabet.lookup(&token) {
                    Some(mapped) => out.push_str(mapped),
                    None => out.push_str(&token),
                }
                continue;
            };

            // Greedy decimal modifier, 0 if absent.
            let mut modifier: u32 = 0;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                modifier = modifier * 10 + digit;
                chars.next();
            }
            // Reserved accent-grave formatting marker; consumed, no-op.
            if chars.peek() == Some(&'`') {
                chars.next();
            }

            self.dispatch(escape, modifier, &mut out);
        }

        out
    }

    fn dispatch(&mut self, escape: Escape, modifier: u32, out: &mut String) {
        match escape {
            Escape::Dollar => self.alphabet = Alphabet::Greek,
            Escape::Ampersand => self.alphabet = Alphabet::Latin,
            Escape::Caret => {
                // The modifier counts quarter spaces.
                for _ in 0..modifier / 4 {
                    out.push(' ');
                }
            }
            Escape::Quote => out.push_str(self.quote(modifier)),
            Escape::LeftSquare => match escapes::left_bracket(modifier) {
                Some(glyph) => out.push_str(glyph),
                None => warn!("unmapped bracket escape [{}", modifier),
            },
            Escape::RightSquare => match escapes::right_bracket(modifier) {
                Some(glyph) => out.push_str(glyph),
                None => warn!("unmapped bracket escape ]{}", modifier),
            },
            // Reserved markup; consumed without output.
            Escape::At
            | Escape::LeftCurly
            | Escape::RightCurly
            | Escape::LeftAngle
            | Escape::RightAngle
            | Escape::Percent
            | Escape::Hash => {}
        }
    }

    /// Emit the quote glyph for `id` and flip that style's toggle.
    fn quote(&mut self, id: u32) -> &'static str {
        let Some((open, close)) = escapes::quote_glyphs(id) else {
            warn!("unmapped quote escape \"{}", id);
            return "";
        };
        let opening = self.quote_open.entry(id).or_insert(true);
        let glyph = if *opening { open } else { close };
        *opening = !*opening;
        glyph
    }
}

impl Default for BetaCode {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a Beta Code string with a fresh [`BetaCode`] instance.
///
/// The convenience form for one-shot fields; quote pairing does not span
/// calls. Keep a [`BetaCode`] instance instead when it should.
pub fn convert(input: &str) -> String {
    BetaCode::new().convert(input)
}
