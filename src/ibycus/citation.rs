//! Citation ID decoding.
//!
//! Every record in a text file is preceded by a packed citation ID: a run
//! of bytes with the sign bit set, each encoding one update to the current
//! citation (author 0012, work 001, book 1, line 15, ...). The ID stream
//! is differential — most instructions say "increment the line" or "set
//! the book to 2" against state carried over from the previous record —
//! so decoding requires a persistent [`CitationState`] for the whole file.
//!
//! An instruction byte splits into two nibbles. The left nibble selects
//! the level being updated (or marks a control/escape form), the right
//! nibble selects how the new value is produced. Levels form a fixed
//! hierarchy: updating a level restarts numbering at every finer level
//! below it (a new book starts at line 1).

use log::trace;

use super::cursor::BinaryCursor;
use super::error::{IbycusError, Result};

/// Number of distinct citation levels tracked per file.
const SLOT_COUNT: usize = 15;

/// The six standard hierarchical levels, finest first.
///
/// The format letters them z (finest, conventionally the line) through
/// v, with n as the coarsest (the document). Instruction bytes carry
/// them directly in the left nibble as 0x8-0xD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StandardLevel {
    /// z-level (0x8), finest; conventionally the line.
    Z,
    /// y-level (0x9).
    Y,
    /// x-level (0xA).
    X,
    /// w-level (0xB).
    W,
    /// v-level (0xC).
    V,
    /// n-level (0xD), coarsest; conventionally the document.
    N,
}

impl StandardLevel {
    const ALL: [StandardLevel; 6] = [
        StandardLevel::Z,
        StandardLevel::Y,
        StandardLevel::X,
        StandardLevel::W,
        StandardLevel::V,
        StandardLevel::N,
    ];

    fn from_nibble(nibble: u8) -> Option<Self> {
        Self::ALL.get(nibble.wrapping_sub(0x8) as usize).copied()
    }

    /// Depth rank: 0 for the finest level (z) up to 5 for the coarsest (n).
    fn rank(self) -> usize {
        self as usize
    }
}

/// The four header levels, selected by escape bytes 0x80-0x83.
///
/// These identify the author and work rather than a position within the
/// text; they are not part of the hierarchical cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLevel {
    /// a-level author ID (0x80), e.g. "0012".
    AuthorId,
    /// b-level work ID (0x81), e.g. "001".
    WorkId,
    /// c-level work abbreviation (0x82).
    WorkAbbrev,
    /// d-level author abbreviation (0x83).
    AuthorAbbrev,
}

impl HeaderLevel {
    const ALL: [HeaderLevel; 4] = [
        HeaderLevel::AuthorId,
        HeaderLevel::WorkId,
        HeaderLevel::WorkAbbrev,
        HeaderLevel::AuthorAbbrev,
    ];
}

/// A non-hierarchical descriptor level carrying free-text commentary.
///
/// Descriptor levels annotate the following text (a papyrus's location,
/// its date, ...) but are not part of the citation path: they never
/// cascade and never trigger cascades. The data preparer decides what
/// each one means, so the decoder treats them as opaque slots keyed by
/// the escape byte that selects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorLevel(u8);

impl DescriptorLevel {
    /// Escape byte values observed to select descriptor levels.
    const KNOWN: [u8; 5] = [0xe3, 0xe4, 0xec, 0xfa, 0xfb];

    fn from_byte(byte: u8) -> Option<Self> {
        Self::KNOWN.contains(&byte).then_some(Self(byte))
    }

    fn rank(self) -> usize {
        // Position in KNOWN; from_byte guarantees membership.
        Self::KNOWN.iter().position(|&b| b == self.0).unwrap_or(0)
    }

    /// The raw escape byte that selects this descriptor level.
    pub fn code(self) -> u8 {
        self.0
    }
}

/// One citation level: a slot in the per-file [`CitationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationLevel {
    /// Hierarchical level z-n; updates cascade to finer levels.
    Standard(StandardLevel),
    /// Author/work identification level; no cascade.
    Header(HeaderLevel),
    /// Free-text annotation level; no cascade.
    Descriptor(DescriptorLevel),
}

impl CitationLevel {
    /// Resolve the level byte following an escape instruction (left
    /// nibble 0xE). Header levels are 0x80-0x83; descriptor levels are a
    /// small fixed set of high byte values.
    fn from_escape_byte(byte: u8) -> Option<Self> {
        if (0x80..=0x83).contains(&byte) {
            return Some(CitationLevel::Header(HeaderLevel::ALL[(byte - 0x80) as usize]));
        }
        DescriptorLevel::from_byte(byte).map(CitationLevel::Descriptor)
    }

    /// Index into the per-file state array. Standard levels occupy the
    /// low ranks in depth order so the cascade is a contiguous fill.
    fn rank(self) -> usize {
        match self {
            CitationLevel::Standard(s) => s.rank(),
            CitationLevel::Header(h) => 6 + h as usize,
            CitationLevel::Descriptor(d) => 10 + d.rank(),
        }
    }
}

impl std::fmt::Display for CitationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CitationLevel::Standard(s) => {
                write!(f, "{}", ["z", "y", "x", "w", "v", "n"][s.rank()])
            }
            CitationLevel::Header(HeaderLevel::AuthorId) => write!(f, "author-id"),
            CitationLevel::Header(HeaderLevel::WorkId) => write!(f, "work-id"),
            CitationLevel::Header(HeaderLevel::WorkAbbrev) => write!(f, "work-abbrev"),
            CitationLevel::Header(HeaderLevel::AuthorAbbrev) => write!(f, "author-abbrev"),
            CitationLevel::Descriptor(d) => write!(f, "descriptor-{:#04x}", d.code()),
        }
    }
}

/// Control codes embedded in the ID stream (left nibble 0xF).
///
/// Controls carry no level and change no state; they delimit strings,
/// blocks, exception ranges and the file itself. Any other byte in the
/// 0xF0-0xFF range is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCode {
    /// 0xFF: terminates an ASCII string field.
    EndOfString,
    /// 0xFE: last record of the current block has been read.
    EndOfBlock,
    /// 0xF0: precedes the end-of-block marker of the final block.
    EndOfFile,
    /// 0xF8: introduces an out-of-sequence citation range.
    ExceptionStart,
    /// 0xF9: closes an out-of-sequence citation range.
    ExceptionEnd,
}

impl ControlCode {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0xff => Some(ControlCode::EndOfString),
            0xfe => Some(ControlCode::EndOfBlock),
            0xf0 => Some(ControlCode::EndOfFile),
            0xf8 => Some(ControlCode::ExceptionStart),
            0xf9 => Some(ControlCode::ExceptionEnd),
            _ => None,
        }
    }
}

/// How the right nibble of an instruction produces the level's new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueOp {
    /// 0x0: increment the current value in place.
    Increment,
    /// 0x1-0x7: the nibble itself, as a decimal string.
    Literal(u8),
    /// 0x8: one 7-bit binary value.
    Small,
    /// 0x9: 7-bit binary value plus a single ASCII character.
    SmallChar,
    /// 0xA: 7-bit binary value plus an ASCII string.
    SmallString,
    /// 0xB: one 14-bit binary value.
    Wide,
    /// 0xC: 14-bit binary value plus a single ASCII character.
    WideChar,
    /// 0xD: 14-bit binary value plus an ASCII string.
    WideString,
    /// 0xE: keep the value, append a single ASCII character.
    AppendChar,
    /// 0xF: an ASCII string alone.
    StringOnly,
}

impl ValueOp {
    fn from_nibble(nibble: u8) -> Self {
        match nibble {
            0x0 => ValueOp::Increment,
            0x1..=0x7 => ValueOp::Literal(nibble),
            0x8 => ValueOp::Small,
            0x9 => ValueOp::SmallChar,
            0xa => ValueOp::SmallString,
            0xb => ValueOp::Wide,
            0xc => ValueOp::WideChar,
            0xd => ValueOp::WideString,
            0xe => ValueOp::AppendChar,
            // Nibbles are 4 bits; 0xF is the only value left.
            _ => ValueOp::StringOnly,
        }
    }
}

/// One decoded ID instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdEvent {
    /// A level's value was updated; the level is reported so callers can
    /// drive their own loop-termination logic.
    Updated(CitationLevel),
    /// A control code was consumed; no state changed.
    Control(ControlCode),
}

/// Current citation values for one file decode.
///
/// A fixed array indexed by level rank. Values persist across
/// [`decode_one`] calls for the lifetime of the file; discard the state
/// together with its byte source.
#[derive(Debug)]
pub struct CitationState {
    slots: [String; SLOT_COUNT],
}

impl CitationState {
    /// Fresh state with every level unset.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| String::new()),
        }
    }

    /// Current value at `level`; empty string if the level was never set.
    pub fn get(&self, level: CitationLevel) -> &str {
        &self.slots[level.rank()]
    }

    /// Snapshot of every level that currently holds a value.
    ///
    /// Record readers copy this into each text record they assemble, so
    /// the order is stable: standard levels finest-first, then header
    /// levels, then descriptors.
    pub fn entries(&self) -> Vec<(CitationLevel, &str)> {
        let mut out = Vec::new();
        for s in StandardLevel::ALL {
            let level = CitationLevel::Standard(s);
            if !self.get(level).is_empty() {
                out.push((level, self.get(level)));
            }
        }
        for h in HeaderLevel::ALL {
            let level = CitationLevel::Header(h);
            if !self.get(level).is_empty() {
                out.push((level, self.get(level)));
            }
        }
        for b in DescriptorLevel::KNOWN {
            let level = CitationLevel::Descriptor(DescriptorLevel(b));
            if !self.get(level).is_empty() {
                out.push((level, self.get(level)));
            }
        }
        out
    }

    fn set(&mut self, level: CitationLevel, value: String) {
        self.slots[level.rank()] = value;
    }

    fn append(&mut self, level: CitationLevel, ch: char) {
        self.slots[level.rank()].push(ch);
    }

    /// Restart numbering at every standard level finer than `level`.
    ///
    /// Standard levels occupy ranks 0..6 in depth order, so this is a
    /// contiguous fill of the ranks below the updated one.
    fn reset_finer(&mut self, level: StandardLevel) {
        for slot in self.slots[..level.rank()].iter_mut() {
            "1".clone_into(slot);
        }
    }
}

impl Default for CitationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a single ID instruction, if one is pending.
///
/// Peeks the next byte: if it has the sign bit clear (start of a text
/// record) or the source is exhausted, consumes nothing and returns
/// `Ok(None)`. Otherwise consumes exactly one instruction (and its
/// operand bytes) and reports what it was.
///
/// Unrecognized control or escape-level bytes are fatal
/// ([`IbycusError::UnknownControl`] / [`IbycusError::UnknownLevel`]); the
/// caller must abandon the file decode.
pub fn decode_one(cursor: &mut BinaryCursor, state: &mut CitationState) -> Result<Option<IdEvent>> {
    match cursor.peek_ubyte() {
        Some(byte) if byte > 0x7f => {}
        _ => return Ok(None),
    }

    let offset = cursor.position();
    let code = cursor.read_ubyte()?;
    let (left, right) = (code >> 4, code & 0x0f);

    // Control codes carry no level and no value operation.
    if left == 0xf {
        let control = ControlCode::from_byte(code)
            .ok_or(IbycusError::UnknownControl { byte: code, offset })?;
        trace!("control {:?} at {:#x}", control, offset);
        return Ok(Some(IdEvent::Control(control)));
    }

    // Escape instructions take their level from the next whole byte;
    // standard levels are carried in the left nibble directly.
    let level = if left == 0xe {
        let sel_offset = cursor.position();
        let selector = cursor.read_ubyte()?;
        CitationLevel::from_escape_byte(selector).ok_or(IbycusError::UnknownLevel {
            byte: selector,
            offset: sel_offset,
        })?
    } else {
        match StandardLevel::from_nibble(left) {
            Some(s) => CitationLevel::Standard(s),
            // The sign-bit peek leaves only 0x8-0xD once 0xE/0xF are gone.
            None => {
                return Err(IbycusError::UnknownControl { byte: code, offset });
            }
        }
    };

    match ValueOp::from_nibble(right) {
        ValueOp::Increment => {
            let next = increment(state.get(level));
            state.set(level, next);
        }
        ValueOp::Literal(n) => state.set(level, n.to_string()),
        ValueOp::Small => {
            let value = cursor.read_ubyte7()?;
            state.set(level, value.to_string());
        }
        ValueOp::SmallChar => {
            let value = cursor.read_ubyte7()?;
            let ch = cursor.read_ubyte7()? as char;
            state.set(level, format!("{}{}", value, ch));
        }
        ValueOp::SmallString => {
            let value = cursor.read_ubyte7()?;
            let tail = cursor.read_cstring()?;
            state.set(level, format!("{}{}", value, tail));
        }
        ValueOp::Wide => {
            let value = cursor.read_ushort14()?;
            state.set(level, value.to_string());
        }
        ValueOp::WideChar => {
            let value = cursor.read_ushort14()?;
            let ch = cursor.read_ubyte7()? as char;
            state.set(level, format!("{}{}", value, ch));
        }
        ValueOp::WideString => {
            let value = cursor.read_ushort14()?;
            let tail = cursor.read_cstring()?;
            state.set(level, format!("{}{}", value, tail));
        }
        ValueOp::AppendChar => {
            let ch = cursor.read_ubyte7()? as char;
            state.append(level, ch);
        }
        ValueOp::StringOnly => {
            let tail = cursor.read_cstring()?;
            state.set(level, tail);
        }
    }

    // A new value at a standard level restarts numbering at every finer
    // level below it; header and descriptor levels never cascade.
    if let CitationLevel::Standard(s) = level {
        state.reset_finer(s);
    }

    trace!("id {} = {:?} (op {:#04x} at {:#x})", level, state.get(level), code, offset);
    Ok(Some(IdEvent::Updated(level)))
}

/// Decode a full run of ID instructions.
///
/// Consumes instructions until the next byte has the sign bit clear (the
/// start of a text record) or the source is exhausted, and returns the
/// last level touched, if any. Control codes are consumed but do not
/// count as a touched level.
pub fn decode_id(
    cursor: &mut BinaryCursor,
    state: &mut CitationState,
) -> Result<Option<CitationLevel>> {
    let mut last = None;
    while let Some(event) = decode_one(cursor, state)? {
        if let IdEvent::Updated(level) = event {
            last = Some(level);
        }
    }
    Ok(last)
}

/// Advance a citation value to its successor.
///
/// The value is split into alternating letter and non-letter runs and the
/// final run is advanced: a run of decimal digits is parsed and bumped
/// ("9" to "10", no leading-zero preservation), anything else has its
/// last character advanced one code point ("12a" to "12b"). Two literal
/// special cases reproduce quirks of specific corpus texts: "1-2" goes to
/// "1-3" (TLG 1512.001) and "39-40" collapses to "40" (PHI 0137.001).
fn increment(value: &str) -> String {
    let mut runs = split_runs(value);
    let Some(last) = runs.last_mut() else {
        // Incrementing a level that was never set starts it at baseline.
        return "1".to_string();
    };

    if *last == "1-2" {
        "1-3".clone_into(last);
    } else if *last == "39-40" {
        "40".clone_into(last);
    } else if last.bytes().all(|b| b.is_ascii_digit()) {
        match last.parse::<u64>() {
            Ok(n) => *last = (n + 1).to_string(),
            Err(_) => bump_last_char(last),
        }
    } else {
        bump_last_char(last);
    }
    runs.concat()
}

/// Split into maximal runs of letters and non-letters, in order.
fn split_runs(value: &str) -> Vec<String> {
    let mut runs: Vec<String> = Vec::new();
    let mut last_kind: Option<bool> = None;
    for c in value.chars() {
        let is_letter = c.is_ascii_alphabetic();
        if last_kind == Some(is_letter) {
            if let Some(run) = runs.last_mut() {
                run.push(c);
            }
        } else {
            runs.push(c.to_string());
            last_kind = Some(is_letter);
        }
    }
    runs
}

/// Advance the final character of `run` by one code point.
fn bump_last_char(run: &mut String) {
    if let Some(c) = run.pop() {
        run.push(char::from_u32(c as u32 + 1).unwrap_or(c));
    }
}
