//! Core decoding primitives for TLG/PHI packed-binary corpora.
//!
//! Three components, leaves first:
//! - [`cursor::BinaryCursor`] — sequential big-endian reader with
//!   one-byte lookahead and the format's packed 7/14-bit integer forms.
//! - [`citation`] — the packed citation ID decoder and its persistent
//!   per-file [`citation::CitationState`].
//! - [`beta`] — the Beta Code to Unicode transliterator.
//!
//! The record readers that walk AUTHTAB.DIR, ID-table and text files sit
//! on top of these: they dispatch on a leading type-code byte, pull raw
//! integers and transliterated strings through the cursor, and call the
//! citation decoder whenever the sign bit announces ID bytes.

pub mod beta;
pub mod citation;
pub mod cursor;
pub mod error;

pub use error::{IbycusError, Result};
