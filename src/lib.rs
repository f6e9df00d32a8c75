//! # ibycus-reader
//!
//! Decoding primitives for the packed-binary file format used by the
//! TLG and PHI classical-text CD-ROM corpora: a binary cursor over the
//! big-endian byte stream, a decoder for the packed hierarchical
//! citation IDs, and a Beta Code to Unicode transliterator.
//!
//! **Note:** the higher-level record readers (author list, ID tables,
//! text blocks) consume these primitives but are not part of this crate.

pub mod ibycus;

// Re-export the main types for convenience
pub use ibycus::{
    beta::{self, BetaCode},
    citation::{self, CitationLevel, CitationState, ControlCode, IdEvent},
    cursor::BinaryCursor,
    error::{IbycusError, Result},
};
