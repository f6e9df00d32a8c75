//! Custom error types for the ibycus-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Unmapped quote/bracket ids during Beta Code conversion are deliberately
/// *not* represented here: they are recovered locally (empty output plus a
/// logged diagnostic) and never surface to the caller.
#[derive(Debug, Error)]
pub enum IbycusError {
    /// End of input was reached where more bytes were required.
    ///
    /// A short read is always fatal for the current file; it is never
    /// silently resolved to a zero value.
    #[error("Truncated input: needed {needed} more byte(s) for {context} at offset {offset:#x}")]
    Truncated {
        context: &'static str,
        needed: usize,
        offset: usize,
    },

    /// An unrecognized control byte in the 0xF0-0xFF range.
    #[error("Unrecognized control byte {byte:#04x} at offset {offset:#x}")]
    UnknownControl { byte: u8, offset: usize },

    /// An escape instruction (0xE left nibble) selected a level byte that
    /// is neither a header level (0x80-0x83) nor a known descriptor level.
    #[error("Unrecognized escape level byte {byte:#04x} at offset {offset:#x}")]
    UnknownLevel { byte: u8, offset: usize },

    /// The byte stream is structurally invalid in some other way.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A documented but unimplemented corner of the format was encountered.
    ///
    /// Distinct from the malformed-input errors above so that format
    /// extensions (undefined ID-table type codes, the combined-table
    /// header, optional author-list fields) are diagnosable by external
    /// record readers rather than indistinguishable from corruption.
    #[error("Unsupported format feature: {0}")]
    NotSupported(&'static str),
}

/// A convenience `Result` type alias using the crate's `IbycusError` type.
pub type Result<T> = std::result::Result<T, IbycusError>;
