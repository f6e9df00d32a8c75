//! Low-level byte reading over a fixed byte source.
//!
//! Every multi-byte integer in the format is big-endian. On top of the
//! plain widths the format packs two 7-bit forms: a byte with the sign
//! bit masked off, and a 14-bit value built from two such bytes. The
//! sign bit itself is the format's record separator (ID bytes have it
//! set, text bytes have it clear), which is why the masked reads exist.

use byteorder::{BigEndian, ByteOrder};

use super::beta;
use super::error::{IbycusError, Result};

/// Sequential reader over a fixed byte source.
///
/// Supports one byte of non-consuming lookahead ([`peek_ubyte`]) and
/// consuming reads of the integer and string forms used by the TLG/PHI
/// file formats. Reading past the end of the source is an explicit
/// [`IbycusError::Truncated`] error, never a silent zero.
///
/// [`peek_ubyte`]: BinaryCursor::peek_ubyte
#[derive(Debug)]
pub struct BinaryCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position, in bytes from the start of the source.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Get the next unsigned byte without moving the cursor.
    ///
    /// Returns `None` at end of input; lookahead itself never fails.
    pub fn peek_ubyte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume exactly `needed` bytes, or fail with a truncation error
    /// naming the read that came up short.
    fn take(&mut self, needed: usize, context: &'static str) -> Result<&'a [u8]> {
        let available = self.data.len() - self.pos;
        if available < needed {
            return Err(IbycusError::Truncated {
                context,
                needed: needed - available,
                offset: self.pos,
            });
        }
        let bytes = &self.data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(bytes)
    }

    /// Read one unsigned byte.
    pub fn read_ubyte(&mut self) -> Result<u8> {
        Ok(self.take(1, "u8")?[0])
    }

    /// Read one byte masked to its low 7 bits.
    ///
    /// ID instruction operands drop the sign bit so that every byte of an
    /// ID stays distinguishable from text bytes.
    pub fn read_ubyte7(&mut self) -> Result<u8> {
        Ok(self.read_ubyte()? & 0x7f)
    }

    /// Read an unsigned 16-bit big-endian integer.
    pub fn read_ushort(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2, "u16")?))
    }

    /// Read a packed 14-bit integer: two 7-bit bytes, high half first.
    ///
    /// This is not a plain big-endian short; both bytes carry the sign
    /// bit set on disk and contribute 7 payload bits each.
    pub fn read_ushort14(&mut self) -> Result<u16> {
        let high = self.read_ubyte7()? as u16;
        let low = self.read_ubyte7()? as u16;
        Ok((high << 7) | low)
    }

    /// Read an unsigned 32-bit big-endian integer.
    pub fn read_uint(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.take(4, "u32")?))
    }

    /// Read a text run delimited by the sign bit, then convert it from
    /// Beta Code.
    ///
    /// Consumes bytes while the next byte is <= 0x7F; the first byte with
    /// the sign bit set (the start of the next ID) is left unconsumed.
    /// End of input also terminates the run.
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.pos;
        while matches!(self.peek_ubyte(), Some(b) if b <= 0x7f) {
            self.pos += 1;
        }
        let raw: String = self.data[start..self.pos].iter().map(|&b| b as char).collect();
        Ok(beta::convert(&raw))
    }

    /// Read a 0xFF-terminated text run, then convert it from Beta Code.
    ///
    /// Each content byte is masked to 7 bits. The 0xFF terminator is left
    /// unconsumed for the caller; reaching end of input before it is a
    /// truncation error.
    pub fn read_cstring(&mut self) -> Result<String> {
        let mut raw = String::new();
        loop {
            match self.peek_ubyte() {
                Some(0xff) => break,
                Some(b) => {
                    self.pos += 1;
                    raw.push((b & 0x7f) as char);
                }
                None => {
                    return Err(IbycusError::Truncated {
                        context: "0xff-terminated string",
                        needed: 1,
                        offset: self.pos,
                    })
                }
            }
        }
        Ok(beta::convert(&raw))
    }

    /// Read exactly `length` raw bytes, then convert them from Beta Code.
    pub fn read_nstring(&mut self, length: usize) -> Result<String> {
        let bytes = self.take(length, "fixed-length string")?;
        let raw: String = bytes.iter().map(|&b| b as char).collect();
        Ok(beta::convert(&raw))
    }
}
