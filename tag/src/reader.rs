//! Big-endian byte reader with bounded operations.

use crate::error::{DecodeError, TagResult};

/// A cursor over an in-memory tag stream.
///
/// All reads are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> TagResult<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Reads an `i8`.
    pub fn read_i8(&mut self) -> TagResult<i8> {
        Ok(i8::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> TagResult<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> TagResult<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> TagResult<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> TagResult<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian IEEE 754 `f32`.
    pub fn read_f32(&mut self) -> TagResult<f32> {
        Ok(f32::from_bits(u32::from_be_bytes(self.read_array()?)))
    }

    /// Reads a big-endian IEEE 754 `f64`.
    pub fn read_f64(&mut self) -> TagResult<f64> {
        Ok(f64::from_bits(u64::from_be_bytes(self.read_array()?)))
    }

    /// Reads a signed 4-byte count, rejecting negative values.
    pub fn read_count(&mut self) -> TagResult<usize> {
        let offset = self.pos;
        let length = self.read_i32()?;
        usize::try_from(length).map_err(|_| DecodeError::NegativeLength { length, offset })
    }

    /// Borrows the next `len` bytes.
    pub fn read_slice(&mut self, len: usize) -> TagResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Reads a 2-byte length prefix followed by that many UTF-8 bytes.
    pub fn read_string(&mut self) -> TagResult<&'a str> {
        let len = usize::from(self.read_u16()?);
        let offset = self.pos;
        let bytes = self.read_slice(len)?;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { offset })
    }

    fn ensure_bytes(&self, requested: usize) -> TagResult<()> {
        let available = self.remaining();
        if requested > available {
            return Err(DecodeError::UnexpectedEof {
                offset: self.pos,
                requested,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> TagResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
