//! Big-endian byte writer.

use crate::error::EncodeError;

/// Accumulates an encoded tag stream.
///
/// Call [`finish`](Self::finish) to get the final byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a `u8`.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes an `i8`.
    pub fn write_i8(&mut self, value: i8) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i16`.
    pub fn write_i16(&mut self, value: i16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i64`.
    pub fn write_i64(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian IEEE 754 `f32`.
    pub fn write_f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Writes a big-endian IEEE 754 `f64`.
    pub fn write_f64(&mut self, value: f64) {
        self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Writes raw bytes with no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes a signed 4-byte element count.
    pub fn write_count(&mut self, length: usize) -> Result<(), EncodeError> {
        let count = i32::try_from(length).map_err(|_| EncodeError::ArrayTooLong { length })?;
        self.write_i32(count);
        Ok(())
    }

    /// Writes a tag name with its 2-byte length prefix.
    pub fn write_name(&mut self, name: &str) -> Result<(), EncodeError> {
        let len = u16::try_from(name.len())
            .map_err(|_| EncodeError::NameTooLong { length: name.len() })?;
        self.bytes.extend_from_slice(&len.to_be_bytes());
        self.bytes.extend_from_slice(name.as_bytes());
        Ok(())
    }

    /// Writes a string payload with its 2-byte length prefix.
    pub fn write_string(&mut self, value: &str) -> Result<(), EncodeError> {
        let len = u16::try_from(value.len()).map_err(|_| EncodeError::StringTooLong {
            length: value.len(),
        })?;
        self.bytes.extend_from_slice(&len.to_be_bytes());
        self.bytes.extend_from_slice(value.as_bytes());
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        assert!(ByteWriter::new().finish().is_empty());
    }

    #[test]
    fn writes_big_endian() {
        let mut writer = ByteWriter::new();
        writer.write_i32(0x0102_0304);
        writer.write_i16(-2);
        assert_eq!(writer.finish(), [1, 2, 3, 4, 0xFF, 0xFE]);
    }

    #[test]
    fn write_name_prefixes_length() {
        let mut writer = ByteWriter::new();
        writer.write_name("xyz").unwrap();
        assert_eq!(writer.finish(), [0, 3, b'x', b'y', b'z']);
    }

    #[test]
    fn write_name_too_long() {
        let name = "a".repeat(usize::from(u16::MAX) + 1);
        let mut writer = ByteWriter::new();
        let err = writer.write_name(&name).unwrap_err();
        assert_eq!(
            err,
            EncodeError::NameTooLong {
                length: usize::from(u16::MAX) + 1
            }
        );
    }

    #[test]
    fn write_string_too_long() {
        let value = "b".repeat(70_000);
        let mut writer = ByteWriter::new();
        assert!(matches!(
            writer.write_string(&value),
            Err(EncodeError::StringTooLong { length: 70_000 })
        ));
    }
}
