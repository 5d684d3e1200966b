//! Recursive tag tree decoding.

use crate::error::{DecodeError, LimitKind, TagResult};
use crate::kind::TagKind;
use crate::limits::Limits;
use crate::reader::ByteReader;
use crate::value::{Compound, List, NamedCompound, Tag};

/// Decodes a complete tag file.
///
/// The outermost tag must be a compound, and the input must end exactly at
/// that compound's end marker.
pub fn decode(buf: &[u8], limits: &Limits) -> TagResult<NamedCompound> {
    if buf.len() > limits.max_input_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::InputBytes,
            limit: limits.max_input_bytes,
            actual: buf.len(),
        });
    }

    let mut decoder = Decoder {
        reader: ByteReader::new(buf),
        limits,
    };
    let offset = decoder.reader.position();
    let kind = TagKind::parse(decoder.reader.read_u8()?, offset)?;
    if kind != TagKind::Compound {
        return Err(DecodeError::RootNotCompound { found: kind });
    }
    let name = decoder.read_name()?;
    let compound = decoder.read_compound(1)?;

    if !decoder.reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: decoder.reader.remaining(),
        });
    }
    Ok(NamedCompound { name, compound })
}

struct Decoder<'a, 'l> {
    reader: ByteReader<'a>,
    limits: &'l Limits,
}

impl Decoder<'_, '_> {
    fn read_name(&mut self) -> TagResult<String> {
        Ok(self.reader.read_string()?.to_owned())
    }

    fn read_string(&mut self) -> TagResult<String> {
        let s = self.reader.read_string()?;
        check_limit(LimitKind::StringLength, self.limits.max_string_len, s.len())?;
        Ok(s.to_owned())
    }

    /// Reads framed children until the end marker.
    fn read_compound(&mut self, depth: usize) -> TagResult<Compound> {
        check_limit(LimitKind::Depth, self.limits.max_depth, depth)?;
        let mut compound = Compound::new();
        loop {
            let offset = self.reader.position();
            let kind = TagKind::parse(self.reader.read_u8()?, offset)?;
            if kind == TagKind::End {
                return Ok(compound);
            }
            let name = self.read_name()?;
            let tag = self.read_payload(kind, depth)?;
            compound.push(name, tag);
        }
    }

    /// Reads the payload for an already-consumed type byte.
    ///
    /// `kind` is never `End`; callers handle the end marker themselves.
    fn read_payload(&mut self, kind: TagKind, depth: usize) -> TagResult<Tag> {
        let tag = match kind {
            TagKind::Byte => Tag::Byte(self.reader.read_i8()?),
            TagKind::Short => Tag::Short(self.reader.read_i16()?),
            TagKind::Int => Tag::Int(self.reader.read_i32()?),
            TagKind::Long => Tag::Long(self.reader.read_i64()?),
            TagKind::Float => Tag::Float(self.reader.read_f32()?),
            TagKind::Double => Tag::Double(self.reader.read_f64()?),
            TagKind::ByteArray => Tag::ByteArray(self.read_byte_array()?),
            TagKind::String => Tag::String(self.read_string()?),
            TagKind::List => Tag::List(self.read_list(depth + 1)?),
            TagKind::Compound => Tag::Compound(self.read_compound(depth + 1)?),
            TagKind::IntArray => Tag::IntArray(self.read_int_array()?),
            TagKind::LongArray => Tag::LongArray(self.read_long_array()?),
            TagKind::End => {
                return Err(DecodeError::UnknownTagType {
                    tag: TagKind::End.id(),
                    offset: self.reader.position(),
                })
            }
        };
        Ok(tag)
    }

    /// Reads a list: one element type byte, a count, then payload-only elements.
    fn read_list(&mut self, depth: usize) -> TagResult<List> {
        check_limit(LimitKind::Depth, self.limits.max_depth, depth)?;
        let offset = self.reader.position();
        let element = TagKind::parse(self.reader.read_u8()?, offset)?;
        let count = self.reader.read_count()?;
        check_limit(LimitKind::ListLength, self.limits.max_list_len, count)?;

        let list = match element {
            TagKind::End if count == 0 => List::End,
            TagKind::End => return Err(DecodeError::InvalidListElement { count, offset }),
            TagKind::Byte => List::Byte(self.repeat(count, |d| d.reader.read_i8())?),
            TagKind::Short => List::Short(self.repeat(count, |d| d.reader.read_i16())?),
            TagKind::Int => List::Int(self.repeat(count, |d| d.reader.read_i32())?),
            TagKind::Long => List::Long(self.repeat(count, |d| d.reader.read_i64())?),
            TagKind::Float => List::Float(self.repeat(count, |d| d.reader.read_f32())?),
            TagKind::Double => List::Double(self.repeat(count, |d| d.reader.read_f64())?),
            TagKind::ByteArray => List::ByteArray(self.repeat(count, Self::read_byte_array)?),
            TagKind::String => List::String(self.repeat(count, Self::read_string)?),
            TagKind::List => List::List(self.repeat(count, |d| d.read_list(depth + 1))?),
            TagKind::Compound => {
                List::Compound(self.repeat(count, |d| d.read_compound(depth + 1))?)
            }
            TagKind::IntArray => List::IntArray(self.repeat(count, Self::read_int_array)?),
            TagKind::LongArray => List::LongArray(self.repeat(count, Self::read_long_array)?),
        };
        Ok(list)
    }

    fn repeat<T>(
        &mut self,
        count: usize,
        mut read: impl FnMut(&mut Self) -> TagResult<T>,
    ) -> TagResult<Vec<T>> {
        // Every element occupies at least one byte.
        let mut out = Vec::with_capacity(count.min(self.reader.remaining()));
        for _ in 0..count {
            out.push(read(self)?);
        }
        Ok(out)
    }

    fn read_array_bytes(&mut self, width: usize) -> TagResult<&[u8]> {
        let offset = self.reader.position();
        let count = self.reader.read_count()?;
        check_limit(LimitKind::ArrayLength, self.limits.max_array_len, count)?;
        let len = count
            .checked_mul(width)
            .ok_or(DecodeError::UnexpectedEof {
                offset,
                requested: usize::MAX,
                available: self.reader.remaining(),
            })?;
        self.reader.read_slice(len)
    }

    fn read_byte_array(&mut self) -> TagResult<Vec<u8>> {
        Ok(self.read_array_bytes(1)?.to_vec())
    }

    fn read_int_array(&mut self) -> TagResult<Vec<i32>> {
        let bytes = self.read_array_bytes(4)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    fn read_long_array(&mut self) -> TagResult<Vec<i64>> {
        let bytes = self.read_array_bytes(8)?;
        Ok(bytes
            .chunks_exact(8)
            .map(|c| i64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
            .collect())
    }
}

const fn check_limit(kind: LimitKind, limit: usize, actual: usize) -> TagResult<()> {
    if actual > limit {
        return Err(DecodeError::LimitsExceeded {
            kind,
            limit,
            actual,
        });
    }
    Ok(())
}
