//! Tag tree encoding.

use crate::error::EncodeError;
use crate::kind::TagKind;
use crate::value::{Compound, List, NamedCompound, Tag};
use crate::writer::ByteWriter;

/// Encodes a root compound into a complete tag file.
pub fn encode(root: &NamedCompound) -> Result<Vec<u8>, EncodeError> {
    let mut writer = ByteWriter::new();
    writer.write_u8(TagKind::Compound.id());
    writer.write_name(&root.name)?;
    write_compound(&mut writer, &root.compound)?;
    Ok(writer.finish())
}

fn write_compound(writer: &mut ByteWriter, compound: &Compound) -> Result<(), EncodeError> {
    for (name, tag) in compound.iter() {
        writer.write_u8(tag.kind().id());
        writer.write_name(name)?;
        write_payload(writer, tag)?;
    }
    writer.write_u8(TagKind::End.id());
    Ok(())
}

fn write_payload(writer: &mut ByteWriter, tag: &Tag) -> Result<(), EncodeError> {
    match tag {
        Tag::Byte(v) => writer.write_i8(*v),
        Tag::Short(v) => writer.write_i16(*v),
        Tag::Int(v) => writer.write_i32(*v),
        Tag::Long(v) => writer.write_i64(*v),
        Tag::Float(v) => writer.write_f32(*v),
        Tag::Double(v) => writer.write_f64(*v),
        Tag::ByteArray(v) => write_byte_array(writer, v)?,
        Tag::String(v) => writer.write_string(v)?,
        Tag::List(v) => write_list(writer, v)?,
        Tag::Compound(v) => write_compound(writer, v)?,
        Tag::IntArray(v) => write_int_array(writer, v)?,
        Tag::LongArray(v) => write_long_array(writer, v)?,
    }
    Ok(())
}

fn write_list(writer: &mut ByteWriter, list: &List) -> Result<(), EncodeError> {
    writer.write_u8(list.element_kind().id());
    writer.write_count(list.len())?;
    match list {
        List::End => {}
        List::Byte(v) => v.iter().for_each(|e| writer.write_i8(*e)),
        List::Short(v) => v.iter().for_each(|e| writer.write_i16(*e)),
        List::Int(v) => v.iter().for_each(|e| writer.write_i32(*e)),
        List::Long(v) => v.iter().for_each(|e| writer.write_i64(*e)),
        List::Float(v) => v.iter().for_each(|e| writer.write_f32(*e)),
        List::Double(v) => v.iter().for_each(|e| writer.write_f64(*e)),
        List::ByteArray(v) => {
            for e in v {
                write_byte_array(writer, e)?;
            }
        }
        List::String(v) => {
            for e in v {
                writer.write_string(e)?;
            }
        }
        List::List(v) => {
            for e in v {
                write_list(writer, e)?;
            }
        }
        List::Compound(v) => {
            for e in v {
                write_compound(writer, e)?;
            }
        }
        List::IntArray(v) => {
            for e in v {
                write_int_array(writer, e)?;
            }
        }
        List::LongArray(v) => {
            for e in v {
                write_long_array(writer, e)?;
            }
        }
    }
    Ok(())
}

fn write_byte_array(writer: &mut ByteWriter, values: &[u8]) -> Result<(), EncodeError> {
    writer.write_count(values.len())?;
    writer.write_bytes(values);
    Ok(())
}

fn write_int_array(writer: &mut ByteWriter, values: &[i32]) -> Result<(), EncodeError> {
    writer.write_count(values.len())?;
    values.iter().for_each(|v| writer.write_i32(*v));
    Ok(())
}

fn write_long_array(writer: &mut ByteWriter, values: &[i64]) -> Result<(), EncodeError> {
    writer.write_count(values.len())?;
    values.iter().for_each(|v| writer.write_i64(*v));
    Ok(())
}
