//! Named binary tag tree codec for voxcast world snapshots.
//!
//! A tag file is a recursive, self-describing tree: every framed tag is a type
//! byte, a 2-byte big-endian name length, the UTF-8 name, then a type-specific
//! payload. Compounds hold framed children up to a zero end marker; lists hold
//! one element type byte, a 4-byte count, and payload-only elements.
//!
//! # Design Principles
//!
//! - **Exact layout** - Decoding then encoding reproduces the input bytes.
//! - **Bounded decoding** - Every declared length is validated against [`Limits`]
//!   before iteration or allocation.
//! - **No domain knowledge** - This crate knows nothing about voxels or masks.
//!
//! # Example
//!
//! ```
//! use tag::{decode, encode, Compound, Limits, NamedCompound, Tag};
//!
//! let root = NamedCompound::new(
//!     "snapshot",
//!     Compound::new()
//!         .with("x", Tag::Byte(16))
//!         .with("open", Tag::ByteArray(vec![0xFF, 0x00])),
//! );
//! let bytes = encode(&root).unwrap();
//! let decoded = decode(&bytes, &Limits::default()).unwrap();
//! assert_eq!(decoded, root);
//! ```

mod decode;
mod encode;
mod error;
mod kind;
mod limits;
mod reader;
mod value;
mod writer;

pub use decode::decode;
pub use encode::encode;
pub use error::{AccessError, DecodeError, EncodeError, LimitKind, TagResult};
pub use kind::TagKind;
pub use limits::Limits;
pub use reader::ByteReader;
pub use value::{Compound, List, NamedCompound, Tag};
pub use writer::ByteWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = Limits::default();
        let _ = TagKind::Compound;
        let _ = Compound::new();
        let _ = ByteWriter::new();
        let _ = ByteReader::new(&[]);

        let _: TagResult<()> = Ok(());
    }

    #[test]
    fn doctest_example() {
        let root = NamedCompound::new(
            "snapshot",
            Compound::new()
                .with("x", Tag::Byte(16))
                .with("open", Tag::ByteArray(vec![0xFF, 0x00])),
        );
        let bytes = encode(&root).unwrap();
        let decoded = decode(&bytes, &Limits::default()).unwrap();
        assert_eq!(decoded, root);
        assert_eq!(encode(&decoded).unwrap(), bytes);
    }
}
