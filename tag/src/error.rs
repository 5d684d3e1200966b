//! Error types for tag tree operations.

use std::fmt;

use crate::kind::TagKind;

/// Result type for tag decoding.
pub type TagResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a tag stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Attempted to read past the end of the input.
    UnexpectedEof {
        /// Byte offset where the read started.
        offset: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Type tag byte does not name a known tag variant.
    UnknownTagType { tag: u8, offset: usize },

    /// The outermost tag of a file was not a compound.
    RootNotCompound { found: TagKind },

    /// A name or string payload was not valid UTF-8.
    InvalidUtf8 { offset: usize },

    /// A 4-byte element count was negative.
    NegativeLength { length: i32, offset: usize },

    /// A list declared the end type but carried elements.
    InvalidListElement { count: usize, offset: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Bytes remained after the root compound's end marker.
    TrailingBytes { remaining: usize },
}

/// Specific decode limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    InputBytes,
    Depth,
    ArrayLength,
    ListLength,
    StringLength,
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A tag name does not fit the 2-byte length prefix.
    NameTooLong { length: usize },
    /// A string payload does not fit the 2-byte length prefix.
    StringTooLong { length: usize },
    /// An array or list does not fit the 4-byte signed count.
    ArrayTooLong { length: usize },
}

/// Errors returned by typed compound lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No child with this name exists.
    Missing { name: String },
    /// The child exists but holds a different variant.
    WrongType {
        name: String,
        expected: TagKind,
        found: TagKind,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                offset,
                requested,
                available,
            } => {
                write!(
                    f,
                    "unexpected end of input at offset {offset}: need {requested} bytes, have {available}"
                )
            }
            Self::UnknownTagType { tag, offset } => {
                write!(f, "unknown tag type 0x{tag:02X} at offset {offset}")
            }
            Self::RootNotCompound { found } => {
                write!(f, "root tag must be a compound, found {found}")
            }
            Self::InvalidUtf8 { offset } => {
                write!(f, "invalid utf-8 in string at offset {offset}")
            }
            Self::NegativeLength { length, offset } => {
                write!(f, "negative length {length} at offset {offset}")
            }
            Self::InvalidListElement { count, offset } => {
                write!(
                    f,
                    "list at offset {offset} has end element type but {count} elements"
                )
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::TrailingBytes { remaining } => {
                write!(f, "{remaining} trailing bytes after root compound")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InputBytes => "input bytes",
            Self::Depth => "nesting depth",
            Self::ArrayLength => "array length",
            Self::ListLength => "list length",
            Self::StringLength => "string length",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooLong { length } => {
                write!(f, "tag name too long: {length} bytes")
            }
            Self::StringTooLong { length } => {
                write!(f, "string too long: {length} bytes")
            }
            Self::ArrayTooLong { length } => {
                write!(f, "array too long: {length} elements")
            }
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "missing tag \"{name}\""),
            Self::WrongType {
                name,
                expected,
                found,
            } => {
                write!(f, "tag \"{name}\" is {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl std::error::Error for EncodeError {}

impl std::error::Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_unknown_tag() {
        let err = DecodeError::UnknownTagType {
            tag: 0xEE,
            offset: 17,
        };
        let msg = err.to_string();
        assert!(msg.contains("0xEE"));
        assert!(msg.contains("17"));
    }

    #[test]
    fn decode_error_display_limits_exceeded() {
        let err = DecodeError::LimitsExceeded {
            kind: LimitKind::Depth,
            limit: 4,
            actual: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("nesting depth"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn root_not_compound_names_kind() {
        let err = DecodeError::RootNotCompound {
            found: TagKind::Int,
        };
        assert!(err.to_string().contains("int"));
    }

    #[test]
    fn access_error_display_wrong_type() {
        let err = AccessError::WrongType {
            name: "open".to_string(),
            expected: TagKind::ByteArray,
            found: TagKind::IntArray,
        };
        let msg = err.to_string();
        assert!(msg.contains("open"));
        assert!(msg.contains("byte array"));
        assert!(msg.contains("int array"));
    }

    #[test]
    fn encode_error_display() {
        let err = EncodeError::NameTooLong { length: 70_000 };
        assert!(err.to_string().contains("70000"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<DecodeError>();
        assert_error::<EncodeError>();
        assert_error::<AccessError>();
    }
}
