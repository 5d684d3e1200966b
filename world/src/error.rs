//! Error types for snapshot loading.

use std::fmt;

/// Result type for snapshot operations.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur while turning a tag file into masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Tag stream error.
    Decode(tag::DecodeError),

    /// Expected entry missing or of the wrong type.
    Access(tag::AccessError),

    /// Mask construction or combination error.
    Mask(mask::MaskError),

    /// A grid dimension entry is not a positive integer.
    InvalidDimension { axis: char, value: i64 },

    /// A named mask payload does not match the grid volume.
    MaskSizeMismatch {
        name: String,
        expected_bytes: usize,
        actual_bytes: usize,
    },

    /// A mask selection named no masks.
    NoMasksSelected,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "decode error: {err}"),
            Self::Access(err) => write!(f, "{err}"),
            Self::Mask(err) => write!(f, "mask error: {err}"),
            Self::InvalidDimension { axis, value } => {
                write!(f, "grid dimension {axis} must be positive, found {value}")
            }
            Self::MaskSizeMismatch {
                name,
                expected_bytes,
                actual_bytes,
            } => {
                write!(
                    f,
                    "mask \"{name}\" has {actual_bytes} bytes, grid needs {expected_bytes}"
                )
            }
            Self::NoMasksSelected => write!(f, "no masks selected"),
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Access(e) => Some(e),
            Self::Mask(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tag::DecodeError> for WorldError {
    fn from(err: tag::DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<tag::AccessError> for WorldError {
    fn from(err: tag::AccessError) -> Self {
        Self::Access(err)
    }
}

impl From<mask::MaskError> for WorldError {
    fn from(err: mask::MaskError) -> Self {
        Self::Mask(err)
    }
}
