//! Error types for mask operations.

use std::fmt;

use crate::dims::Dims;

/// Result type for mask operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Errors that can occur when building or combining masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Grid extent is zero, too large, or `x` is not a multiple of the word width.
    InvalidDims { x: usize, y: usize, z: usize },

    /// Payload bit length does not match the grid volume.
    SizeMismatch {
        expected_bits: usize,
        actual_bits: usize,
    },

    /// Two masks over different grids were combined.
    DimensionMismatch { left: Dims, right: Dims },

    /// Coordinate lookup outside the grid.
    OutOfRange {
        x: usize,
        y: usize,
        z: usize,
        dims: Dims,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDims { x, y, z } => {
                write!(
                    f,
                    "invalid grid dims {x}x{y}x{z}: extents must be positive and bounded, x a multiple of 16"
                )
            }
            Self::SizeMismatch {
                expected_bits,
                actual_bits,
            } => {
                write!(
                    f,
                    "mask size mismatch: expected {expected_bits} bits, got {actual_bits}"
                )
            }
            Self::DimensionMismatch { left, right } => {
                write!(f, "mask dimension mismatch: {left} vs {right}")
            }
            Self::OutOfRange { x, y, z, dims } => {
                write!(f, "voxel ({x}, {y}, {z}) is outside grid {dims}")
            }
        }
    }
}

impl std::error::Error for MaskError {}
