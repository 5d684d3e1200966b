//! Grid dimensions and the packing formula.

use std::fmt;

use crate::error::{MaskError, MaskResult};

/// Number of voxels packed into one mask word.
pub const WORD_BITS: usize = 16;

/// Largest extent along any axis; corner coordinates must fit an `i32`.
pub const MAX_EXTENT: usize = i32::MAX as usize;

/// Extent of a voxel grid.
///
/// `x` is always a positive multiple of [`WORD_BITS`], so every row packs
/// into whole words. No extent exceeds [`MAX_EXTENT`] and the volume fits a
/// `usize`, so the index arithmetic below never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    x: usize,
    y: usize,
    z: usize,
}

impl Dims {
    /// Creates validated dimensions.
    pub const fn new(x: usize, y: usize, z: usize) -> MaskResult<Self> {
        if x == 0 || y == 0 || z == 0 || x % WORD_BITS != 0 {
            return Err(MaskError::InvalidDims { x, y, z });
        }
        if x > MAX_EXTENT || y > MAX_EXTENT || z > MAX_EXTENT {
            return Err(MaskError::InvalidDims { x, y, z });
        }
        let volume = match x.checked_mul(y) {
            Some(layer) => layer.checked_mul(z),
            None => None,
        };
        if volume.is_none() {
            return Err(MaskError::InvalidDims { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    #[must_use]
    pub const fn z(self) -> usize {
        self.z
    }

    /// Total number of voxels.
    #[must_use]
    pub const fn volume(self) -> usize {
        self.x * self.y * self.z
    }

    #[must_use]
    pub const fn words_per_row(self) -> usize {
        self.x / WORD_BITS
    }

    #[must_use]
    pub const fn words_per_layer(self) -> usize {
        self.words_per_row() * self.y
    }

    /// Exact word-array length for a mask over this grid.
    #[must_use]
    pub const fn word_count(self) -> usize {
        self.words_per_layer() * self.z
    }

    #[must_use]
    pub const fn contains(self, x: usize, y: usize, z: usize) -> bool {
        x < self.x && y < self.y && z < self.z
    }

    /// Flat index `z·(X·Y) + y·X + x`. Coordinates must be in range.
    #[must_use]
    pub const fn index_of(self, x: usize, y: usize, z: usize) -> usize {
        z * (self.x * self.y) + y * self.x + x
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[must_use]
    pub const fn coords_of(self, index: usize) -> (usize, usize, usize) {
        let layer = self.x * self.y;
        (index % self.x, (index % layer) / self.x, index / layer)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}
