//! The bit-packed voxel mask and its set algebra.

use crate::dims::{Dims, WORD_BITS};
use crate::error::{MaskError, MaskResult};

/// Most significant bit of a word; bit offset 0 within the word.
pub(crate) const MSB: u16 = 0x8000;

/// An immutable boolean per voxel, packed 16 voxels to a word.
///
/// Voxel `(x, y, z)` lives at flat index `z·(X·Y) + y·X + x`, in word
/// `index / 16` at bit offset `index % 16` counted from the most significant
/// bit. Every operation returns a new mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoxelMask {
    pub(crate) dims: Dims,
    pub(crate) words: Vec<u16>,
}

impl VoxelMask {
    /// Wraps a word array, which must hold exactly one bit per voxel.
    pub fn new(dims: Dims, words: Vec<u16>) -> MaskResult<Self> {
        if words.len() != dims.word_count() {
            return Err(MaskError::SizeMismatch {
                expected_bits: dims.volume(),
                actual_bits: words.len() * WORD_BITS,
            });
        }
        Ok(Self { dims, words })
    }

    /// Builds a mask from a big-endian byte payload (two bytes per word).
    pub fn from_be_bytes(dims: Dims, bytes: &[u8]) -> MaskResult<Self> {
        if bytes.len() * 8 != dims.volume() {
            return Err(MaskError::SizeMismatch {
                expected_bits: dims.volume(),
                actual_bits: bytes.len() * 8,
            });
        }
        let words = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Self { dims, words })
    }

    /// A mask with every voxel set to `value`.
    #[must_use]
    pub fn filled(dims: Dims, value: bool) -> Self {
        let word = if value { u16::MAX } else { 0 };
        Self {
            dims,
            words: vec![word; dims.word_count()],
        }
    }

    /// Builds a mask by evaluating `f` at every voxel.
    #[must_use]
    pub fn from_fn(dims: Dims, mut f: impl FnMut(usize, usize, usize) -> bool) -> Self {
        let words = (0..dims.word_count())
            .map(|word_idx| {
                (0..WORD_BITS).fold(0u16, |word, bit| {
                    let (x, y, z) = dims.coords_of(word_idx * WORD_BITS + bit);
                    if f(x, y, z) {
                        word | (MSB >> bit)
                    } else {
                        word
                    }
                })
            })
            .collect();
        Self { dims, words }
    }

    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.dims
    }

    #[must_use]
    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Big-endian byte payload, the inverse of [`from_be_bytes`](Self::from_be_bytes).
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_be_bytes()).collect()
    }

    /// Returns the voxel as `0` or `1`.
    pub fn get_bit(&self, x: usize, y: usize, z: usize) -> MaskResult<u8> {
        if !self.dims.contains(x, y, z) {
            return Err(MaskError::OutOfRange {
                x,
                y,
                z,
                dims: self.dims,
            });
        }
        let index = self.dims.index_of(x, y, z);
        let word = self.words[index / WORD_BITS];
        Ok(u8::from(word & (MSB >> (index % WORD_BITS)) != 0))
    }

    pub fn get_boolean(&self, x: usize, y: usize, z: usize) -> MaskResult<bool> {
        Ok(self.get_bit(x, y, z)? == 1)
    }

    /// Bitwise complement.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            dims: self.dims,
            words: self.words.iter().map(|w| !w).collect(),
        }
    }

    /// Applies `op` word-by-word to this mask and `other`.
    pub fn combine(&self, other: &Self, op: impl Fn(u16, u16) -> u16) -> MaskResult<Self> {
        if self.dims != other.dims {
            return Err(MaskError::DimensionMismatch {
                left: self.dims,
                right: other.dims,
            });
        }
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| op(*a, *b))
            .collect();
        Ok(Self {
            dims: self.dims,
            words,
        })
    }

    pub fn or(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, |a, b| a | b)
    }

    pub fn and(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, |a, b| a & b)
    }

    pub fn nand(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, |a, b| !(a & b))
    }

    pub fn xor(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, |a, b| a ^ b)
    }

    /// Set where both masks agree.
    pub fn iff(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, |a, b| !(a ^ b))
    }

    /// Number of set voxels.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// `true` if any voxel is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.words.iter().any(|w| *w != 0)
    }

    /// `true` if no voxel is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// `true` if every voxel is set.
    #[must_use]
    pub fn all(&self) -> bool {
        self.words.iter().all(|w| *w == u16::MAX)
    }

    /// Flat indices of set voxels in ascending order.
    ///
    /// Scans the whole mask; do not call per voxel.
    pub fn iter_true_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, word)| **word != 0)
            .flat_map(|(word_idx, &word)| {
                (0..WORD_BITS)
                    .filter(move |bit| word & (MSB >> bit) != 0)
                    .map(move |bit| word_idx * WORD_BITS + bit)
            })
    }

    #[must_use]
    pub fn true_flag_indices(&self) -> Vec<usize> {
        self.iter_true_indices().collect()
    }

    /// Coordinates of set voxels, x fastest.
    #[must_use]
    pub fn true_flag_coordinates(&self) -> Vec<(usize, usize, usize)> {
        self.iter_true_indices()
            .map(|index| self.dims.coords_of(index))
            .collect()
    }
}
