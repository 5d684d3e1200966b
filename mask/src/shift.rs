//! Directional shifting with boundary extension.

use crate::mask::{VoxelMask, MSB};
use crate::orientation::{Axis, Direction, Orientation};

/// How the layer exposed by a shift is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryPolicy {
    #[default]
    FillFalse,
    FillTrue,
    /// Repeat the pre-shift boundary layer.
    CopyBoundary,
}

impl VoxelMask {
    /// Moves every voxel one step along `orientation`.
    ///
    /// Each voxel takes the value of its neighbor one step against the shift
    /// direction; the vacated boundary layer is filled per `policy`.
    #[must_use]
    pub fn shift(&self, orientation: Orientation, policy: BoundaryPolicy) -> Self {
        let direction = orientation.direction();
        let words = match orientation.axis() {
            Axis::X => shift_rows(&self.words, self.dims.words_per_row(), direction, policy),
            Axis::Y => shift_blocks(
                &self.words,
                self.dims.words_per_row(),
                self.dims.y(),
                direction,
                policy,
            ),
            Axis::Z => shift_blocks(
                &self.words,
                self.dims.words_per_layer(),
                self.dims.z(),
                direction,
                policy,
            ),
        };
        Self {
            dims: self.dims,
            words,
        }
    }

    /// Applies [`shift`](Self::shift) `steps` times.
    #[must_use]
    pub fn shift_by(&self, orientation: Orientation, steps: usize, policy: BoundaryPolicy) -> Self {
        (0..steps).fold(self.clone(), |mask, _| mask.shift(orientation, policy))
    }
}

/// Y and Z shifts: whole word blocks slide between rows or layers.
///
/// `block_len` words form one row (Y) or layer (Z); `count` blocks form one
/// group that is shifted independently of its neighbors.
fn shift_blocks(
    words: &[u16],
    block_len: usize,
    count: usize,
    direction: Direction,
    policy: BoundaryPolicy,
) -> Vec<u16> {
    let mut out = Vec::with_capacity(words.len());
    for group in words.chunks_exact(block_len * count) {
        let (first, last) = (&group[..block_len], &group[group.len() - block_len..]);
        match direction {
            Direction::Increasing => {
                extend_fill(&mut out, policy, first);
                out.extend_from_slice(&group[..group.len() - block_len]);
            }
            Direction::Decreasing => {
                out.extend_from_slice(&group[block_len..]);
                extend_fill(&mut out, policy, last);
            }
        }
    }
    out
}

fn extend_fill(out: &mut Vec<u16>, policy: BoundaryPolicy, boundary: &[u16]) {
    match policy {
        BoundaryPolicy::FillFalse => out.resize(out.len() + boundary.len(), 0),
        BoundaryPolicy::FillTrue => out.resize(out.len() + boundary.len(), u16::MAX),
        BoundaryPolicy::CopyBoundary => out.extend_from_slice(boundary),
    }
}

/// X shifts: bits move within each row, carrying across word boundaries but
/// never across rows.
fn shift_rows(
    words: &[u16],
    words_per_row: usize,
    direction: Direction,
    policy: BoundaryPolicy,
) -> Vec<u16> {
    words
        .chunks_exact(words_per_row)
        .flat_map(|row| match direction {
            Direction::Increasing => shift_row_increasing(row, policy),
            Direction::Decreasing => shift_row_decreasing(row, policy),
        })
        .collect()
}

/// Toward higher x: each word moves toward its LSB and takes the previous
/// word's LSB as its new MSB. Folds left to right.
fn shift_row_increasing(row: &[u16], policy: BoundaryPolicy) -> Vec<u16> {
    let carry_in = match policy {
        BoundaryPolicy::FillFalse => 0,
        BoundaryPolicy::FillTrue => 1,
        BoundaryPolicy::CopyBoundary => row[0] >> 15,
    };
    row.iter()
        .scan(carry_in, |carry, &word| {
            let shifted = (*carry << 15) | (word >> 1);
            *carry = word & 1;
            Some(shifted)
        })
        .collect()
}

/// Toward lower x: each word moves toward its MSB and takes the next word's
/// MSB as its new LSB. Folds right to left.
fn shift_row_decreasing(row: &[u16], policy: BoundaryPolicy) -> Vec<u16> {
    let carry_in = match policy {
        BoundaryPolicy::FillFalse => 0,
        BoundaryPolicy::FillTrue => 1,
        BoundaryPolicy::CopyBoundary => row[row.len() - 1] & 1,
    };
    let mut shifted: Vec<u16> = row
        .iter()
        .rev()
        .scan(carry_in, |carry, &word| {
            let shifted = (word << 1) | *carry;
            *carry = u16::from(word & MSB != 0);
            Some(shifted)
        })
        .collect();
    shifted.reverse();
    shifted
}
