//! Bit-packed 3D voxel masks for voxcast.
//!
//! A [`VoxelMask`] holds one boolean per voxel of a [`Dims`] grid, packed into
//! 16-bit words with x fastest-varying and the first voxel of each word in its
//! most significant bit. Masks are immutable values: negation, combination and
//! shifting all return new masks.
//!
//! # Design Principles
//!
//! - **Word-aligned rows** - Grid width is a multiple of 16, so Y and Z shifts
//!   move whole words and only X shifts carry bits between words.
//! - **Explicit errors** - Size, dimension and range problems return
//!   [`MaskError`], never panic.
//! - **No domain knowledge** - This crate knows nothing about files or meshes.
//!
//! # Example
//!
//! ```
//! use mask::{BoundaryPolicy, Dims, Orientation, VoxelMask};
//!
//! let dims = Dims::new(16, 1, 1).unwrap();
//! let mask = VoxelMask::new(dims, vec![0x8000]).unwrap();
//! assert!(mask.get_boolean(0, 0, 0).unwrap());
//!
//! let shifted = mask.shift(Orientation::PosX, BoundaryPolicy::FillFalse);
//! assert!(shifted.get_boolean(1, 0, 0).unwrap());
//! ```

mod dims;
mod error;
mod mask;
mod orientation;
mod shift;

pub use dims::{Dims, MAX_EXTENT, WORD_BITS};
pub use error::{MaskError, MaskResult};
pub use mask::VoxelMask;
pub use orientation::{Axis, Direction, Orientation};
pub use shift::BoundaryPolicy;
