//! World snapshot loading for voxcast.
//!
//! Glue between the tag codec and voxel masks: reads the grid extent from a
//! decoded tag tree, turns grid-sized byte arrays into [`VoxelMask`]s and
//! merges a [`MaskSelection`] into a single solidity mask for meshing.
//!
//! # Example
//!
//! ```
//! use tag::{Compound, Limits, NamedCompound, Tag};
//! use world::{MaskSelection, WorldSnapshot};
//!
//! let root = NamedCompound::new(
//!     "snapshot",
//!     Compound::new()
//!         .with("x", Tag::Byte(16))
//!         .with("y", Tag::Byte(1))
//!         .with("z", Tag::Byte(1))
//!         .with("open", Tag::ByteArray(vec![0xFF, 0x00])),
//! );
//! let bytes = tag::encode(&root).unwrap();
//! let snapshot = WorldSnapshot::from_bytes(&bytes, &Limits::default()).unwrap();
//! let solid = MaskSelection::default().apply(&snapshot).unwrap();
//! assert_eq!(solid.count_ones(), 8);
//! ```
//!
//! [`VoxelMask`]: mask::VoxelMask

mod error;
mod selection;
mod snapshot;

pub use error::{WorldError, WorldResult};
pub use selection::{Combine, MaskSelection};
pub use snapshot::{load_mask, names, read_dims, TileFlags, WorldSnapshot};
