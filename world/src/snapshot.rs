//! Grid dimensions and named masks recovered from a tag file.

use std::collections::BTreeMap;

use mask::{Dims, MaskResult, VoxelMask};
use tag::{Compound, Limits, NamedCompound, Tag};

use crate::error::{WorldError, WorldResult};

/// Conventional entry names written by the snapshot producer.
pub mod names {
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const Z: &str = "z";
    pub const MAGMA: &str = "magma";
    pub const WALKABLE: &str = "walkable";
    pub const PASSABLE: &str = "passable";
    pub const OPEN: &str = "open";
}

/// Per-tile booleans; `None` when the snapshot carries no such mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileFlags {
    pub magma: Option<bool>,
    pub walkable: Option<bool>,
    pub passable: Option<bool>,
    pub open: Option<bool>,
}

/// A decoded world: grid extent plus every mask-shaped byte array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSnapshot {
    name: String,
    dims: Dims,
    masks: BTreeMap<String, VoxelMask>,
    /// Byte arrays not sized for the grid, by byte length.
    rejected: BTreeMap<String, usize>,
}

impl WorldSnapshot {
    #[must_use]
    pub const fn new(name: String, dims: Dims) -> Self {
        Self {
            name,
            dims,
            masks: BTreeMap::new(),
            rejected: BTreeMap::new(),
        }
    }

    /// Decodes a tag file and loads its snapshot.
    pub fn from_bytes(bytes: &[u8], limits: &Limits) -> WorldResult<Self> {
        let root = tag::decode(bytes, limits)?;
        Self::from_root(&root)
    }

    /// Reads `x`/`y`/`z` and loads every byte array sized for that grid.
    ///
    /// Byte arrays of any other size are remembered by length; selecting one
    /// through [`mask`](Self::mask) fails with a size mismatch.
    pub fn from_root(root: &NamedCompound) -> WorldResult<Self> {
        let dims = read_dims(&root.compound)?;
        let mut snapshot = Self::new(root.name.clone(), dims);
        for (name, tag) in root.compound.iter() {
            let Tag::ByteArray(bytes) = tag else {
                continue;
            };
            if bytes.len() == mask_bytes(dims) {
                let mask = VoxelMask::from_be_bytes(dims, bytes)?;
                snapshot.masks.insert(name.to_string(), mask);
            } else {
                snapshot.rejected.insert(name.to_string(), bytes.len());
            }
        }
        Ok(snapshot)
    }

    /// Adds or replaces a mask; it must cover this snapshot's grid.
    pub fn insert_mask(&mut self, name: impl Into<String>, mask: VoxelMask) -> WorldResult<()> {
        if mask.dims() != self.dims {
            return Err(mask::MaskError::DimensionMismatch {
                left: self.dims,
                right: mask.dims(),
            }
            .into());
        }
        let name = name.into();
        self.rejected.remove(&name);
        self.masks.insert(name, mask);
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.dims
    }

    /// Looks up a mask that must be present and sized for the grid.
    pub fn mask(&self, name: &str) -> WorldResult<&VoxelMask> {
        if let Some(mask) = self.masks.get(name) {
            return Ok(mask);
        }
        if let Some(&actual_bytes) = self.rejected.get(name) {
            return Err(WorldError::MaskSizeMismatch {
                name: name.to_string(),
                expected_bytes: mask_bytes(self.dims),
                actual_bytes,
            });
        }
        Err(tag::AccessError::Missing {
            name: name.to_string(),
        }
        .into())
    }

    pub fn mask_names(&self) -> impl Iterator<Item = &str> {
        self.masks.keys().map(String::as_str)
    }

    pub fn masks(&self) -> impl Iterator<Item = (&str, &VoxelMask)> {
        self.masks.iter().map(|(name, mask)| (name.as_str(), mask))
    }

    /// Byte arrays that were not sized for the grid, with their lengths.
    pub fn rejected_arrays(&self) -> impl Iterator<Item = (&str, usize)> {
        self.rejected.iter().map(|(name, len)| (name.as_str(), *len))
    }

    /// Flags of the tile at `(x, y, z)`.
    pub fn flags_at(&self, x: usize, y: usize, z: usize) -> MaskResult<TileFlags> {
        let flag = |name: &str| -> MaskResult<Option<bool>> {
            self.masks
                .get(name)
                .map(|mask| mask.get_boolean(x, y, z))
                .transpose()
        };
        Ok(TileFlags {
            magma: flag(names::MAGMA)?,
            walkable: flag(names::WALKABLE)?,
            passable: flag(names::PASSABLE)?,
            open: flag(names::OPEN)?,
        })
    }

    /// Encodes back into the producer's layout: byte dims then one byte array per mask.
    pub fn to_root(&self) -> WorldResult<NamedCompound> {
        let mut compound = Compound::new();
        for (axis, value) in [
            (names::X, self.dims.x()),
            (names::Y, self.dims.y()),
            (names::Z, self.dims.z()),
        ] {
            let byte = u8::try_from(value).map_err(|_| WorldError::InvalidDimension {
                axis: axis.chars().next().unwrap_or('?'),
                value: value as i64,
            })?;
            compound.insert(axis, Tag::Byte(byte as i8));
        }
        for (name, mask) in &self.masks {
            compound.insert(name.clone(), Tag::ByteArray(mask.to_be_bytes()));
        }
        Ok(NamedCompound::new(self.name.clone(), compound))
    }
}

/// Loads one named mask, failing if it is absent or sized for another grid.
pub fn load_mask(compound: &Compound, name: &str, dims: Dims) -> WorldResult<VoxelMask> {
    let bytes = compound.get_byte_array(name)?;
    let expected_bytes = mask_bytes(dims);
    if bytes.len() != expected_bytes {
        return Err(WorldError::MaskSizeMismatch {
            name: name.to_string(),
            expected_bytes,
            actual_bytes: bytes.len(),
        });
    }
    Ok(VoxelMask::from_be_bytes(dims, bytes)?)
}

const fn mask_bytes(dims: Dims) -> usize {
    dims.volume() / 8
}

/// Reads the grid extent from the `x`, `y` and `z` entries.
///
/// Byte entries are read as unsigned so extents up to 255 fit; short, int
/// and long entries are accepted as well.
pub fn read_dims(compound: &Compound) -> WorldResult<Dims> {
    let x = read_extent(compound, names::X, 'x')?;
    let y = read_extent(compound, names::Y, 'y')?;
    let z = read_extent(compound, names::Z, 'z')?;
    Ok(Dims::new(x, y, z)?)
}

fn read_extent(compound: &Compound, name: &str, axis: char) -> WorldResult<usize> {
    let entry = compound.require(name)?;
    let value = match entry {
        Tag::Byte(v) => i64::from(*v as u8),
        other => other.as_i64().ok_or_else(|| tag::AccessError::WrongType {
            name: name.to_string(),
            expected: tag::TagKind::Byte,
            found: other.kind(),
        })?,
    };
    usize::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(WorldError::InvalidDimension { axis, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(x: i8, y: i8, z: i8) -> Compound {
        Compound::new()
            .with("x", Tag::Byte(x))
            .with("y", Tag::Byte(y))
            .with("z", Tag::Byte(z))
    }

    #[test]
    fn dims_from_bytes() {
        let dims = read_dims(&root(16, 2, 3)).unwrap();
        assert_eq!((dims.x(), dims.y(), dims.z()), (16, 2, 3));
    }

    #[test]
    fn byte_dims_are_unsigned() {
        // 144 does not fit an i8
        let dims = read_dims(&root(144u8 as i8, 1, 1)).unwrap();
        assert_eq!(dims.x(), 144);
    }

    #[test]
    fn int_dims_accepted() {
        let c = root(16, 1, 1).with("z", Tag::Int(300));
        assert_eq!(read_dims(&c).unwrap().z(), 300);
    }

    #[test]
    fn missing_dim_is_missing_data() {
        let c = Compound::new().with("x", Tag::Byte(16));
        let err = read_dims(&c).unwrap_err();
        assert_eq!(
            err,
            WorldError::Access(tag::AccessError::Missing {
                name: "y".to_string()
            })
        );
    }

    #[test]
    fn zero_dim_rejected() {
        let err = read_dims(&root(16, 0, 1)).unwrap_err();
        assert_eq!(err, WorldError::InvalidDimension { axis: 'y', value: 0 });
    }

    #[test]
    fn negative_int_dim_rejected() {
        let c = root(16, 1, 1).with("x", Tag::Int(-16));
        assert!(matches!(
            read_dims(&c),
            Err(WorldError::InvalidDimension { axis: 'x', value: -16 })
        ));
    }

    #[test]
    fn unaligned_dims_rejected() {
        let err = read_dims(&root(3, 3, 3)).unwrap_err();
        assert!(matches!(
            err,
            WorldError::Mask(mask::MaskError::InvalidDims { .. })
        ));
    }

    #[test]
    fn string_dim_is_wrong_type() {
        let c = root(16, 1, 1).with("x", Tag::String("16".into()));
        assert!(matches!(
            read_dims(&c),
            Err(WorldError::Access(tag::AccessError::WrongType { .. }))
        ));
    }

    #[test]
    fn load_mask_checks_size() {
        let dims = Dims::new(16, 2, 1).unwrap();
        let c = Compound::new().with("open", Tag::ByteArray(vec![0; 3]));
        assert_eq!(
            load_mask(&c, "open", dims).unwrap_err(),
            WorldError::MaskSizeMismatch {
                name: "open".to_string(),
                expected_bytes: 4,
                actual_bytes: 3,
            }
        );
    }

    #[test]
    fn load_mask_missing() {
        let dims = Dims::new(16, 1, 1).unwrap();
        assert!(matches!(
            load_mask(&Compound::new(), "magma", dims),
            Err(WorldError::Access(tag::AccessError::Missing { .. }))
        ));
    }

    #[test]
    fn from_root_sets_aside_other_arrays() {
        let c = root(16, 1, 1)
            .with("open", Tag::ByteArray(vec![0xFF, 0x00]))
            .with("notes", Tag::ByteArray(vec![1, 2, 3]));
        let snapshot = WorldSnapshot::from_root(&NamedCompound::new("w", c)).unwrap();
        assert_eq!(snapshot.mask_names().collect::<Vec<_>>(), ["open"]);
        assert_eq!(
            snapshot.rejected_arrays().collect::<Vec<_>>(),
            [("notes", 3)]
        );
    }

    #[test]
    fn selecting_wrong_size_array_is_size_mismatch() {
        let c = root(16, 1, 1).with("open", Tag::ByteArray(vec![0xFF]));
        let snapshot = WorldSnapshot::from_root(&NamedCompound::new("w", c)).unwrap();
        assert_eq!(
            snapshot.mask("open").unwrap_err(),
            WorldError::MaskSizeMismatch {
                name: "open".to_string(),
                expected_bytes: 2,
                actual_bytes: 1,
            }
        );
    }

    #[test]
    fn insert_mask_replaces_rejected_array() {
        let c = root(16, 1, 1).with("open", Tag::ByteArray(vec![0xFF]));
        let mut snapshot = WorldSnapshot::from_root(&NamedCompound::new("w", c)).unwrap();
        let dims = snapshot.dims();
        snapshot
            .insert_mask("open", VoxelMask::filled(dims, true))
            .unwrap();
        assert!(snapshot.mask("open").unwrap().all());
        assert_eq!(snapshot.rejected_arrays().count(), 0);
    }

    #[test]
    fn long_dims_overflowing_volume_rejected() {
        let c = root(16, 1, 1)
            .with("x", Tag::Long(1 << 40))
            .with("y", Tag::Long(1 << 40));
        assert!(matches!(
            read_dims(&c),
            Err(WorldError::Mask(mask::MaskError::InvalidDims { .. }))
        ));
    }

    #[test]
    fn flags_reflect_present_masks() {
        let c = root(16, 1, 1)
            .with("open", Tag::ByteArray(vec![0x80, 0x00]))
            .with("magma", Tag::ByteArray(vec![0x00, 0x00]));
        let snapshot = WorldSnapshot::from_root(&NamedCompound::new("w", c)).unwrap();
        let flags = snapshot.flags_at(0, 0, 0).unwrap();
        assert_eq!(
            flags,
            TileFlags {
                magma: Some(false),
                walkable: None,
                passable: None,
                open: Some(true),
            }
        );
        assert!(snapshot.flags_at(16, 0, 0).is_err());
    }

    #[test]
    fn insert_mask_rejects_other_grid() {
        let mut snapshot = WorldSnapshot::new("w".into(), Dims::new(16, 1, 1).unwrap());
        let other = VoxelMask::filled(Dims::new(32, 1, 1).unwrap(), true);
        assert!(matches!(
            snapshot.insert_mask("open", other),
            Err(WorldError::Mask(mask::MaskError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn to_root_roundtrips() {
        let dims = Dims::new(16, 2, 1).unwrap();
        let mut snapshot = WorldSnapshot::new("w".into(), dims);
        snapshot
            .insert_mask("walkable", VoxelMask::new(dims, vec![0x1234, 0x8001]).unwrap())
            .unwrap();
        let back = WorldSnapshot::from_root(&snapshot.to_root().unwrap()).unwrap();
        assert_eq!(back, snapshot);
    }
}
