//! Choosing which snapshot masks count as solid.

use mask::VoxelMask;

use crate::error::{WorldError, WorldResult};
use crate::snapshot::{names, WorldSnapshot};

/// How several selected masks merge into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Combine {
    #[default]
    Or,
    And,
}

/// Named masks to merge into a solidity mask.
///
/// The default selects `open` and inverts it, so anything not open is solid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaskSelection {
    pub masks: Vec<String>,
    pub combine: Combine,
    pub invert: bool,
}

impl Default for MaskSelection {
    fn default() -> Self {
        Self {
            masks: vec![names::OPEN.to_string()],
            combine: Combine::Or,
            invert: true,
        }
    }
}

impl MaskSelection {
    /// Selects a single mask as-is.
    #[must_use]
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            masks: vec![name.into()],
            combine: Combine::Or,
            invert: false,
        }
    }

    /// Merges the selected masks of `snapshot`, then applies inversion.
    pub fn apply(&self, snapshot: &WorldSnapshot) -> WorldResult<VoxelMask> {
        let mut names = self.masks.iter();
        let first = names.next().ok_or(WorldError::NoMasksSelected)?;
        let mut merged = snapshot.mask(first)?.clone();
        for name in names {
            let next = snapshot.mask(name)?;
            merged = match self.combine {
                Combine::Or => merged.or(next)?,
                Combine::And => merged.and(next)?,
            };
        }
        Ok(if self.invert { merged.negate() } else { merged })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mask::Dims;

    fn snapshot() -> WorldSnapshot {
        let dims = Dims::new(16, 1, 1).unwrap();
        let mut snapshot = WorldSnapshot::new("w".into(), dims);
        snapshot
            .insert_mask("open", VoxelMask::new(dims, vec![0xF0F0]).unwrap())
            .unwrap();
        snapshot
            .insert_mask("magma", VoxelMask::new(dims, vec![0x0FF0]).unwrap())
            .unwrap();
        snapshot
    }

    #[test]
    fn default_inverts_open() {
        let solid = MaskSelection::default().apply(&snapshot()).unwrap();
        assert_eq!(solid.words(), &[0x0F0F]);
    }

    #[test]
    fn single_is_not_inverted() {
        let solid = MaskSelection::single("magma").apply(&snapshot()).unwrap();
        assert_eq!(solid.words(), &[0x0FF0]);
    }

    #[test]
    fn combine_or_and() {
        let mut selection = MaskSelection {
            masks: vec!["open".into(), "magma".into()],
            combine: Combine::Or,
            invert: false,
        };
        assert_eq!(selection.apply(&snapshot()).unwrap().words(), &[0xFFF0]);
        selection.combine = Combine::And;
        assert_eq!(selection.apply(&snapshot()).unwrap().words(), &[0x00F0]);
    }

    #[test]
    fn missing_mask_errors() {
        let err = MaskSelection::single("walkable")
            .apply(&snapshot())
            .unwrap_err();
        assert_eq!(
            err,
            WorldError::Access(tag::AccessError::Missing {
                name: "walkable".to_string()
            })
        );
    }

    #[test]
    fn empty_selection_errors() {
        let selection = MaskSelection {
            masks: Vec::new(),
            ..MaskSelection::default()
        };
        assert_eq!(
            selection.apply(&snapshot()).unwrap_err(),
            WorldError::NoMasksSelected
        );
    }
}
