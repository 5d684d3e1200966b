//! Exposure-filtered surface extraction.

use mask::{BoundaryPolicy, MaskResult, Orientation, VoxelMask};

use crate::types::{Face, Mesh};

/// Solid voxels whose neighbor along `orientation` is empty or off-grid.
pub fn exposure_mask(solid: &VoxelMask, orientation: Orientation) -> MaskResult<VoxelMask> {
    // Shifting against the orientation lines each voxel up with its neighbor.
    let neighbor = solid.shift(orientation.opposite(), BoundaryPolicy::FillFalse);
    solid.and(&neighbor.negate())
}

/// Every unit face between a solid voxel and a non-solid or off-grid neighbor.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "mesh::extract_surface")
)]
pub fn extract_surface(solid: &VoxelMask) -> MaskResult<Mesh> {
    let dims = solid.dims();
    let mut mesh = Mesh::new();
    for orientation in Orientation::ALL {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("orientation", ?orientation).entered();
        let exposed = exposure_mask(solid, orientation)?;
        mesh.extend(exposed.iter_true_indices().map(|index| {
            let (x, y, z) = dims.coords_of(index);
            Face::unit(x, y, z, orientation)
        }));
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(faces = mesh.len(), "surface extracted");
    Ok(mesh)
}

/// Surface of the union of several solidity masks.
///
/// All masks must share one grid. An empty slice yields an empty mesh.
pub fn extract_surface_union(masks: &[VoxelMask]) -> MaskResult<Mesh> {
    let Some((first, rest)) = masks.split_first() else {
        return Ok(Mesh::new());
    };
    let solid = rest
        .iter()
        .try_fold(first.clone(), |acc, mask| acc.or(mask))?;
    extract_surface(&solid)
}

/// All six faces of every solid voxel, with no exposure filtering.
///
/// Produces interior geometry; meant for debugging.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "mesh::from_cube_locations")
)]
pub fn from_cube_locations(solid: &VoxelMask) -> Mesh {
    solid
        .true_flag_coordinates()
        .into_iter()
        .flat_map(|(x, y, z)| {
            Orientation::ALL
                .into_iter()
                .map(move |orientation| Face::unit(x, y, z, orientation))
        })
        .collect()
}
