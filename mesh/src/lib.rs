//! Surface extraction from voxel masks, and OBJ export.
//!
//! [`extract_surface`] finds, for each of the six orientations, the solid
//! voxels whose neighbor that way is empty or off-grid, using only mask
//! algebra, and emits one unit quad per exposed side.
//!
//! # Example
//!
//! ```
//! use mask::{Dims, VoxelMask};
//!
//! let dims = Dims::new(16, 3, 3).unwrap();
//! let solid = VoxelMask::from_fn(dims, |x, y, z| (x, y, z) == (1, 1, 1));
//! let surface = mesh::extract_surface(&solid).unwrap();
//! assert_eq!(surface.len(), 6);
//! ```

mod obj;
mod surface;
mod types;

pub use obj::{write_obj, ObjExport};
pub use surface::{exposure_mask, extract_surface, extract_surface_union, from_cube_locations};
pub use types::{Face, Mesh, Vertex};

#[cfg(test)]
mod tests {
    use super::*;
    use mask::{Dims, VoxelMask};

    #[test]
    fn doctest_example() {
        let dims = Dims::new(16, 3, 3).unwrap();
        let solid = VoxelMask::from_fn(dims, |x, y, z| (x, y, z) == (1, 1, 1));
        let surface = extract_surface(&solid).unwrap();
        assert_eq!(surface.len(), 6);
    }
}
