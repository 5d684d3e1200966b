//! Mesh data structures.

use mask::{Axis, Direction, Orientation, MAX_EXTENT};

/// A grid-aligned corner coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns this vertex moved one unit along `axis`.
    #[must_use]
    pub const fn step(self, axis: Axis) -> Self {
        match axis {
            Axis::X => Self::new(self.x + 1, self.y, self.z),
            Axis::Y => Self::new(self.x, self.y + 1, self.z),
            Axis::Z => Self::new(self.x, self.y, self.z + 1),
        }
    }
}

/// A planar unit quad. Vertex order is counterclockwise seen from the side
/// its orientation points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    pub vertices: [Vertex; 4],
    pub orientation: Orientation,
}

impl Face {
    /// The unit face of voxel `(x, y, z)` on its `orientation` side.
    ///
    /// Coordinates must lie inside a grid, so each is below [`MAX_EXTENT`]
    /// and the far corner still fits an `i32`.
    #[must_use]
    pub fn unit(x: usize, y: usize, z: usize, orientation: Orientation) -> Self {
        debug_assert!(x < MAX_EXTENT && y < MAX_EXTENT && z < MAX_EXTENT);
        let axis = orientation.axis();
        let corner = Vertex::new(x as i32, y as i32, z as i32);
        let (a, b) = axis.perpendicular();
        let (base, first, second) = match orientation.direction() {
            Direction::Increasing => (corner.step(axis), a, b),
            Direction::Decreasing => (corner, b, a),
        };
        Self {
            vertices: [
                base,
                base.step(first),
                base.step(first).step(second),
                base.step(second),
            ],
            orientation,
        }
    }
}

/// An unordered collection of faces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mesh {
    faces: Vec<Face>,
}

impl Mesh {
    #[must_use]
    pub const fn new() -> Self {
        Self { faces: Vec::new() }
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl Extend<Face> for Mesh {
    fn extend<T: IntoIterator<Item = Face>>(&mut self, iter: T) {
        self.faces.extend(iter);
    }
}

impl FromIterator<Face> for Mesh {
    fn from_iter<T: IntoIterator<Item = Face>>(iter: T) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}
