//! Plain-text OBJ export.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::types::{Mesh, Vertex};

/// A mesh flattened into an indexed vertex list.
///
/// Vertices are deduplicated by value in first-use order; face indices are
/// 1-based as OBJ expects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjExport {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<[usize; 4]>,
}

impl ObjExport {
    #[must_use]
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut index: HashMap<Vertex, usize> = HashMap::new();
        let mut vertices = Vec::new();
        let faces = mesh
            .faces()
            .iter()
            .map(|face| {
                face.vertices.map(|v| {
                    *index.entry(v).or_insert_with(|| {
                        vertices.push(v);
                        vertices.len()
                    })
                })
            })
            .collect();
        Self { vertices, faces }
    }

    /// Writes `v` lines scaled by `scale`, then `f` lines.
    pub fn write<W: Write>(&self, scale: f64, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            "# {} vertices, {} faces",
            self.vertices.len(),
            self.faces.len()
        )?;
        for v in &self.vertices {
            writeln!(
                out,
                "v {} {} {}",
                f64::from(v.x) * scale,
                f64::from(v.y) * scale,
                f64::from(v.z) * scale
            )?;
        }
        for [a, b, c, d] in &self.faces {
            writeln!(out, "f {a} {b} {c} {d}")?;
        }
        out.flush()
    }
}

/// Deduplicates and writes `mesh` as OBJ text.
pub fn write_obj<W: Write>(mesh: &Mesh, scale: f64, out: W) -> io::Result<()> {
    ObjExport::from_mesh(mesh).write(scale, out)
}
