//! Snapshot to OBJ conversion.

use std::io::Write;

use anyhow::{Context, Result};
use mesh::{Mesh, ObjExport};
use world::WorldSnapshot;

use crate::config::{ExportConfig, MeshMode};

/// Merges the configured masks and meshes the result.
pub fn build_mesh(snapshot: &WorldSnapshot, config: &ExportConfig) -> Result<Mesh> {
    for name in &config.masks {
        let mask = snapshot
            .mask(name)
            .with_context(|| format!("select mask {name:?}"))?;
        tracing::info!(mask = %name, set = mask.count_ones(), "selected mask");
    }
    let solid = config.selection().apply(snapshot)?;
    tracing::debug!(
        solid = solid.count_ones(),
        combine = ?config.combine,
        invert = config.invert,
        "solidity mask ready"
    );
    let mesh = match config.mode {
        MeshMode::Surface => mesh::extract_surface(&solid)?,
        MeshMode::Cubes => mesh::from_cube_locations(&solid),
    };
    Ok(mesh)
}

/// Meshes `snapshot` and writes OBJ text to `out`; returns the export written.
pub fn export_obj<W: Write>(
    snapshot: &WorldSnapshot,
    config: &ExportConfig,
    out: W,
) -> Result<ObjExport> {
    let mesh = build_mesh(snapshot, config)?;
    let export = ObjExport::from_mesh(&mesh);
    tracing::info!(
        faces = export.faces.len(),
        vertices = export.vertices.len(),
        "mesh built"
    );
    export.write(config.scale, out).context("write obj")?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mask::{Dims, VoxelMask};
    use world::Combine;

    fn snapshot() -> WorldSnapshot {
        let dims = Dims::new(16, 3, 3).unwrap();
        let mut snapshot = WorldSnapshot::new("w".into(), dims);
        let open = VoxelMask::from_fn(dims, |x, y, z| !(x < 2 && y == 1 && z == 1));
        snapshot.insert_mask("open", open).unwrap();
        let magma = VoxelMask::from_fn(dims, |x, y, z| (x, y, z) == (8, 0, 0));
        snapshot.insert_mask("magma", magma).unwrap();
        snapshot
    }

    #[test]
    fn default_config_meshes_closed_tiles() {
        let mesh = build_mesh(&snapshot(), &ExportConfig::default()).unwrap();
        assert_eq!(mesh.len(), 10);
    }

    #[test]
    fn cubes_mode_keeps_interior_faces() {
        let config = ExportConfig {
            mode: MeshMode::Cubes,
            ..ExportConfig::default()
        };
        assert_eq!(build_mesh(&snapshot(), &config).unwrap().len(), 12);
    }

    #[test]
    fn union_of_closed_and_magma() {
        let mut snapshot = snapshot();
        let closed = snapshot.mask("open").unwrap().negate();
        snapshot.insert_mask("closed", closed).unwrap();
        let config = ExportConfig {
            masks: vec!["closed".into(), "magma".into()],
            combine: Combine::Or,
            invert: false,
            ..ExportConfig::default()
        };
        let mesh = build_mesh(&snapshot, &config).unwrap();
        assert_eq!(mesh.len(), 16);
    }

    #[test]
    fn missing_mask_has_context() {
        let config = ExportConfig {
            masks: vec!["walkable".into()],
            ..ExportConfig::default()
        };
        let err = build_mesh(&snapshot(), &config).unwrap_err();
        assert!(format!("{err:#}").contains("select mask \"walkable\""));
    }

    #[test]
    fn export_writes_scaled_obj() {
        let config = ExportConfig {
            scale: 2.0,
            ..ExportConfig::default()
        };
        let mut out = Vec::new();
        let export = export_obj(&snapshot(), &config, &mut out).unwrap();
        assert_eq!(export.vertices.len(), 12);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# 12 vertices, 10 faces\n"));
        assert!(text.lines().any(|line| line == "v 4 2 2"));
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 10);
    }
}
