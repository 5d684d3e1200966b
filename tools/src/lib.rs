//! Conversion and inspection tools for voxcast world snapshots.
//!
//! This crate backs the `voxcast` binary:
//!
//! - Convert a snapshot's masks into an OBJ surface mesh
//! - Summarize a tag file's structure and mask occupancy
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Reports go to stdout, progress logs to stderr.

mod config;
mod export;
mod inspect;

pub use config::{ConfigOverrides, ExportConfig, MeshMode};
pub use export::{build_mesh, export_obj};
pub use inspect::{
    format_inspect_pretty, inspect_bytes, inspect_root, inspect_targets, EntrySummary,
    InspectOrder, InspectReport, InspectTarget, MaskSummary, DEFAULT_SIZE_LIMIT,
};
