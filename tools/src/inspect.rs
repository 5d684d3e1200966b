//! Structural summary of a tag file.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Serialize;
use tag::{Limits, List, NamedCompound, Tag};
use world::WorldSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub root_name: String,
    pub byte_len: usize,
    pub dims: Option<[usize; 3]>,
    pub entries: Vec<EntrySummary>,
    pub masks: Vec<MaskSummary>,
}

/// One top-level entry of the root compound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub name: String,
    pub kind: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskSummary {
    pub name: String,
    pub set_voxels: usize,
    pub volume: usize,
}

/// Decodes `bytes` and summarizes it; dims and masks are best-effort.
pub fn inspect_bytes(bytes: &[u8], limits: &Limits) -> Result<(NamedCompound, InspectReport)> {
    let root = tag::decode(bytes, limits)?;
    let report = inspect_root(&root, bytes.len());
    Ok((root, report))
}

#[must_use]
pub fn inspect_root(root: &NamedCompound, byte_len: usize) -> InspectReport {
    let entries = root
        .compound
        .iter()
        .map(|(name, tag)| EntrySummary {
            name: name.to_string(),
            kind: tag.kind().name().to_string(),
            detail: describe(tag),
        })
        .collect();

    let (dims, masks) = match WorldSnapshot::from_root(root) {
        Ok(snapshot) => {
            let dims = snapshot.dims();
            let masks = snapshot
                .masks()
                .map(|(name, mask)| MaskSummary {
                    name: name.to_string(),
                    set_voxels: mask.count_ones(),
                    volume: dims.volume(),
                })
                .collect();
            (Some([dims.x(), dims.y(), dims.z()]), masks)
        }
        Err(err) => {
            tracing::debug!(%err, "no voxel grid in root");
            (None, Vec::new())
        }
    };

    InspectReport {
        root_name: root.name.clone(),
        byte_len,
        dims,
        entries,
        masks,
    }
}

fn describe(tag: &Tag) -> String {
    match tag {
        Tag::Byte(v) => v.to_string(),
        Tag::Short(v) => v.to_string(),
        Tag::Int(v) => v.to_string(),
        Tag::Long(v) => v.to_string(),
        Tag::Float(v) => v.to_string(),
        Tag::Double(v) => v.to_string(),
        Tag::String(s) => format!("{s:?}"),
        Tag::ByteArray(v) => format!("{} bytes", v.len()),
        Tag::IntArray(v) => format!("{} ints", v.len()),
        Tag::LongArray(v) => format!("{} longs", v.len()),
        Tag::List(list) => describe_list(list),
        Tag::Compound(c) => format!("{} entries", c.len()),
    }
}

fn describe_list(list: &List) -> String {
    format!("{} x {}", list.len(), list.element_kind().name())
}

#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut lines = vec![format!(
        "root: {:?} ({} bytes)",
        report.root_name, report.byte_len
    )];
    lines.push(match report.dims {
        Some([x, y, z]) => format!("grid: {x}x{y}x{z}"),
        None => "grid: none".to_string(),
    });
    lines.push("entries:".to_string());
    lines.extend(
        report
            .entries
            .iter()
            .map(|entry| format!("  {}: {} {}", entry.name, entry.kind, entry.detail)),
    );
    if !report.masks.is_empty() {
        lines.push("masks:".to_string());
        lines.extend(report.masks.iter().map(|mask| {
            format!("  {}: {}/{} set", mask.name, mask.set_voxels, mask.volume)
        }));
    }
    lines.join("\n")
}

/// Files kept by a size-ordered directory inspection without a limit.
pub const DEFAULT_SIZE_LIMIT: usize = 10;

/// Order of files when inspecting a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectOrder {
    #[default]
    Name,
    LargestFirst,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectTarget {
    pub path: PathBuf,
    pub size: u64,
}

/// Regular files directly inside `dir` whose path or file name matches `glob`.
///
/// `LargestFirst` breaks ties by path and keeps [`DEFAULT_SIZE_LIMIT`] files
/// unless `limit` says otherwise.
pub fn inspect_targets(
    dir: &Path,
    glob: Option<&str>,
    order: InspectOrder,
    limit: Option<usize>,
) -> Result<Vec<InspectTarget>> {
    let pattern = glob
        .map(Pattern::new)
        .transpose()
        .context("invalid glob pattern")?;

    let mut targets = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !pattern.as_ref().map_or(true, |p| glob_matches(p, &path)) {
            continue;
        }
        let size = entry.metadata()?.len();
        targets.push(InspectTarget { path, size });
    }

    let limit = match order {
        InspectOrder::Name => {
            targets.sort_by(|a, b| a.path.cmp(&b.path));
            limit
        }
        InspectOrder::LargestFirst => {
            targets.sort_by(|a, b| (Reverse(a.size), &a.path).cmp(&(Reverse(b.size), &b.path)));
            Some(limit.unwrap_or(DEFAULT_SIZE_LIMIT))
        }
    };
    if let Some(limit) = limit {
        targets.truncate(limit);
    }
    Ok(targets)
}

fn glob_matches(pattern: &Pattern, path: &Path) -> bool {
    pattern.matches_path(path)
        || path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name))
}
