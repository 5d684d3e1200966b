//! Export settings, read from an optional JSON file and overridden by flags.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use world::{Combine, MaskSelection};

/// Which faces to emit for the solid voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshMode {
    /// Only faces between solid and non-solid voxels.
    #[default]
    Surface,
    /// All six faces of every solid voxel.
    Cubes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub masks: Vec<String>,
    pub combine: Combine,
    pub invert: bool,
    pub scale: f64,
    pub mode: MeshMode,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let selection = MaskSelection::default();
        Self {
            masks: selection.masks,
            combine: selection.combine,
            invert: selection.invert,
            scale: 1.0,
            mode: MeshMode::Surface,
        }
    }
}

impl ExportConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents).context("parse config json")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.masks.is_empty() {
            bail!("config selects no masks");
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            bail!("scale must be a positive number, got {}", self.scale);
        }
        Ok(())
    }

    #[must_use]
    pub fn selection(&self) -> MaskSelection {
        MaskSelection {
            masks: self.masks.clone(),
            combine: self.combine,
            invert: self.invert,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub masks: Vec<String>,
    pub combine: Option<Combine>,
    pub invert: Option<bool>,
    pub scale: Option<f64>,
    pub mode: Option<MeshMode>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn apply(self, mut config: ExportConfig) -> ExportConfig {
        if !self.masks.is_empty() {
            config.masks = self.masks;
        }
        if let Some(combine) = self.combine {
            config.combine = combine;
        }
        if let Some(invert) = self.invert {
            config.invert = invert;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        config
    }
}
