use super::Texture3d;
use anyhow::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sidecar JSON descriptor for a raw RGBA volume file:
/// `{ "name": ..., "width": ..., "height": ..., "depth": ..., "data": "volume.rgba" }`
/// The data path is resolved relative to the manifest location.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VolumeManifest {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub data: String,
}
impl VolumeManifest {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Loads the manifest at `path` and the raw volume data it points to.
    pub fn load_volume(path: &Path) -> Result<Texture3d, Error> {
        let manifest = Self::from_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let data_path = base_dir.join(&manifest.data);
        let data = std::fs::read(&data_path)
            .with_context(|| format!("Failed to read volume data {}", data_path.display()))?;
        Texture3d::from_rgba(manifest.width, manifest.height, manifest.depth, data)
    }
}
