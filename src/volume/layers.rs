use super::VolumeSource;
use anyhow::{bail, Context, Error, Result};
use egui::Color32;
use std::path::Path;

/// Volume assembled from a directory of numbered 2D layer images, e.g.
/// `00000.png`, `00001.png`, ... Layers are stacked along z in numeric order;
/// all layers must share the same dimensions.
pub struct LayerStackVolume {
    width: usize,
    height: usize,
    layers: Vec<Vec<u8>>,
}
impl LayerStackVolume {
    pub fn from_data_dir(data_dir: &Path) -> Result<Self, Error> {
        let pattern = regex::Regex::new(r"^(\d+)\.(png|tiff?)$").unwrap();

        let mut numbered = Vec::new();
        for entry in std::fs::read_dir(data_dir)
            .with_context(|| format!("Failed to read layer directory {}", data_dir.display()))?
        {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else { continue };
            if let Some(captures) = pattern.captures(file_name) {
                let z = captures.get(1).unwrap().as_str().parse::<usize>()?;
                numbered.push((z, entry.path()));
            }
        }
        if numbered.is_empty() {
            bail!("No numbered layer images found in {}", data_dir.display());
        }
        numbered.sort_by_key(|(z, _)| *z);

        let mut width = 0;
        let mut height = 0;
        let mut layers = Vec::with_capacity(numbered.len());
        for (_, path) in &numbered {
            let layer = image::open(path)
                .with_context(|| format!("Failed to decode layer {}", path.display()))?
                .to_rgba8();
            if layers.is_empty() {
                width = layer.width() as usize;
                height = layer.height() as usize;
            } else if (layer.width() as usize, layer.height() as usize) != (width, height) {
                bail!(
                    "Layer {} is {}x{} but earlier layers are {}x{}",
                    path.display(),
                    layer.width(),
                    layer.height(),
                    width,
                    height
                );
            }
            layers.push(layer.into_raw());
        }

        log::info!(
            "Loaded {} layers ({}x{}) from {}",
            layers.len(),
            width,
            height,
            data_dir.display()
        );

        Ok(Self {
            width,
            height,
            layers,
        })
    }
}
impl VolumeSource for LayerStackVolume {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn depth(&self) -> usize {
        self.layers.len()
    }
    fn get(&self, x: usize, y: usize, z: usize) -> Color32 {
        if x >= self.width || y >= self.height || z >= self.layers.len() {
            return Color32::TRANSPARENT;
        }
        let layer = &self.layers[z];
        let off = (y * self.width + x) * 4;
        Color32::from_rgba_premultiplied(layer[off], layer[off + 1], layer[off + 2], layer[off + 3])
    }
}
