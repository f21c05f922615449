mod empty;
mod layers;
mod manifest;
mod slice;
mod texture3d;

use egui::{Color32, ColorImage};
pub use empty::EmptyVolume;
pub use layers::LayerStackVolume;
pub use manifest::VolumeManifest;
pub use slice::extract_slice;
pub use texture3d::Texture3d;

/// Per-channel visibility toggles applied while extracting a slice. A disabled
/// channel is written as zero in the output, the others pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChannelMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}
impl ChannelMask {
    pub fn is_passthrough(&self) -> bool {
        self.r && self.g && self.b && self.a
    }
    pub fn apply(&self, color: Color32) -> Color32 {
        if self.is_passthrough() {
            return color;
        }
        Color32::from_rgba_premultiplied(
            if self.r { color.r() } else { 0 },
            if self.g { color.g() } else { 0 },
            if self.b { color.b() } else { 0 },
            if self.a { color.a() } else { 0 },
        )
    }
}
impl Default for ChannelMask {
    fn default() -> Self {
        Self {
            r: true,
            g: true,
            b: true,
            a: true,
        }
    }
}

/// Read-only access to a 3D grid of RGBA samples. Implementations must not
/// change dimensions or content while a caller holds a borrow for one read.
pub trait VolumeSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn depth(&self) -> usize;
    fn get(&self, x: usize, y: usize, z: usize) -> Color32;
}

pub struct SliceImage {
    width: usize,
    height: usize,
    pub data: Vec<Color32>,
}
impl SliceImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Color32::TRANSPARENT; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: usize, y: usize, value: Color32) {
        self.data[y * self.width + x] = value;
    }
    pub fn get(&self, x: usize, y: usize) -> Color32 {
        self.data[y * self.width + x]
    }
}
impl From<SliceImage> for ColorImage {
    fn from(value: SliceImage) -> Self {
        ColorImage {
            size: [value.width, value.height],
            source_size: egui::Vec2::new(value.width as f32, value.height as f32),
            pixels: value.data,
        }
    }
}
