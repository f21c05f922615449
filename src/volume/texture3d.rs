use super::VolumeSource;
use anyhow::{bail, Error, Result};
use egui::Color32;

/// In-memory volume over a flat RGBA buffer, row-major within a layer, layers
/// stored back to back.
pub struct Texture3d {
    width: usize,
    height: usize,
    depth: usize,
    data: Vec<u8>,
}
impl Texture3d {
    pub fn from_rgba(width: usize, height: usize, depth: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width * height * depth * 4;
        if data.len() != expected {
            bail!(
                "Expected {} bytes for a {}x{}x{} RGBA volume but got {}",
                expected,
                width,
                height,
                depth,
                data.len()
            );
        }
        Ok(Self {
            width,
            height,
            depth,
            data,
        })
    }

    pub fn filled(width: usize, height: usize, depth: usize, color: Color32) -> Self {
        let data = color.to_array().repeat(width * height * depth);
        Self {
            width,
            height,
            depth,
            data,
        }
    }

    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        ((z * self.height + y) * self.width + x) * 4
    }
}
impl VolumeSource for Texture3d {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn get(&self, x: usize, y: usize, z: usize) -> Color32 {
        if x >= self.width || y >= self.height || z >= self.depth {
            //println!("out of bounds: {} {} {}", x, y, z);
            return Color32::TRANSPARENT;
        }
        let off = self.offset(x, y, z);
        Color32::from_rgba_premultiplied(self.data[off], self.data[off + 1], self.data[off + 2], self.data[off + 3])
    }
}
