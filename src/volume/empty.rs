use super::VolumeSource;
use egui::Color32;

pub struct EmptyVolume {}
impl VolumeSource for EmptyVolume {
    fn width(&self) -> usize {
        0
    }
    fn height(&self) -> usize {
        0
    }
    fn depth(&self) -> usize {
        0
    }
    fn get(&self, _x: usize, _y: usize, _z: usize) -> Color32 {
        Color32::TRANSPARENT
    }
}
