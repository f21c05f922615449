mod gate;

pub use gate::{ChangeGate, SliceInputs};

use crate::volume::{extract_slice, ChannelMask, SliceImage, VolumeSource};
use emath::Vec2;
use std::sync::Arc;

const MIN_SIZE_FACTOR: f32 = 0.01;
const MAX_SIZE_FACTOR: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct InspectorSettings {
    pub layer: usize,
    pub size_factor: f32,
    pub mask: ChannelMask,
}
impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            layer: 0,
            size_factor: 1.0,
            mask: Default::default(),
        }
    }
}

/// Drives slice extraction for a host that calls in periodically: on every
/// `poll` the current inputs are compared against the last committed snapshot
/// and the cached slice is only rebuilt when they differ. Calls must be
/// serialized; a concurrent host has to put the whole inspector behind one
/// lock so snapshot and slice stay consistent with each other.
#[derive(Default)]
pub struct SliceInspector {
    pub settings: InspectorSettings,
    gate: ChangeGate,
    slice: Option<SliceImage>,
}
impl SliceInspector {
    pub fn new(settings: InspectorSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Recomputes the cached slice if the source, layer, or mask changed since
    /// the last commit. Returns true when a new slice was produced and the
    /// host should redraw. An absent source skips extraction entirely.
    pub fn poll(&mut self, source: Option<&Arc<dyn VolumeSource>>) -> bool {
        let Some(source) = source else {
            return false;
        };

        // the layer index may be stale if the source was swapped for a
        // shallower volume
        self.settings.layer = self.settings.layer.min(source.depth().saturating_sub(1));

        let inputs = SliceInputs::new(source, self.settings.layer, self.settings.mask);
        if !self.gate.should_recompute(&inputs) {
            return false;
        }

        log::debug!(
            "Extracting layer {} of {}x{}x{} volume",
            self.settings.layer,
            source.width(),
            source.height(),
            source.depth()
        );
        self.slice = Some(extract_slice(source.as_ref(), self.settings.layer, &self.settings.mask));
        self.gate.commit(inputs);
        true
    }

    /// The slice produced by the most recent recompute, if any. Stays
    /// available while the source is absent.
    pub fn slice(&self) -> Option<&SliceImage> {
        self.slice.as_ref()
    }

    /// On-demand draw path: runs the same recompute sequence as `poll` and
    /// hands out the current slice.
    pub fn slice_for_display(&mut self, source: Option<&Arc<dyn VolumeSource>>) -> Option<&SliceImage> {
        self.poll(source);
        self.slice.as_ref()
    }

    /// Drawable extent of the current slice within `available_width`.
    pub fn display_size(&self, available_width: f32) -> Option<Vec2> {
        let slice = self.slice.as_ref()?;
        Some(display_size(
            slice.width(),
            slice.height(),
            available_width,
            self.settings.size_factor,
        ))
    }
}

/// Drawable extent for a slice of the given dimensions. The width is clamped
/// to the available width *before* the size factor is applied, so a factor
/// above 1 scales the clamped extent and can still exceed the viewport.
pub fn display_size(width: usize, height: usize, available_width: f32, size_factor: f32) -> Vec2 {
    if width == 0 || height == 0 {
        return Vec2::ZERO;
    }
    let size_factor = size_factor.clamp(MIN_SIZE_FACTOR, MAX_SIZE_FACTOR);
    let aspect_ratio = height as f32 / width as f32;
    let display_width = (width as f32).min(available_width);
    let display_height = display_width * aspect_ratio;
    Vec2::new(display_width * size_factor, display_height * size_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::Texture3d;
    use egui::Color32;

    fn volume(width: usize, height: usize, depth: usize) -> Arc<dyn VolumeSource> {
        Arc::new(Texture3d::filled(width, height, depth, Color32::WHITE))
    }

    #[test]
    fn absent_source_never_redraws() {
        let mut inspector = SliceInspector::default();
        assert!(!inspector.poll(None));
        assert!(inspector.slice().is_none());
    }

    #[test]
    fn recomputes_only_when_inputs_change() {
        let mut inspector = SliceInspector::default();
        let src = volume(4, 4, 3);

        assert!(inspector.poll(Some(&src)));
        assert!(!inspector.poll(Some(&src)));

        inspector.settings.layer = 2;
        assert!(inspector.poll(Some(&src)));
        assert!(!inspector.poll(Some(&src)));

        inspector.settings.mask.g = false;
        assert!(inspector.poll(Some(&src)));

        let other = volume(4, 4, 3);
        assert!(inspector.poll(Some(&other)));
    }

    #[test]
    fn size_factor_alone_does_not_recompute() {
        let mut inspector = SliceInspector::default();
        let src = volume(4, 4, 3);
        assert!(inspector.poll(Some(&src)));

        inspector.settings.size_factor = 3.0;
        assert!(!inspector.poll(Some(&src)));
    }

    #[test]
    fn source_loss_keeps_the_previous_slice() {
        let mut inspector = SliceInspector::default();
        let src = volume(2, 2, 1);
        assert!(inspector.poll(Some(&src)));
        assert!(!inspector.poll(None));
        assert!(inspector.slice().is_some());
    }

    #[test]
    fn layer_is_reclamped_against_the_current_source() {
        let mut inspector = SliceInspector::default();
        inspector.settings.layer = 9;

        let deep = volume(2, 2, 5);
        assert!(inspector.poll(Some(&deep)));
        assert_eq!(inspector.settings.layer, 4);

        let shallow = volume(2, 2, 2);
        assert!(inspector.poll(Some(&shallow)));
        assert_eq!(inspector.settings.layer, 1);
    }

    #[test]
    fn clamped_layer_does_not_count_as_a_change() {
        let mut inspector = SliceInspector::default();
        let src = volume(2, 2, 3);
        inspector.settings.layer = 2;
        assert!(inspector.poll(Some(&src)));

        // clamps back to the committed layer, nothing actually changed
        inspector.settings.layer = 7;
        assert!(!inspector.poll(Some(&src)));
        assert_eq!(inspector.settings.layer, 2);
    }

    #[test]
    fn slice_for_display_computes_on_demand() {
        let mut inspector = SliceInspector::default();
        let src = volume(3, 2, 1);
        let slice = inspector.slice_for_display(Some(&src)).unwrap();
        assert_eq!((slice.width(), slice.height()), (3, 2));
    }

    #[test]
    fn display_width_is_clamped_before_scaling() {
        // 100x50 slice in a 60px viewport at factor 2: the clamped width is
        // scaled, ending up beyond the viewport
        let size = display_size(100, 50, 60.0, 2.0);
        assert_eq!(size, Vec2::new(120.0, 60.0));

        let size = display_size(100, 50, 400.0, 1.0);
        assert_eq!(size, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn degenerate_size_factors_are_clamped() {
        let size = display_size(100, 100, 200.0, 0.0);
        assert_eq!(size, Vec2::new(1.0, 1.0));

        let size = display_size(100, 100, 200.0, 100.0);
        assert_eq!(size, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn empty_slices_have_no_extent() {
        assert_eq!(display_size(0, 10, 100.0, 1.0), Vec2::ZERO);

        let mut inspector = SliceInspector::default();
        assert!(inspector.display_size(100.0).is_none());
        let src = volume(4, 2, 1);
        inspector.poll(Some(&src));
        assert_eq!(inspector.display_size(100.0), Some(Vec2::new(4.0, 2.0)));
    }
}
