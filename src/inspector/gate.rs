use crate::volume::{ChannelMask, VolumeSource};
use std::sync::Arc;

/// The input tuple a slice was computed from. The source is captured by
/// identity, not content: two volumes with identical samples still count as
/// different sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceInputs {
    volume_id: usize,
    pub layer: usize,
    pub mask: ChannelMask,
}
impl SliceInputs {
    pub fn new(source: &Arc<dyn VolumeSource>, layer: usize, mask: ChannelMask) -> Self {
        let volume_id = Arc::as_ptr(source) as *const u8 as usize;
        Self {
            volume_id,
            layer,
            mask,
        }
    }
}

/// Tracks the inputs of the last committed slice so recomputation only happens
/// when something actually changed. Starts out uncommitted, which makes the
/// first query always report a recompute.
#[derive(Debug, Default)]
pub struct ChangeGate {
    committed: Option<SliceInputs>,
}
impl ChangeGate {
    /// Pure query, never changes state.
    pub fn should_recompute(&self, current: &SliceInputs) -> bool {
        self.committed.as_ref() != Some(current)
    }

    /// Call only after the slice for `current` has actually been produced.
    pub fn commit(&mut self, current: SliceInputs) {
        self.committed = Some(current);
    }
}
