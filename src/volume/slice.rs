use super::{ChannelMask, SliceImage, VolumeSource};

/// Extracts the 2D slice at the given depth layer, passing every sample
/// through the channel mask. Callers must clamp `layer` to `source.depth()`
/// beforehand.
pub fn extract_slice(source: &dyn VolumeSource, layer: usize, mask: &ChannelMask) -> SliceImage {
    if source.depth() == 0 {
        return SliceImage::new(0, 0);
    }
    debug_assert!(layer < source.depth());

    let width = source.width();
    let height = source.height();
    let mut image = SliceImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set(x, y, mask.apply(source.get(x, y, layer)));
        }
    }
    image
}
