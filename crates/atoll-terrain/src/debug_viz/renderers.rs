//! Preview renderers for sampled heights and falloff masks.

use super::image::DebugImage;
use crate::falloff::FalloffMask;

/// Render a row-major height grid as a colour-coded elevation map.
///
/// Heights are normalized against the grid's own min/max; a flat grid renders
/// entirely in the lowest band.
pub fn render_heightmap_debug(heights: &[f32], side: u32) -> DebugImage {
    let mut image = DebugImage::new(side, side);
    let (min, max) = heights
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
            (lo.min(h), hi.max(h))
        });
    let range = max - min;

    for (i, &h) in heights.iter().take(side as usize * side as usize).enumerate() {
        let normalized = if range > 0.0 { (h - min) / range } else { 0.0 };
        let x = (i % side as usize) as u32;
        let y = (i / side as usize) as u32;
        image.set_rgb(x, y, height_to_color(normalized));
    }

    image
}

/// Render a falloff mask as greyscale: black at `0`, white at `1`.
pub fn render_falloff_debug(mask: &FalloffMask) -> DebugImage {
    let side = mask.dimension();
    let mut image = DebugImage::new(side, side);
    for y in 0..side {
        for x in 0..side {
            let v = (mask.get(x as i64, y as i64).clamp(0.0, 1.0) * 255.0).round() as u8;
            image.set_rgb(x, y, (v, v, v));
        }
    }
    image
}

/// Map a normalized height `[0, 1]` to an RGB color.
///
/// Color bands: water → beach → lowlands → hills → rock → snow.
pub fn height_to_color(normalized: f32) -> (u8, u8, u8) {
    let n = normalized.clamp(0.0, 1.0);
    if n < 0.05 {
        // Water: flattened by the falloff mask.
        (30, 80, 200)
    } else if n < 0.1 {
        (220, 200, 130)
    } else if n < 0.45 {
        let t = (n - 0.1) / 0.35;
        (
            (30.0 + t * 60.0) as u8,
            (160.0 - t * 30.0) as u8,
            (30.0 + t * 10.0) as u8,
        )
    } else if n < 0.8 {
        let t = (n - 0.45) / 0.35;
        (
            (110.0 + t * 30.0) as u8,
            (110.0 - t * 30.0) as u8,
            (60.0 + t * 20.0) as u8,
        )
    } else {
        let t = ((n - 0.8) / 0.2).min(1.0);
        let base = (180.0 + t * 75.0) as u8;
        (base, base, base)
    }
}
