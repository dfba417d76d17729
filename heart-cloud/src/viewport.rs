use constants::render_settings::MAX_PIXEL_RATIO;

use crate::error::{HeartCloudError, Result};

/// Projection aspect ratio for a viewport of `width` x `height`.
pub fn aspect_ratio(width: f32, height: f32) -> Result<f32> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(HeartCloudError::invalid(format!(
            "viewport must have a positive size, got {width} x {height}"
        )));
    }
    Ok(width / height)
}

/// Device pixel ratio clamped to `MAX_PIXEL_RATIO`; non-positive input falls back to 1.
pub fn pixel_ratio(device_pixel_ratio: f32) -> f32 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}
