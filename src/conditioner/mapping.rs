//! Active-region to screen-pixel mapping.
//!
//! The active region is smaller than the camera frame, so a short hand
//! movement spans the whole screen and the screen edges stay reachable.

use crate::config::{ActiveRegion, DisplayParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: u32,
    pub y: u32,
}

impl ScreenPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Clamp to the region, rescale to [0,1], mirror x, scale to pixels.
/// Pixel values are truncated and kept within `[0, dim - 1]`.
pub fn map_to_screen(
    norm_x: f32,
    norm_y: f32,
    region: &ActiveRegion,
    screen_width: u32,
    screen_height: u32,
) -> ScreenPoint {
    let (cx, cy) = region.clamp(norm_x, norm_y);

    let mapped_x = 1.0 - (cx - region.x_start) / region.width();
    let mapped_y = (cy - region.y_start) / region.height();

    ScreenPoint {
        x: to_pixel(mapped_x, screen_width),
        y: to_pixel(mapped_y, screen_height),
    }
}

fn to_pixel(unit: f32, dim: u32) -> u32 {
    // Float-to-int casts saturate, so a tiny negative rounding error lands on 0.
    let px = (unit * dim as f32) as u32;
    px.min(dim.saturating_sub(1))
}

/// True when the point is inside the top-left emergency-exit rectangle.
pub fn is_in_failsafe_region(point: ScreenPoint, display: &DisplayParams) -> bool {
    point.x < display.failsafe_width && point.y < display.failsafe_height
}
