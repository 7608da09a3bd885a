//! Signal conditioning: pointer smoothing, screen mapping, gesture
//! geometry and scroll derivation.

pub mod filter;
pub mod mapping;
pub mod predicates;

use self::filter::ExpSmoother2D;
pub use self::mapping::ScreenPoint;
use crate::config::{ActiveRegion, Config, DisplayParams};
use crate::consts::SCROLL_SCALE;
use crate::landmarks::Landmark;
use tracing::debug;

/// Owns the per-hand filter state (smoothed pointer and scroll baseline).
/// One instance per tracked hand; not meant to be shared across threads.
#[derive(Debug, Clone)]
pub struct SignalConditioner {
    smoother: ExpSmoother2D,
    scroll_reference: Option<f32>,

    region: ActiveRegion,
    display: DisplayParams,
    click_threshold: f32,
    scroll_sensitivity: f32,
}

impl SignalConditioner {
    pub fn new(config: &Config) -> Self {
        Self {
            smoother: ExpSmoother2D::new(config.filter.smoothing_factor),
            scroll_reference: None,
            region: config.region,
            display: config.display.clone(),
            click_threshold: config.gestures.click_threshold,
            scroll_sensitivity: config.gestures.scroll_sensitivity,
        }
    }

    pub fn smooth(&mut self, raw_x: f32, raw_y: f32) -> (f32, f32) {
        self.smoother.filter((raw_x, raw_y))
    }

    pub fn map_to_screen(&self, norm_x: f32, norm_y: f32) -> ScreenPoint {
        mapping::map_to_screen(
            norm_x,
            norm_y,
            &self.region,
            self.display.screen_width,
            self.display.screen_height,
        )
    }

    pub fn is_click(&self, thumb_tip: Landmark, other_tip: Landmark) -> bool {
        predicates::is_click(thumb_tip, other_tip, self.click_threshold)
    }

    /// Inter-frame scroll amount from wrist height. The first call after a
    /// reset only records the baseline and returns 0.
    pub fn calculate_scroll_delta(&mut self, current_y: f32) -> i32 {
        let Some(reference) = self.scroll_reference.replace(current_y) else {
            debug!("Scroll baseline set at y={:.4}", current_y);
            return 0;
        };
        ((current_y - reference) * self.scroll_sensitivity * SCROLL_SCALE) as i32
    }

    pub fn is_in_failsafe_region(&self, point: ScreenPoint) -> bool {
        mapping::is_in_failsafe_region(point, &self.display)
    }

    pub fn reset_smoothing(&mut self) {
        self.smoother.reset();
    }

    pub fn reset_scroll_reference(&mut self) {
        self.scroll_reference = None;
    }

    /// Hand lost: forget everything.
    pub fn reset(&mut self) {
        self.reset_smoothing();
        self.reset_scroll_reference();
    }

    pub fn filter_state(&self) -> Option<(f32, f32)> {
        self.smoother.value()
    }

    pub fn scroll_reference(&self) -> Option<f32> {
        self.scroll_reference
    }

    pub fn region(&self) -> &ActiveRegion {
        &self.region
    }

    pub fn display(&self) -> &DisplayParams {
        &self.display
    }
}
