//! Display-only feed for a HUD. Nothing here flows back into the arbiter.

use crate::arbiter::{Action, ClickButton, FrameOutcome, Mode};
use crate::conditioner::ScreenPoint;
use crate::config::{ActiveRegion, DisplayParams};
use crate::consts::{CLICK_INDICATOR_SECS, FPS_SAMPLE_SIZE, LANDMARK_COUNT};
use crate::landmarks::{Landmark, LandmarkSample};
use serde::Serialize;
use std::collections::VecDeque;

/// Rolling frames-per-second estimate over the last `sample_size` intervals.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    intervals: VecDeque<f64>,
    sample_size: usize,
    last_time: Option<f64>,
}

impl FpsCounter {
    pub fn new(sample_size: usize) -> Self {
        Self {
            intervals: VecDeque::with_capacity(sample_size),
            sample_size: sample_size.max(1),
            last_time: None,
        }
    }

    pub fn tick(&mut self, now: f64) -> f64 {
        if let Some(last) = self.last_time {
            let delta = now - last;
            if delta > 0.0 {
                self.intervals.push_back(delta);
                if self.intervals.len() > self.sample_size {
                    self.intervals.pop_front();
                }
            }
        }
        self.last_time = Some(now);
        self.fps()
    }

    pub fn fps(&self) -> f64 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        let avg = self.intervals.iter().sum::<f64>() / self.intervals.len() as f64;
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FPS_SAMPLE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClickIndicator {
    pub button: ClickButton,
    pub at: ScreenPoint,
    pub since: f64,
}

/// What a HUD draws for one frame. Pixel positions ending in `_px` are in
/// camera-frame pixels; `cursor` is in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub mode: Mode,
    /// Active region as `(left, top, right, bottom)`.
    pub active_region_px: (u32, u32, u32, u32),
    pub skeleton_px: Option<[(i32, i32); LANDMARK_COUNT]>,
    pub cursor: Option<ScreenPoint>,
    pub click: Option<ClickIndicator>,
    pub scroll_delta: i32,
    pub fps: f64,
    pub failsafe: bool,
}

#[derive(Debug, Clone)]
pub struct Overlay {
    fps: FpsCounter,
    indicator: Option<ClickIndicator>,
    display: DisplayParams,
    active_region_px: (u32, u32, u32, u32),
}

impl Overlay {
    pub fn new(region: &ActiveRegion, display: &DisplayParams) -> Self {
        Self {
            fps: FpsCounter::default(),
            indicator: None,
            display: display.clone(),
            active_region_px: region.frame_rect(display.frame_width, display.frame_height),
        }
    }

    pub fn update(
        &mut self,
        outcome: &FrameOutcome,
        hand: Option<&LandmarkSample>,
        now: f64,
    ) -> OverlayFrame {
        let fps = self.fps.tick(now);

        if let (Some(Action::Click { button }), Some(at)) = (outcome.action, outcome.cursor) {
            self.indicator = Some(ClickIndicator {
                button,
                at,
                since: now,
            });
        }
        if matches!(self.indicator, Some(ind) if now - ind.since > CLICK_INDICATOR_SECS) {
            self.indicator = None;
        }

        let display = &self.display;
        let skeleton_px = hand.map(|h| h.points().map(|lm| landmark_to_frame_px(lm, display)));

        OverlayFrame {
            mode: outcome.mode,
            active_region_px: self.active_region_px,
            skeleton_px,
            cursor: outcome.cursor,
            click: self.indicator,
            scroll_delta: outcome.scroll_delta,
            fps,
            failsafe: outcome.failsafe,
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps.fps()
    }
}

/// Landmark position in camera-frame pixels, for drawing the skeleton.
pub fn landmark_to_frame_px(lm: Landmark, display: &DisplayParams) -> (i32, i32) {
    (
        (lm.x * display.frame_width as f32) as i32,
        (lm.y * display.frame_height as f32) as i32,
    )
}
