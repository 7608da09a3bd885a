use crate::error::{KinResult, KineticError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub filter: FilterParams,
    #[command(flatten)]
    pub region: ActiveRegion,
    #[command(flatten)]
    pub gestures: GestureThresholds,
    #[command(flatten)]
    pub timing: DebounceParams,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterParams {
    // Higher = smoother but laggier. Usable range is roughly 4..10.
    #[arg(long, default_value_t = 6.0)]
    pub smoothing_factor: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            smoothing_factor: 6.0,
        }
    }
}

/// Sub-rectangle of the camera frame (normalized) that is stretched over
/// the whole screen.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActiveRegion {
    #[arg(long = "region-x-start", default_value_t = 0.2)]
    pub x_start: f32,
    #[arg(long = "region-x-end", default_value_t = 0.8)]
    pub x_end: f32,
    #[arg(long = "region-y-start", default_value_t = 0.2)]
    pub y_start: f32,
    #[arg(long = "region-y-end", default_value_t = 0.8)]
    pub y_end: f32,
}

impl Default for ActiveRegion {
    fn default() -> Self {
        Self {
            x_start: 0.2,
            x_end: 0.8,
            y_start: 0.2,
            y_end: 0.8,
        }
    }
}

impl ActiveRegion {
    pub fn width(&self) -> f32 {
        self.x_end - self.x_start
    }

    pub fn height(&self) -> f32 {
        self.y_end - self.y_start
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.x_start + self.x_end) / 2.0,
            (self.y_start + self.y_end) / 2.0,
        )
    }

    /// Nearest point of the region to `(x, y)`.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(self.x_start, self.x_end),
            y.clamp(self.y_start, self.y_end),
        )
    }

    /// Region bounds in camera-frame pixels: (left, top, right, bottom).
    pub fn frame_rect(&self, frame_width: u32, frame_height: u32) -> (u32, u32, u32, u32) {
        let fw = frame_width as f32;
        let fh = frame_height as f32;
        (
            (self.x_start * fw) as u32,
            (self.y_start * fh) as u32,
            (self.x_end * fw) as u32,
            (self.y_end * fh) as u32,
        )
    }

    pub fn validate(&self) -> KinResult<()> {
        let bounds = [
            ("region_x_start", self.x_start),
            ("region_x_end", self.x_end),
            ("region_y_start", self.y_start),
            ("region_y_end", self.y_end),
        ];
        for (name, v) in bounds {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(KineticError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, v
                )));
            }
        }
        if self.x_start >= self.x_end {
            return Err(KineticError::Config(format!(
                "region x_start ({}) must be below x_end ({})",
                self.x_start, self.x_end
            )));
        }
        if self.y_start >= self.y_end {
            return Err(KineticError::Config(format!(
                "region y_start ({}) must be below y_end ({})",
                self.y_start, self.y_end
            )));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureThresholds {
    // Normalized thumb-to-fingertip distance that counts as a pinch.
    #[arg(long, default_value_t = 0.05)]
    pub click_threshold: f32,
    #[arg(long, default_value_t = 10.0)]
    pub scroll_sensitivity: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            click_threshold: 0.05,
            scroll_sensitivity: 10.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebounceParams {
    #[arg(long, default_value_t = 0.3)]
    pub click_debounce_secs: f64,
    #[arg(long, default_value_t = 0.05)]
    pub scroll_debounce_secs: f64,
}

impl Default for DebounceParams {
    fn default() -> Self {
        Self {
            click_debounce_secs: 0.3,
            scroll_debounce_secs: 0.05,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayParams {
    #[arg(long, default_value_t = 1920)]
    pub screen_width: u32,
    #[arg(long, default_value_t = 1080)]
    pub screen_height: u32,
    #[arg(long, default_value_t = 640)]
    pub frame_width: u32,
    #[arg(long, default_value_t = 480)]
    pub frame_height: u32,

    // Emergency-exit rectangle, anchored at the screen's top-left corner.
    #[arg(long, default_value_t = 100)]
    pub failsafe_width: u32,
    #[arg(long, default_value_t = 100)]
    pub failsafe_height: u32,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            screen_width: 1920,
            screen_height: 1080,
            frame_width: 640,
            frame_height: 480,
            failsafe_width: 100,
            failsafe_height: 100,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KinResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies onto `self` only the values the user typed on the command line,
    /// so a config file keeps priority over clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field;
                }
            };
        }

        update_if_present!(filter.smoothing_factor);

        update_if_present!(region.x_start);
        update_if_present!(region.x_end);
        update_if_present!(region.y_start);
        update_if_present!(region.y_end);

        update_if_present!(gestures.click_threshold);
        update_if_present!(gestures.scroll_sensitivity);

        update_if_present!(timing.click_debounce_secs);
        update_if_present!(timing.scroll_debounce_secs);

        update_if_present!(display.screen_width);
        update_if_present!(display.screen_height);
        update_if_present!(display.frame_width);
        update_if_present!(display.frame_height);
        update_if_present!(display.failsafe_width);
        update_if_present!(display.failsafe_height);
    }

    pub fn validate(&self) -> KinResult<()> {
        let k = self.filter.smoothing_factor;
        if !k.is_finite() || k <= 1.0 {
            return Err(KineticError::Config(format!(
                "smoothing_factor must be greater than 1, got {}",
                k
            )));
        }

        self.region.validate()?;

        let t = self.gestures.click_threshold;
        if !t.is_finite() || t <= 0.0 {
            return Err(KineticError::Config(format!(
                "click_threshold must be positive, got {}",
                t
            )));
        }
        if !self.gestures.scroll_sensitivity.is_finite() {
            return Err(KineticError::Config(
                "scroll_sensitivity must be finite".to_string(),
            ));
        }

        for (name, secs) in [
            ("click_debounce_secs", self.timing.click_debounce_secs),
            ("scroll_debounce_secs", self.timing.scroll_debounce_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(KineticError::Config(format!(
                    "{} must be non-negative, got {}",
                    name, secs
                )));
            }
        }

        let d = &self.display;
        if d.screen_width == 0 || d.screen_height == 0 {
            return Err(KineticError::Config(format!(
                "screen must be at least 1x1, got {}x{}",
                d.screen_width, d.screen_height
            )));
        }
        Ok(())
    }
}
