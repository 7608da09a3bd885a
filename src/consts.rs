/// Number of joints in a standard hand skeleton (wrist + 5 fingers x 4).
pub const LANDMARK_COUNT: usize = 21;

/// A finger counts as curled when tip->MCP is shorter than
/// `CURL_RATIO` times PIP->MCP.
pub const CURL_RATIO: f32 = 1.2;

/// Converts normalized wrist travel into scroll units.
pub const SCROLL_SCALE: f32 = 100.0;

/// Normalized coordinates outside this band are rejected as garbage.
/// The landmark model extrapolates slightly past the frame edge, so the
/// band is wider than [0, 1].
pub const COORD_MIN: f32 = -0.5;
pub const COORD_MAX: f32 = 1.5;

/// How long the overlay keeps showing the last click (seconds).
pub const CLICK_INDICATOR_SECS: f64 = 0.3;

/// Number of inter-frame intervals averaged by the FPS counter.
pub const FPS_SAMPLE_SIZE: usize = 30;
