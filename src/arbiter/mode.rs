use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Interaction mode, recomputed every frame from that frame alone.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// No hand in view.
    #[default]
    Idle,
    /// Open hand: pointer movement and clicks.
    Active,
    /// Fist: vertical wrist motion scrolls, clicks suppressed.
    Scroll,
    /// Fail-safe hit. Terminal.
    Exit,
}

impl Mode {
    pub fn is_terminal(self) -> bool {
        self == Mode::Exit
    }
}
