use super::mode::Mode;
use crate::conditioner::ScreenPoint;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClickButton {
    Left,
    Right,
}

/// Discrete action. At most one per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    Click { button: ClickButton },
    /// Positive = wrist moved down the camera frame.
    Scroll { delta: i32 },
}

/// Everything the executor and the overlay need from one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameOutcome {
    pub mode: Mode,
    /// Move target; only set in ACTIVE.
    pub cursor: Option<ScreenPoint>,
    pub action: Option<Action>,
    /// Raw scroll delta for display, even when the tick was debounced.
    pub scroll_delta: i32,
    pub failsafe: bool,
}

impl FrameOutcome {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn exit() -> Self {
        Self {
            mode: Mode::Exit,
            failsafe: true,
            ..Self::default()
        }
    }

    pub fn is_exit(&self) -> bool {
        self.mode.is_terminal()
    }

    /// Replays this outcome against an executor: move first, then the
    /// discrete action. Exit frames dispatch nothing.
    pub fn dispatch<S: ActionSink + ?Sized>(&self, sink: &mut S) {
        if self.is_exit() {
            return;
        }
        if let Some(point) = self.cursor {
            sink.move_to(point);
        }
        match self.action {
            Some(Action::Click { button }) => sink.click(button),
            Some(Action::Scroll { delta }) => sink.scroll(delta),
            None => {}
        }
    }
}

/// The host-side pointing device.
pub trait ActionSink {
    fn move_to(&mut self, point: ScreenPoint);
    fn click(&mut self, button: ClickButton);
    fn scroll(&mut self, delta: i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkEvent {
    MoveTo(ScreenPoint),
    Click(ClickButton),
    Scroll(i32),
}

/// Sink that just remembers what it was asked to do.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn clicks(&self) -> Vec<ClickButton> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Click(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn scrolls(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Scroll(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn last_position(&self) -> Option<ScreenPoint> {
        self.events.iter().rev().find_map(|e| match e {
            SinkEvent::MoveTo(p) => Some(*p),
            _ => None,
        })
    }
}

impl ActionSink for RecordingSink {
    fn move_to(&mut self, point: ScreenPoint) {
        self.events.push(SinkEvent::MoveTo(point));
    }

    fn click(&mut self, button: ClickButton) {
        self.events.push(SinkEvent::Click(button));
    }

    fn scroll(&mut self, delta: i32) {
        self.events.push(SinkEvent::Scroll(delta));
    }
}
