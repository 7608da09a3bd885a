//! Gesture arbitration: the per-frame mode state machine.
//!
//! Each call to [`GestureArbiter::process`] takes the current frame's
//! sample (or `None` when no hand is visible) and a monotonic timestamp in
//! seconds, and returns the frame's [`FrameOutcome`].

pub mod action;
pub mod debounce;
pub mod mode;

pub use self::action::{Action, ActionSink, ClickButton, FrameOutcome, RecordingSink, SinkEvent};
use self::debounce::{DebounceTimer, EdgeTrigger};
pub use self::mode::Mode;
use crate::conditioner::predicates::is_fist;
use crate::conditioner::SignalConditioner;
use crate::config::Config;
use crate::error::KinResult;
use crate::landmarks::{Finger, LandmarkSample};
use tracing::{debug, info, warn};

/// Edge detector plus debounce timer for one click kind.
#[derive(Debug, Clone)]
struct ClickTrigger {
    edge: EdgeTrigger,
    timer: DebounceTimer,
}

impl ClickTrigger {
    fn new(interval: f64) -> Self {
        Self {
            edge: EdgeTrigger::default(),
            timer: DebounceTimer::new(interval),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GestureArbiter {
    conditioner: SignalConditioner,
    mode: Mode,

    left: ClickTrigger,
    right: ClickTrigger,
    scroll_timer: DebounceTimer,
}

impl GestureArbiter {
    pub fn new(config: &Config) -> KinResult<Self> {
        config.validate()?;
        Ok(Self {
            conditioner: SignalConditioner::new(config),
            mode: Mode::Idle,
            left: ClickTrigger::new(config.timing.click_debounce_secs),
            right: ClickTrigger::new(config.timing.click_debounce_secs),
            scroll_timer: DebounceTimer::new(config.timing.scroll_debounce_secs),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn conditioner(&self) -> &SignalConditioner {
        &self.conditioner
    }

    /// Whether each click predicate was high on the last evaluated frame.
    pub fn click_edges(&self) -> (bool, bool) {
        (self.left.edge.is_high(), self.right.edge.is_high())
    }

    pub fn process(&mut self, sample: Option<&LandmarkSample>, now: f64) -> FrameOutcome {
        if self.mode.is_terminal() {
            warn!("Frame at t={:.3} ignored: fail-safe already triggered", now);
            return FrameOutcome::exit();
        }

        let outcome = match sample {
            None => self.on_hand_lost(),
            Some(s) if is_fist(s) => self.on_fist(s, now),
            Some(s) => self.on_open_hand(s, now),
        };

        if outcome.mode != self.mode {
            info!("Mode {} -> {}", self.mode, outcome.mode);
            self.mode = outcome.mode;
        }
        outcome
    }

    fn on_hand_lost(&mut self) -> FrameOutcome {
        self.conditioner.reset();
        self.left.edge.reset();
        self.right.edge.reset();
        FrameOutcome::idle()
    }

    fn on_fist(&mut self, sample: &LandmarkSample, now: f64) -> FrameOutcome {
        if self.mode != Mode::Scroll {
            self.conditioner.reset_scroll_reference();
        }

        // The pointer filter keeps tracking through the fist so the cursor
        // does not jump back to a stale position when the hand reopens.
        let tip = sample.fingertip(Finger::Index);
        self.conditioner.smooth(tip.x, tip.y);

        // Click edges stay frozen here so a pinch held across the fist
        // does not re-trigger on the next open-hand frame.
        let delta = self.conditioner.calculate_scroll_delta(sample.wrist().y);

        let mut outcome = FrameOutcome {
            mode: Mode::Scroll,
            scroll_delta: delta,
            ..FrameOutcome::default()
        };

        if delta != 0 && self.scroll_timer.ready(now) {
            self.scroll_timer.mark(now);
            debug!("Scroll tick: {}", delta);
            outcome.action = Some(Action::Scroll { delta });
        }
        outcome
    }

    fn on_open_hand(&mut self, sample: &LandmarkSample, now: f64) -> FrameOutcome {
        if self.mode == Mode::Scroll {
            self.conditioner.reset_scroll_reference();
        }

        let tip = sample.fingertip(Finger::Index);
        let (sx, sy) = self.conditioner.smooth(tip.x, tip.y);
        let point = self.conditioner.map_to_screen(sx, sy);

        if self.conditioner.is_in_failsafe_region(point) {
            warn!("Fail-safe region entered at ({}, {})", point.x, point.y);
            return FrameOutcome::exit();
        }

        let thumb = sample.thumb_tip();
        let left_pinch = self.conditioner.is_click(thumb, tip);
        let right_pinch = self
            .conditioner
            .is_click(thumb, sample.fingertip(Finger::Middle));

        // Both edges update every frame, fired or not.
        let left_rising = self.left.edge.update(left_pinch);
        let right_rising = self.right.edge.update(right_pinch);

        let action = if left_rising && self.left.timer.ready(now) {
            self.left.timer.mark(now);
            Some(ClickButton::Left)
        } else if right_rising && self.right.timer.ready(now) {
            self.right.timer.mark(now);
            Some(ClickButton::Right)
        } else {
            None
        };

        if let Some(button) = action {
            debug!("Click {} at ({}, {})", button, point.x, point.y);
        }

        FrameOutcome {
            mode: Mode::Active,
            cursor: Some(point),
            action: action.map(|button| Action::Click { button }),
            scroll_delta: 0,
            failsafe: false,
        }
    }
}
