//! Timing and edge helpers that keep discrete actions from repeating.

/// Minimum spacing between two fires of the same action.
/// Starts unarmed, so the first fire is never blocked.
#[derive(Debug, Clone, PartialEq)]
pub struct DebounceTimer {
    interval: f64,
    last_fired: Option<f64>,
}

impl DebounceTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// Strictly more than `interval` must have passed since the last fire.
    pub fn ready(&self, now: f64) -> bool {
        match self.last_fired {
            None => true,
            Some(t) => now - t > self.interval,
        }
    }

    pub fn mark(&mut self, now: f64) {
        self.last_fired = Some(now);
    }
}

/// Rising-edge detector over a boolean predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTrigger {
    prev: bool,
}

impl EdgeTrigger {
    /// Stores `current` and reports whether it is a false -> true transition.
    pub fn update(&mut self, current: bool) -> bool {
        let rising = current && !self.prev;
        self.prev = current;
        rising
    }

    pub fn is_high(&self) -> bool {
        self.prev
    }

    pub fn reset(&mut self) {
        self.prev = false;
    }
}
