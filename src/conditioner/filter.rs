//! One-pole exponential smoother for cursor jitter.
//!
//! `smoothed = prev + (raw - prev) / factor`. The first sample after a
//! reset passes through untouched so re-acquiring the hand has no lag.

/// Single-axis smoother. `prev` is `None` until the first sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpSmoother {
    factor: f32,
    prev: Option<f32>,
}

impl ExpSmoother {
    pub fn new(factor: f32) -> Self {
        Self { factor, prev: None }
    }

    pub fn filter(&mut self, raw: f32) -> f32 {
        let next = match self.prev {
            None => raw,
            Some(prev) => prev + (raw - prev) / self.factor,
        };
        // Feed back the smoothed value, not the raw one, so smoothing compounds.
        self.prev = Some(next);
        next
    }

    pub fn value(&self) -> Option<f32> {
        self.prev
    }

    pub fn reset(&mut self) {
        self.prev = None;
    }
}

/// Pair of smoothers for a 2D pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpSmoother2D {
    pub x: ExpSmoother,
    pub y: ExpSmoother,
}

impl ExpSmoother2D {
    pub fn new(factor: f32) -> Self {
        Self {
            x: ExpSmoother::new(factor),
            y: ExpSmoother::new(factor),
        }
    }

    pub fn filter(&mut self, pos: (f32, f32)) -> (f32, f32) {
        (self.x.filter(pos.0), self.y.filter(pos.1))
    }

    pub fn value(&self) -> Option<(f32, f32)> {
        match (self.x.value(), self.y.value()) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
