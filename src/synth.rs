//! Synthetic hand generator for demos, tests and benchmarks.
//!
//! Poses are built around the wrist position in normalized camera
//! coordinates (y grows downward). Fingers point up the frame with enough
//! spread that each pose triggers exactly one gesture predicate.

use crate::consts::LANDMARK_COUNT;
use crate::error::{KinResult, KineticError};
use crate::landmarks::*;
use crate::replay::RecordedFrame;
use strum_macros::{Display, EnumIter};

/// Horizontal offset of each finger's column from the wrist.
const FINGER_OFFSETS: [(Finger, f32); 4] = [
    (Finger::Index, -0.08),
    (Finger::Middle, -0.02),
    (Finger::Ring, 0.03),
    (Finger::Pinky, 0.08),
];

/// Heights above the wrist for MCP, PIP, DIP and TIP.
const EXTENDED_RISE: [f32; 4] = [0.10, 0.15, 0.18, 0.21];
const CURLED_RISE: [f32; 4] = [0.10, 0.15, 0.13, 0.11];

/// Offset of a pinching thumb tip from the fingertip it touches. The x
/// component is mirrored away from the neighbouring fingertip.
const PINCH_GAP: (f32, f32) = (0.01, 0.01);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum HandPose {
    Open,
    PinchLeft,
    PinchRight,
    Fist,
}

/// Index fingertip position for an open or pinching hand with its wrist at `(wx, wy)`.
pub fn index_tip_for_wrist(wx: f32, wy: f32) -> (f32, f32) {
    (wx + FINGER_OFFSETS[0].1, wy - EXTENDED_RISE[3])
}

/// Wrist position that puts the index fingertip of an open hand at `(tx, ty)`.
pub fn wrist_for_index_tip(tx: f32, ty: f32) -> (f32, f32) {
    (tx - FINGER_OFFSETS[0].1, ty + EXTENDED_RISE[3])
}

impl HandPose {
    pub fn landmarks(self, wx: f32, wy: f32) -> [Landmark; LANDMARK_COUNT] {
        let mut pts = [Landmark::default(); LANDMARK_COUNT];
        pts[WRIST] = Landmark::new(wx, wy, 0.0);

        for (finger, dx) in FINGER_OFFSETS {
            let rise = if self == HandPose::Fist {
                CURLED_RISE
            } else {
                EXTENDED_RISE
            };
            let (tip, pip, mcp) = finger.joints();
            let dip = pip + 1;
            for (idx, r) in [mcp, pip, dip, tip].into_iter().zip(rise) {
                pts[idx] = Landmark::new(wx + dx, wy - r, 0.0);
            }
        }

        pts[THUMB_CMC] = Landmark::new(wx - 0.05, wy - 0.03, 0.0);
        pts[THUMB_MCP] = Landmark::new(wx - 0.08, wy - 0.06, 0.0);
        pts[THUMB_IP] = Landmark::new(wx - 0.10, wy - 0.09, 0.0);
        pts[THUMB_TIP] = match self {
            HandPose::Open => Landmark::new(wx - 0.12, wy - 0.10, 0.0),
            HandPose::PinchLeft => touching(pts[INDEX_TIP], -1.0),
            HandPose::PinchRight => touching(pts[MIDDLE_TIP], 1.0),
            HandPose::Fist => Landmark::new(wx - 0.02, wy - 0.04, 0.0),
        };
        pts
    }
}

fn touching(tip: Landmark, side: f32) -> Landmark {
    Landmark::new(tip.x + side * PINCH_GAP.0, tip.y + PINCH_GAP.1, 0.0)
}

/// A stretch of frames with one pose, the wrist moving linearly from
/// `from` to `to`. `pose: None` means no hand in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub pose: Option<HandPose>,
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub frames: usize,
}

impl Segment {
    pub fn hold(pose: HandPose, at: (f32, f32), frames: usize) -> Self {
        Self {
            pose: Some(pose),
            from: at,
            to: at,
            frames,
        }
    }

    pub fn travel(pose: HandPose, from: (f32, f32), to: (f32, f32), frames: usize) -> Self {
        Self {
            pose: Some(pose),
            from,
            to,
            frames,
        }
    }

    pub fn absent(frames: usize) -> Self {
        Self {
            pose: None,
            from: (0.0, 0.0),
            to: (0.0, 0.0),
            frames,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Script {
    pub fps: f64,
    /// Uniform noise amplitude added to every coordinate.
    pub jitter: f32,
    pub seed: u64,
    pub handedness: Handedness,
    pub segments: Vec<Segment>,
}

impl Script {
    pub fn new(fps: f64, jitter: f32, seed: u64) -> Self {
        Self {
            fps,
            jitter,
            seed,
            handedness: Handedness::Right,
            segments: Vec::new(),
        }
    }

    pub fn then(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Move, left click, right click, scroll down, lose the hand, then
    /// drift into the fail-safe corner.
    pub fn demo(fps: f64, jitter: f32, seed: u64) -> Self {
        let center = wrist_for_index_tip(0.5, 0.5);
        let right_side = wrist_for_index_tip(0.35, 0.45);
        let corner = wrist_for_index_tip(0.85, 0.12);

        Script::new(fps, jitter, seed)
            .then(Segment::travel(HandPose::Open, center, right_side, 30))
            .then(Segment::hold(HandPose::PinchLeft, right_side, 5))
            .then(Segment::hold(HandPose::Open, right_side, 15))
            .then(Segment::hold(HandPose::PinchRight, right_side, 5))
            .then(Segment::hold(HandPose::Open, right_side, 15))
            .then(Segment::travel(
                HandPose::Fist,
                (0.5, 0.5),
                (0.5, 0.7),
                30,
            ))
            .then(Segment::absent(10))
            .then(Segment::travel(HandPose::Open, center, corner, 60))
    }

    pub fn render(&self) -> KinResult<Vec<RecordedFrame>> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(KineticError::Config(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        let mut rng = fastrand::Rng::with_seed(self.seed);
        let mut frames = Vec::new();
        let mut index = 0usize;

        for seg in &self.segments {
            for i in 0..seg.frames {
                let timestamp = index as f64 / self.fps;
                index += 1;

                let Some(pose) = seg.pose else {
                    frames.push(RecordedFrame {
                        timestamp,
                        hand: None,
                    });
                    continue;
                };

                let t = if seg.frames > 1 {
                    i as f32 / (seg.frames - 1) as f32
                } else {
                    0.0
                };
                let wx = seg.from.0 + (seg.to.0 - seg.from.0) * t;
                let wy = seg.from.1 + (seg.to.1 - seg.from.1) * t;

                let mut pts = pose.landmarks(wx, wy);
                for p in pts.iter_mut() {
                    p.x += (rng.f32() * 2.0 - 1.0) * self.jitter;
                    p.y += (rng.f32() * 2.0 - 1.0) * self.jitter;
                }

                let hand = LandmarkSample::new(&pts, self.handedness)?;
                frames.push(RecordedFrame {
                    timestamp,
                    hand: Some(hand),
                });
            }
        }
        Ok(frames)
    }
}
