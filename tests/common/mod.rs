#![allow(dead_code)] // not every test binary uses every helper

use kinetic::config::Config;
use kinetic::landmarks::{Finger, Handedness, Landmark, LandmarkSample};
use kinetic::synth::{wrist_for_index_tip, HandPose};

/// Builder over a synthetic pose so tests can nudge single joints.
pub struct HandBuilder {
    points: [Landmark; 21],
    handedness: Handedness,
}

impl HandBuilder {
    /// Pose with the wrist at `(wx, wy)`.
    pub fn new(pose: HandPose, wx: f32, wy: f32) -> Self {
        Self {
            points: pose.landmarks(wx, wy),
            handedness: Handedness::Right,
        }
    }

    /// Pose whose (extended) index fingertip sits at `(tx, ty)`.
    pub fn at_tip(pose: HandPose, tx: f32, ty: f32) -> Self {
        let (wx, wy) = wrist_for_index_tip(tx, ty);
        Self::new(pose, wx, wy)
    }

    pub fn set(mut self, index: usize, x: f32, y: f32) -> Self {
        self.points[index] = Landmark::new(x, y, 0.0);
        self
    }

    /// Straighten one finger: tip placed well past the PIP joint.
    pub fn extend(mut self, finger: Finger) -> Self {
        let (tip, _pip, mcp) = finger.joints();
        let base = self.points[mcp];
        self.points[tip] = Landmark::new(base.x, base.y - 0.11, 0.0);
        self
    }

    pub fn handedness(mut self, h: Handedness) -> Self {
        self.handedness = h;
        self
    }

    pub fn build(self) -> LandmarkSample {
        LandmarkSample::new(&self.points, self.handedness).expect("test sample must be valid")
    }
}

pub fn pose_at_tip(pose: HandPose, tx: f32, ty: f32) -> LandmarkSample {
    HandBuilder::at_tip(pose, tx, ty).build()
}

pub fn fist_at_wrist(wy: f32) -> LandmarkSample {
    HandBuilder::new(HandPose::Fist, 0.5, wy).build()
}

pub fn default_config() -> Config {
    Config::default()
}
