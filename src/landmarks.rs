//! Hand skeleton layout and the validated per-frame landmark sample.
//!
//! Indices follow the standard 21-point hand model: wrist first, then the
//! thumb (CMC -> TIP) and each finger (MCP -> PIP -> DIP -> TIP).

use crate::consts::{COORD_MAX, COORD_MIN, LANDMARK_COUNT};
use crate::error::{KinResult, KineticError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32, // relative depth, unused by gesture logic
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

/// The four fingers that take part in fist detection. The thumb is
/// deliberately absent: it drives the click gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// (tip, pip, mcp) indices.
    pub fn joints(self) -> (usize, usize, usize) {
        match self {
            Finger::Index => (INDEX_TIP, INDEX_PIP, INDEX_MCP),
            Finger::Middle => (MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
            Finger::Ring => (RING_TIP, RING_PIP, RING_MCP),
            Finger::Pinky => (PINKY_TIP, PINKY_PIP, PINKY_MCP),
        }
    }

    pub fn tip(self) -> usize {
        self.joints().0
    }
}

/// One frame's worth of hand joints. Construction validates shape and
/// range, so every accessor below is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSample {
    points: [Landmark; LANDMARK_COUNT],
    pub handedness: Handedness,
}

impl LandmarkSample {
    pub fn new(points: &[Landmark], handedness: Handedness) -> KinResult<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(KineticError::MalformedSample {
                expected: LANDMARK_COUNT,
                found: points.len(),
            });
        }

        for (index, p) in points.iter().enumerate() {
            for value in [p.x, p.y] {
                if !value.is_finite() || !(COORD_MIN..=COORD_MAX).contains(&value) {
                    return Err(KineticError::LandmarkOutOfRange { index, value });
                }
            }
            if !p.z.is_finite() {
                return Err(KineticError::LandmarkOutOfRange { index, value: p.z });
            }
        }

        let mut arr = [Landmark::default(); LANDMARK_COUNT];
        arr.copy_from_slice(points);
        Ok(Self {
            points: arr,
            handedness,
        })
    }

    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    pub fn wrist(&self) -> Landmark {
        self.points[WRIST]
    }

    pub fn thumb_tip(&self) -> Landmark {
        self.points[THUMB_TIP]
    }

    pub fn fingertip(&self, finger: Finger) -> Landmark {
        self.points[finger.tip()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_finger_joint_order() {
        for finger in Finger::iter() {
            let (tip, pip, mcp) = finger.joints();
            assert_eq!(pip, mcp + 1);
            assert_eq!(tip, mcp + 3);
        }
    }

    #[test]
    fn test_rejects_short_sample() {
        let points = vec![Landmark::default(); 20];
        let err = LandmarkSample::new(&points, Handedness::Right).unwrap_err();
        assert!(matches!(
            err,
            KineticError::MalformedSample {
                expected: 21,
                found: 20
            }
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let mut points = vec![Landmark::new(0.5, 0.5, 0.0); 21];
        points[7].y = f32::NAN;
        let err = LandmarkSample::new(&points, Handedness::Left).unwrap_err();
        assert!(matches!(err, KineticError::LandmarkOutOfRange { index: 7, .. }));
    }

    #[test]
    fn test_handedness_parse() {
        assert_eq!("left".parse::<Handedness>().unwrap(), Handedness::Left);
        assert_eq!("Right".parse::<Handedness>().unwrap(), Handedness::Right);
        assert!("both".parse::<Handedness>().is_err());
    }
}
