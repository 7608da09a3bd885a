use crate::consts::CURL_RATIO;
use crate::landmarks::{Finger, Landmark, LandmarkSample};
use strum::IntoEnumIterator;

/// Planar distance between two landmarks. Depth is ignored.
pub fn euclidean_distance(p1: Landmark, p2: Landmark) -> f32 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Pinch test between the thumb tip and another fingertip.
pub fn is_click(thumb_tip: Landmark, other_tip: Landmark, threshold: f32) -> bool {
    euclidean_distance(thumb_tip, other_tip) < threshold
}

/// A finger is curled when its tip has folded back toward the MCP joint
/// instead of reaching past the PIP joint.
pub fn is_finger_curled(tip: Landmark, pip: Landmark, mcp: Landmark) -> bool {
    euclidean_distance(tip, mcp) < CURL_RATIO * euclidean_distance(pip, mcp)
}

pub fn is_sample_finger_curled(sample: &LandmarkSample, finger: Finger) -> bool {
    let (tip, pip, mcp) = finger.joints();
    is_finger_curled(sample.get(tip), sample.get(pip), sample.get(mcp))
}

/// All of index, middle, ring and pinky curled. The thumb is ignored.
pub fn is_fist(sample: &LandmarkSample) -> bool {
    Finger::iter().all(|f| is_sample_finger_curled(sample, f))
}
