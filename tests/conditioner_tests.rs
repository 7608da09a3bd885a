mod common;

use common::{default_config, HandBuilder};
use kinetic::conditioner::mapping::map_to_screen;
use kinetic::conditioner::predicates::{
    euclidean_distance, is_click, is_finger_curled, is_fist, is_sample_finger_curled,
};
use kinetic::conditioner::{ScreenPoint, SignalConditioner};
use kinetic::config::ActiveRegion;
use kinetic::landmarks::{Finger, Landmark};
use kinetic::synth::HandPose;
use rstest::rstest;
use strum::IntoEnumIterator;

const W: u32 = 1920;
const H: u32 = 1080;

fn lm(x: f32, y: f32) -> Landmark {
    Landmark::new(x, y, 0.0)
}

// --- DISTANCE & CLICK ---

#[rstest]
#[case(lm(0.0, 0.0), lm(0.3, 0.4), 0.5)]
#[case(lm(0.5, 0.5), lm(0.5, 0.5), 0.0)]
#[case(lm(0.5, 0.5), lm(0.52, 0.5), 0.02)]
fn test_planar_distance(#[case] a: Landmark, #[case] b: Landmark, #[case] expected: f32) {
    assert!((euclidean_distance(a, b) - expected).abs() < 1e-6);
}

#[test]
fn test_distance_ignores_depth() {
    let a = Landmark::new(0.1, 0.1, -0.4);
    let b = Landmark::new(0.1, 0.1, 0.9);
    assert_eq!(euclidean_distance(a, b), 0.0);
}

#[rstest]
#[case(lm(0.52, 0.50), true)] // 0.02 apart
#[case(lm(0.60, 0.50), false)] // 0.10 apart
fn test_click_threshold_scenario(#[case] index_tip: Landmark, #[case] expected: bool) {
    let thumb = lm(0.50, 0.50);
    assert_eq!(is_click(thumb, index_tip, 0.05), expected);
}

#[test]
fn test_click_comparison_is_strict() {
    // 0.25 is exact in binary, so the distance equals the threshold.
    assert!(!is_click(lm(0.5, 0.5), lm(0.5, 0.75), 0.25));
    assert!(is_click(lm(0.5, 0.5), lm(0.5, 0.75), 0.2501));
}

// --- CURL & FIST ---

#[rstest]
#[case(0.11, true)] // tip folded back near the MCP
#[case(0.05, true)] // tip level with the PIP
#[case(0.13, false)] // tip reaching past 1.2x the PIP span
#[case(0.21, false)] // fully extended
fn test_finger_curl(#[case] tip_rise: f32, #[case] expected: bool) {
    // PIP sits 0.1 above the MCP, so the curl limit is 0.12.
    let mcp = lm(0.5, 0.6);
    let pip = lm(0.5, 0.5);
    let tip = lm(0.5, 0.6 - tip_rise);
    assert_eq!(is_finger_curled(tip, pip, mcp), expected);
}

#[test]
fn test_fist_requires_all_four() {
    let fist = HandBuilder::new(HandPose::Fist, 0.5, 0.6).build();
    assert!(is_fist(&fist));
    for finger in Finger::iter() {
        assert!(is_sample_finger_curled(&fist, finger), "{} not curled", finger);
    }
}

#[rstest]
#[case(Finger::Index)]
#[case(Finger::Middle)]
#[case(Finger::Ring)]
#[case(Finger::Pinky)]
fn test_single_extended_finger_breaks_fist(#[case] finger: Finger) {
    let sample = HandBuilder::new(HandPose::Fist, 0.5, 0.6).extend(finger).build();
    assert!(!is_sample_finger_curled(&sample, finger));
    assert!(!is_fist(&sample));
}

#[test]
fn test_thumb_does_not_affect_fist() {
    let sample = HandBuilder::new(HandPose::Fist, 0.5, 0.6)
        .set(kinetic::landmarks::THUMB_TIP, 0.2, 0.2)
        .build();
    assert!(is_fist(&sample));
}

#[test]
fn test_open_hand_is_not_fist() {
    let sample = HandBuilder::new(HandPose::Open, 0.5, 0.7).build();
    assert!(!is_fist(&sample));
}

// --- SMOOTHING ---

#[test]
fn test_smoothing_first_frame_is_raw() {
    let mut cond = SignalConditioner::new(&default_config());
    assert_eq!(cond.filter_state(), None);
    assert_eq!(cond.smooth(0.3, 0.7), (0.3, 0.7));
    assert_eq!(cond.filter_state(), Some((0.3, 0.7)));
}

#[test]
fn test_smoothing_compounds_on_smoothed_value() {
    let mut cond = SignalConditioner::new(&default_config());
    cond.smooth(0.0, 0.0);
    let (x1, _) = cond.smooth(0.6, 0.0);
    let (x2, _) = cond.smooth(0.6, 0.0);
    assert!((x1 - 0.1).abs() < 1e-6);
    // 0.1 + (0.6 - 0.1) / 6
    assert!((x2 - (0.1 + 0.5 / 6.0)).abs() < 1e-6);
}

#[test]
fn test_reset_smoothing_removes_lag() {
    let mut cond = SignalConditioner::new(&default_config());
    cond.smooth(0.1, 0.1);
    cond.smooth(0.2, 0.2);
    cond.reset();
    assert_eq!(cond.smooth(0.9, 0.4), (0.9, 0.4));
}

// --- MAPPING ---

#[test]
fn test_center_maps_to_screen_center() {
    let region = ActiveRegion::default();
    let (cx, cy) = region.center();
    let p = map_to_screen(cx, cy, &region, W, H);
    assert!((p.x as i64 - (W / 2) as i64).abs() <= 1, "x={}", p.x);
    assert!((p.y as i64 - (H / 2) as i64).abs() <= 1, "y={}", p.y);
}

#[rstest]
#[case((0.0, 0.5), (0.2, 0.5))] // left of region
#[case((1.0, 0.5), (0.8, 0.5))] // right of region
#[case((0.5, -0.3), (0.5, 0.2))] // above
#[case((0.5, 1.2), (0.5, 0.8))] // below
#[case((0.05, 0.95), (0.2, 0.8))] // corner
fn test_outside_points_clamp_to_boundary(#[case] outside: (f32, f32), #[case] edge: (f32, f32)) {
    let region = ActiveRegion::default();
    assert_eq!(
        map_to_screen(outside.0, outside.1, &region, W, H),
        map_to_screen(edge.0, edge.1, &region, W, H)
    );
}

#[test]
fn test_mapping_mirrors_x() {
    let region = ActiveRegion::default();
    let left_of_camera = map_to_screen(0.3, 0.5, &region, W, H);
    let right_of_camera = map_to_screen(0.7, 0.5, &region, W, H);
    assert!(left_of_camera.x > W / 2);
    assert!(right_of_camera.x < W / 2);
    let sum = left_of_camera.x + right_of_camera.x;
    assert!((W - 2..=W).contains(&sum), "sum {}", sum);
}

#[test]
fn test_mapping_stays_on_screen() {
    let region = ActiveRegion::default();
    let p = map_to_screen(0.2, 0.8, &region, W, H);
    assert_eq!(p, ScreenPoint::new(W - 1, H - 1));
}

#[test]
fn test_custom_region() {
    let region = ActiveRegion {
        x_start: 0.0,
        x_end: 0.5,
        y_start: 0.5,
        y_end: 1.0,
    };
    // 0.25 is the region's middle column; 0.75 its middle row.
    assert_eq!(map_to_screen(0.25, 0.75, &region, 1000, 800), ScreenPoint::new(500, 400));
}

// --- SCROLL ---

#[test]
fn test_scroll_first_call_sets_baseline() {
    let mut cond = SignalConditioner::new(&default_config());
    assert_eq!(cond.calculate_scroll_delta(0.5), 0);
    assert_eq!(cond.scroll_reference(), Some(0.5));
}

#[test]
fn test_scroll_delta_is_inter_frame() {
    let mut cond = SignalConditioner::new(&default_config());
    cond.calculate_scroll_delta(0.25);
    // (0.5 - 0.25) * 10 * 100
    assert_eq!(cond.calculate_scroll_delta(0.5), 250);
    // Reference advanced, so no further movement means no scroll.
    assert_eq!(cond.calculate_scroll_delta(0.5), 0);
    assert_eq!(cond.calculate_scroll_delta(0.25), -250);
}

#[test]
fn test_scroll_delta_truncates_toward_zero() {
    let mut config = default_config();
    config.gestures.scroll_sensitivity = 0.01;
    let mut cond = SignalConditioner::new(&config);
    cond.calculate_scroll_delta(0.0);
    // 0.5 * 0.01 * 100 = 0.5 -> 0
    assert_eq!(cond.calculate_scroll_delta(0.5), 0);
    // -0.75 * 0.01 * 100 = -0.75 -> 0
    assert_eq!(cond.calculate_scroll_delta(-0.25), 0);
}

#[test]
fn test_scroll_reset() {
    let mut cond = SignalConditioner::new(&default_config());
    cond.calculate_scroll_delta(0.25);
    cond.reset_scroll_reference();
    assert_eq!(cond.calculate_scroll_delta(0.75), 0);
}

// --- FAIL-SAFE ---

#[rstest]
#[case(ScreenPoint::new(0, 0), true)]
#[case(ScreenPoint::new(99, 99), true)]
#[case(ScreenPoint::new(100, 0), false)]
#[case(ScreenPoint::new(0, 100), false)]
#[case(ScreenPoint::new(960, 540), false)]
fn test_failsafe_region(#[case] p: ScreenPoint, #[case] expected: bool) {
    let cond = SignalConditioner::new(&default_config());
    assert_eq!(cond.is_in_failsafe_region(p), expected);
}
