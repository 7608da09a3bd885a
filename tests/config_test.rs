use kinetic::config::Config;
use kinetic::error::KineticError;
use rstest::rstest;
use std::io::Write;

#[test]
fn test_defaults_match_tuned_values() {
    let config = Config::default();
    assert_eq!(config.filter.smoothing_factor, 6.0);
    assert_eq!(config.region.x_start, 0.2);
    assert_eq!(config.region.y_end, 0.8);
    assert_eq!(config.gestures.click_threshold, 0.05);
    assert_eq!(config.gestures.scroll_sensitivity, 10.0);
    assert_eq!(config.timing.click_debounce_secs, 0.3);
    assert_eq!(config.timing.scroll_debounce_secs, 0.05);
    assert_eq!(config.display.failsafe_width, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "gestures": {{ "click_threshold": 0.03 }}, "region": {{ "x_start": 0.1 }} }}"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.gestures.click_threshold, 0.03);
    assert_eq!(config.gestures.scroll_sensitivity, 10.0);
    assert_eq!(config.region.x_start, 0.1);
    assert_eq!(config.region.x_end, 0.8);
    assert_eq!(config.filter.smoothing_factor, 6.0);
}

#[test]
fn test_bad_json_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{ not json").unwrap();
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, KineticError::Json(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, KineticError::Io(_)));
}

fn with(f: impl FnOnce(&mut Config)) -> Config {
    let mut c = Config::default();
    f(&mut c);
    c
}

#[rstest]
#[case(with(|c| c.filter.smoothing_factor = 1.0), "smoothing_factor")]
#[case(with(|c| c.filter.smoothing_factor = f32::NAN), "smoothing_factor")]
#[case(with(|c| c.region.x_start = 0.9), "x_start")]
#[case(with(|c| c.region.y_end = 0.2), "y_start")]
#[case(with(|c| c.region.x_end = 1.5), "region_x_end")]
#[case(with(|c| c.gestures.click_threshold = 0.0), "click_threshold")]
#[case(with(|c| c.timing.click_debounce_secs = -0.1), "click_debounce_secs")]
#[case(with(|c| c.display.screen_width = 0), "screen")]
fn test_validation_rejects(#[case] config: Config, #[case] needle: &str) {
    match config.validate() {
        Err(KineticError::Config(msg)) => {
            assert!(msg.contains(needle), "message '{}' lacks '{}'", msg, needle)
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_region_helpers() {
    let config = Config::default();
    let (cx, cy) = config.region.center();
    assert!((cx - 0.5).abs() < 1e-6 && (cy - 0.5).abs() < 1e-6);
    assert_eq!(config.region.clamp(0.0, 1.0), (0.2, 0.8));
    assert_eq!(config.region.frame_rect(640, 480), (128, 96, 512, 384));
}
