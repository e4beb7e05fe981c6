use super::*;

#[test]
fn defaults_match_named_constants() {
    let c = ThresholdConfig::default();
    assert_eq!(c.fade_threshold, 0.15);
    assert_eq!(c.zoom_threshold, 0.85);
    assert_eq!(c.image_scale, ValueRange::new(1.5, 1.0));
    assert_eq!(c.initial_overlay_scale, 750.0);
    assert_eq!(c.overlay_fade, Window::new(0.25, 0.4));
    assert_eq!(c.caption_reveal, Window::new(0.6, 0.25));
    assert_eq!(c.caption_gradient_span, 100.0);
    assert_eq!(c.caption_gradient_bottom, ValueRange::new(240.0, -40.0));
    assert_eq!(c.caption_scale, ValueRange::new(1.25, 1.0));
    c.validate().unwrap();
}

#[test]
fn caption_window_ends_at_zoom_threshold() {
    let c = ThresholdConfig::default();
    assert_eq!(c.caption_reveal.end(), c.zoom_threshold);
    assert_eq!(c.caption_reveal.ratio(0.85), 1.0);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let json = r#"{"fade_threshold": 0.2, "overlay_fade": {"start": 0.3, "span": 0.5}}"#;
    let c: ThresholdConfig = serde_json::from_str(json).unwrap();
    assert_eq!(c.fade_threshold, 0.2);
    assert_eq!(c.overlay_fade, Window::new(0.3, 0.5));
    assert_eq!(c.zoom_threshold, DEFAULT_ZOOM_THRESHOLD);
}

#[test]
fn nested_windows_and_ranges_fill_missing_keys_from_their_own_defaults() {
    let json = r#"{"overlay_fade": {"start": 0.3}, "caption_reveal": {"span": 0.2},
        "caption_scale": {"to": 0.9}, "image_scale": {}}"#;
    let c: ThresholdConfig = serde_json::from_str(json).unwrap();
    assert_eq!(c.overlay_fade, Window::new(0.3, DEFAULT_OVERLAY_FADE_SPAN));
    assert_eq!(c.caption_reveal, Window::new(DEFAULT_CAPTION_REVEAL_START, 0.2));
    assert_eq!(c.caption_scale, ValueRange::new(DEFAULT_CAPTION_SCALE_START, 0.9));
    assert_eq!(c.image_scale, ThresholdConfig::default().image_scale);
    assert_eq!(
        c.caption_gradient_bottom,
        ThresholdConfig::default().caption_gradient_bottom
    );
    c.validate().unwrap();
}

#[test]
fn unknown_fields_are_rejected() {
    let r: Result<ThresholdConfig, _> = serde_json::from_str(r#"{"fade_treshold": 0.2}"#);
    assert!(r.is_err());

    let r: Result<ThresholdConfig, _> =
        serde_json::from_str(r#"{"overlay_fade": {"begin": 0.3}}"#);
    assert!(r.is_err());
}

#[test]
fn validate_rejects_zero_thresholds_and_spans() {
    let mut c = ThresholdConfig::default();
    c.fade_threshold = 0.0;
    assert!(c.validate().is_err());

    let mut c = ThresholdConfig::default();
    c.zoom_threshold = 1.2;
    assert!(c.validate().is_err());

    let mut c = ThresholdConfig::default();
    c.caption_reveal.span = 0.0;
    assert!(c.validate().is_err());

    let mut c = ThresholdConfig::default();
    c.overlay_fade.start = f64::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn validate_rejects_shrinking_overlay_and_non_finite_ranges() {
    let mut c = ThresholdConfig::default();
    c.initial_overlay_scale = 0.5;
    assert!(c.validate().is_err());

    let mut c = ThresholdConfig::default();
    c.caption_scale.to = f64::INFINITY;
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("caption_scale"));
}
