use super::*;

#[test]
fn bounds_of_rectangle_path() {
    let logo = LogoPath::parse(" M10,20 L60,20 L60,45 L10,45 Z ").unwrap();
    assert_eq!(logo.bounds(), ShapeBounds::new(10.0, 20.0, 50.0, 25.0));
    assert_eq!(logo.svg_data(), "M10,20 L60,20 L60,45 L10,45 Z");
}

#[test]
fn bounds_follow_curve_extrema_not_control_points() {
    // control point at y=-40 pulls the curve only to y=-20
    let logo = LogoPath::parse("M0,0 Q50,-40 100,0").unwrap();
    let b = logo.bounds();
    assert!((b.y - (-20.0)).abs() < 1e-9);
    assert!((b.width - 100.0).abs() < 1e-9);
    assert!((b.height - 20.0).abs() < 1e-9);
}

#[test]
fn rejects_empty_and_malformed_data() {
    assert!(LogoPath::parse("   ").is_err());
    let err = LogoPath::parse("M0,0 L").unwrap_err();
    assert!(err.to_string().contains("invalid logo path data"));
}

#[test]
fn flat_path_has_degenerate_bounds() {
    let logo = LogoPath::parse("M0,10 L80,10").unwrap();
    assert!(logo.bounds().is_degenerate());
    assert_eq!(logo.path().elements().len(), 2);
}
