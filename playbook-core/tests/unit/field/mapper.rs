use super::*;
use crate::field::standards::{USAU, WFDF};

#[test]
fn pixel_logical_roundtrip_within_tolerance() {
    for s in [0.01, 0.5, 1.0, 7.3, 8.0, 1234.5] {
        for p in [-250.0, 0.0, 1.0, 37.25, 880.0] {
            let back = to_pixels(to_logical(p, s), s);
            assert!((back - p).abs() < 1e-9, "s={s} p={p} back={back}");
        }
    }
}

#[test]
fn to_logical_guards_degenerate_scale() {
    assert_eq!(to_logical(10.0, 0.0), 0.0);
    assert_eq!(to_logical(10.0, -2.0), 0.0);
    assert_eq!(to_logical(10.0, f64::NAN), 0.0);
}

#[test]
fn contain_picks_smaller_ratio() {
    let c = ContainerSize::new(1140.0, 440.0);
    // avail 1100 x 400 → 10 px/unit along length, 10 px/unit along width for USAU.
    let s = compute_scale(c, &USAU.dimensions, FitMode::Contain, 20.0);
    assert_eq!(s, 10.0);

    let wide = ContainerSize::new(2240.0, 440.0);
    assert_eq!(
        compute_scale(wide, &USAU.dimensions, FitMode::Contain, 20.0),
        10.0
    );
    assert_eq!(
        compute_scale(wide, &USAU.dimensions, FitMode::FitWidth, 20.0),
        20.0
    );
    assert_eq!(
        compute_scale(wide, &USAU.dimensions, FitMode::FitHeight, 20.0),
        10.0
    );
}

#[test]
fn collapsed_container_stays_positive() {
    let c = ContainerSize::new(10.0, 0.0);
    let s = compute_scale(c, &WFDF.dimensions, FitMode::Contain, 20.0);
    assert!(s > 0.0 && s.is_finite());

    let nan = ContainerSize::new(f64::NAN, f64::NAN);
    let s = compute_scale(nan, &WFDF.dimensions, FitMode::Contain, 20.0);
    assert!(s > 0.0 && s.is_finite());
}

#[test]
fn transform_is_idempotent_and_centered() {
    let c = ContainerSize::new(1140.0, 640.0);
    let a = compute_transform(c, &USAU.dimensions, ViewportOpts::default());
    let b = compute_transform(c, &USAU.dimensions, ViewportOpts::default());
    assert_eq!(a, b);
    assert_eq!(a.scale, 10.0);
    assert_eq!(a.x, 20.0);
    assert_eq!(a.y, 120.0);

    let p = Point::new(55.0, 20.0);
    let px = a.project(p);
    assert_eq!(px, Point::new(570.0, 320.0));
    let back = a.unproject(px);
    assert!((back - p).hypot() < 1e-9);
    assert_eq!(a.to_affine() * p, px);
}

#[test]
fn manual_fit_is_identity() {
    let t = compute_transform(
        ContainerSize::new(300.0, 200.0),
        &WFDF.dimensions,
        ViewportOpts {
            fit: FitMode::Manual,
            padding: 0.0,
        },
    );
    assert_eq!(t, ViewportTransform::IDENTITY);
}

#[test]
fn fit_mode_serde_names() {
    assert_eq!(
        serde_json::to_string(&FitMode::FitWidth).unwrap(),
        "\"fit-width\""
    );
    let opts: ViewportOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ViewportOpts::default());
}

#[test]
fn free_point_helpers_match_transform() {
    let t = ViewportTransform {
        scale: 4.0,
        x: 12.0,
        y: -3.0,
    };
    let p = Point::new(2.5, 7.0);
    let px = project_point(&t, p);
    assert_eq!(px, Point::new(22.0, 25.0));
    assert_eq!(unproject_point(&t, px), p);
}
