use super::*;

#[test]
fn builtin_standards_are_valid() {
    for s in FIELD_STANDARDS {
        s.dimensions.validate().unwrap();
    }
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(FieldStandard::by_id("usau").unwrap().id, "USAU");
    assert_eq!(FieldStandard::by_id(" AUDL ").unwrap().id, "AUDL");
    assert!(FieldStandard::by_id("beach").is_none());
    assert_eq!(FieldStandard::default(), WFDF);
}

#[test]
fn derived_dimensions() {
    let d = WFDF.dimensions;
    assert_eq!(d.central_zone_length(), 64.0);
    assert_eq!(d.brick_x(), 36.0);
    assert_eq!(d.center_y(), 18.5);
}

#[test]
fn rejects_degenerate_dimensions() {
    let mut d = USAU.dimensions;
    d.width = 0.0;
    assert!(d.validate().is_err());

    let mut d = USAU.dimensions;
    d.endzone_length = 60.0;
    assert!(d.validate().is_err());

    let mut d = USAU.dimensions;
    d.length = f64::NAN;
    assert!(d.validate().is_err());
}
