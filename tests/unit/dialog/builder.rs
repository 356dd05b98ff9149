use super::*;
use crate::dialog::modification::CurveKey;
use crate::foundation::error::DialogError;

#[test]
fn empty_builder_matches_defaults() {
    let m = ModificationBuilder::new().build().unwrap();
    assert_eq!(m, Modification::default());
    assert_eq!(m.margin(), 10.0);
}

#[test]
fn setters_chain() {
    let curve = InterpolationCurve {
        keys: vec![
            CurveKey {
                time: 0.0,
                value: 0.0,
            },
            CurveKey {
                time: 0.5,
                value: 1.0,
            },
        ],
    };
    let m = ModificationBuilder::new()
        .anchor(Anchor::CenterRight)
        .padding(6.0)
        .margin(2.0)
        .pixel_per_unit_multiplier(3.5)
        .interpolation_mode(InterpolationMode::Custom)
        .interpolation_curve(curve.clone())
        .build()
        .unwrap();

    assert_eq!(m.anchor(), Anchor::CenterRight);
    assert_eq!(m.padding(), 6.0);
    assert_eq!(m.margin(), 2.0);
    assert_eq!(m.pixel_per_unit_multiplier(), 3.5);
    assert_eq!(m.interpolation_mode(), InterpolationMode::Custom);
    assert_eq!(m.interpolation_curve(), &curve);
}

#[test]
fn later_setter_wins() {
    let m = ModificationBuilder::new()
        .margin(0.0)
        .margin(10.0)
        .build()
        .unwrap();
    assert_eq!(m.margin(), 10.0);
}

#[test]
fn build_rejects_nan_padding() {
    let err = ModificationBuilder::new()
        .padding(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, DialogError::Validation(_)));
}
