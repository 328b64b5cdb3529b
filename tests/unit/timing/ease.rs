use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::Smoothstep, Ease::Smootherstep];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::Smoothstep.apply(7.0), 1.0);
}

#[test]
fn curves_mirror_around_midpoint() {
    for ease in ALL {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
        for t in [0.1, 0.25, 0.4] {
            let sum = ease.apply(t) + ease.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12, "{ease:?} at {t}");
        }
    }
}

#[test]
fn smooth_curves_start_slower_than_linear() {
    assert!(Ease::Smoothstep.apply(0.1) < 0.1);
    assert!(Ease::Smootherstep.apply(0.1) < Ease::Smoothstep.apply(0.1));
}

#[test]
fn deserializes_from_snake_case() {
    let e: Ease = serde_json::from_str("\"smootherstep\"").unwrap();
    assert_eq!(e, Ease::Smootherstep);
}
