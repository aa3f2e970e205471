//! Behavioural checks of the DOF model across a grid of camera settings.
//!
//! Run with: `cargo test -p dof-core`

use dof_core::{
    CalculationError, DofParameters, DofResult, Parameter, SensorProfile, calculate_dof,
    resolve_sensor_profile,
};

const APERTURES: [f64; 10] = [1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0, 32.0];
const FOCAL_LENGTHS: [f64; 6] = [16.0, 24.0, 35.0, 50.0, 85.0, 200.0];
const DISTANCES: [f64; 7] = [0.3, 0.5, 1.0, 2.5, 5.0, 20.0, 100.0];

/// Every valid combination of the grids above, for each sensor profile.
fn sweep() -> Vec<(DofParameters, DofResult)> {
    let mut out = Vec::new();
    for &profile in SensorProfile::all() {
        for aperture in APERTURES {
            for focal_length in FOCAL_LENGTHS {
                for distance in DISTANCES {
                    let params = DofParameters::for_sensor(profile, aperture, focal_length, distance);
                    let result = calculate_dof(&params)
                        .unwrap_or_else(|e| panic!("{params:?} should be valid: {e}"));
                    out.push((params, result));
                }
            }
        }
    }
    out
}

#[test]
fn test_far_limit_never_precedes_near_limit() {
    for (params, r) in sweep() {
        if r.far_limit.is_finite() {
            assert!(r.far_limit >= r.near_limit, "{params:?}: {r:?}");
        }
        assert!(r.near_limit > 0.0, "{params:?}: {r:?}");
    }
}

#[test]
fn test_total_dof_tracks_limits() {
    for (params, r) in sweep() {
        if r.far_limit.is_finite() {
            assert_eq!(r.total_dof, r.far_limit - r.near_limit, "{params:?}");
            assert!(r.total_dof.is_finite());
        } else {
            assert!(r.total_dof.is_infinite(), "{params:?}");
            assert!(r.back.is_infinite(), "{params:?}");
        }
    }
}

#[test]
fn test_margins_never_negative() {
    for (params, r) in sweep() {
        assert!(r.front >= 0.0, "{params:?}: front {}", r.front);
        assert!(r.back >= 0.0, "{params:?}: back {}", r.back);
    }
}

#[test]
fn test_no_nan_in_results() {
    for (params, r) in sweep() {
        for v in [r.near_limit, r.far_limit, r.total_dof, r.hyperfocal_distance, r.front, r.back] {
            assert!(!v.is_nan(), "{params:?}: {r:?}");
        }
    }
}

#[test]
fn test_total_dof_non_decreasing_with_aperture() {
    for &profile in SensorProfile::all() {
        for focal_length in FOCAL_LENGTHS {
            for distance in DISTANCES {
                let mut previous = 0.0_f64;
                for aperture in APERTURES {
                    let params = DofParameters::for_sensor(profile, aperture, focal_length, distance);
                    let total = calculate_dof(&params).unwrap().total_dof;
                    assert!(
                        total >= previous,
                        "{profile} {focal_length}mm @ {distance}m: f/{aperture} gave {total} < {previous}"
                    );
                    previous = total;
                }
            }
        }
    }
}

#[test]
fn test_hyperfocal_boundary() {
    let base = DofParameters::new(8.0, 35.0, 1.0, 0.03, 1.0);
    let h = calculate_dof(&base).unwrap().hyperfocal_distance;

    let before = calculate_dof(&DofParameters { subject_distance: h * 0.999, ..base }).unwrap();
    assert!(before.far_limit.is_finite(), "just inside H: {before:?}");
    assert!(before.far_limit > h, "far limit should lie well beyond H");

    let after = calculate_dof(&DofParameters { subject_distance: h * 1.001, ..base }).unwrap();
    assert!(after.far_limit.is_infinite(), "just beyond H: {after:?}");
}

#[test]
fn test_far_beyond_hyperfocal_is_unbounded() {
    let params = DofParameters::new(2.8, 50.0, 1.0, 0.03, 500.0);
    let r = calculate_dof(&params).unwrap();
    assert!(r.is_far_unbounded());
    assert!(r.far_limit.is_infinite());
    assert!(r.back.is_infinite());
    assert!(r.total_dof.is_infinite());
    // near approaches H as D grows
    assert!(r.near_limit < r.hyperfocal_distance);
    assert!(r.near_limit > r.hyperfocal_distance * 0.9);
}

#[test]
fn test_zero_aperture_names_aperture() {
    let params = DofParameters::new(0.0, 50.0, 1.0, 0.03, 0.5);
    match calculate_dof(&params) {
        Err(CalculationError::InvalidParameter { field, value }) => {
            assert_eq!(field, Parameter::Aperture);
            assert_eq!(value, 0.0);
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
    let message = calculate_dof(&params).unwrap_err().to_string();
    assert!(message.contains("aperture"), "{message}");
}

#[test]
fn test_resolved_profile_matches_direct_values() {
    for &profile in SensorProfile::all() {
        let constants = resolve_sensor_profile(profile);
        let direct = DofParameters::new(
            4.0,
            35.0,
            constants.crop_factor,
            constants.default_circle_of_confusion,
            3.0,
        );
        let resolved = DofParameters::for_sensor(profile, 4.0, 35.0, 3.0);
        assert_eq!(direct, resolved);
        assert_eq!(calculate_dof(&direct), calculate_dof(&resolved), "{profile}");
    }
}

#[test]
fn test_smaller_circle_of_confusion_narrows_dof() {
    let full = calculate_dof(&DofParameters::for_sensor(SensorProfile::FullFrame, 4.0, 50.0, 2.0))
        .unwrap();
    let canon = calculate_dof(&DofParameters::for_sensor(SensorProfile::CanonApsC, 4.0, 50.0, 2.0))
        .unwrap();
    assert!(canon.total_dof < full.total_dof);
    assert!(canon.hyperfocal_distance > full.hyperfocal_distance);
}

#[test]
fn test_concurrent_calls_agree() {
    let params = DofParameters::for_sensor(SensorProfile::SonyApsC, 5.6, 85.0, 4.0);
    let expected = calculate_dof(&params).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || calculate_dof(&params).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), expected);
    }
}
