//! Hyperfocal depth-of-field model.
//!
//! All arithmetic runs in millimeters; results are converted to meters at
//! the boundary.
//!
//! # Formula
//! ```text
//!   H    = f² / (N × c) + f
//!   near = D (H − f) / (H + D − 2f)
//!   far  = D (H − f) / (H − D)        if D < H
//!        = ∞                          otherwise
//! ```
//!
//! `f` is the nominal focal length. The crop factor does not rescale it; the
//! sensor size enters the model only through the circle of confusion `c`.

use crate::calculator::params::DofParameters;
use crate::calculator::result::DofResult;
use crate::error::{CalculationError, Parameter};

const MM_PER_M: f64 = 1000.0;

/// Compute near/far limits, total DOF, hyperfocal distance and the
/// front/back margins for `params`.
///
/// Every field is re-validated here regardless of what the caller checked.
///
/// # Errors
/// - [`CalculationError::InvalidParameter`] when a field is not a finite,
///   strictly positive number. Fields are checked in declaration order.
/// - [`CalculationError::DegenerateGeometry`] when the subject distance does
///   not exceed the focal length, or the geometry leaves the range of `f64`.
pub fn calculate_dof(params: &DofParameters) -> Result<DofResult, CalculationError> {
    validate(params)?;

    let f = params.focal_length;
    let hyperfocal = f * f / (params.aperture * params.circle_of_confusion) + f;
    if !hyperfocal.is_finite() {
        return Err(CalculationError::DegenerateGeometry(
            "hyperfocal distance is not representable",
        ));
    }

    let distance = params.subject_distance * MM_PER_M;
    if !distance.is_finite() {
        return Err(CalculationError::InvalidParameter {
            field: Parameter::SubjectDistance,
            value: params.subject_distance,
        });
    }
    if distance <= f {
        return Err(CalculationError::DegenerateGeometry(
            "subject distance must exceed the focal length",
        ));
    }

    let near_denominator = hyperfocal + distance - 2.0 * f;
    if near_denominator <= 0.0 {
        return Err(CalculationError::DegenerateGeometry(
            "near limit denominator is not positive",
        ));
    }

    let near = distance * (hyperfocal - f) / near_denominator;
    let far = if distance < hyperfocal {
        distance * (hyperfocal - f) / (hyperfocal - distance)
    } else {
        f64::INFINITY
    };

    // Only `far` may legitimately be infinite.
    if !near.is_finite() || far.is_nan() {
        return Err(CalculationError::DegenerateGeometry(
            "depth of field is not representable",
        ));
    }

    let near_limit = near / MM_PER_M;
    let far_limit = if far.is_infinite() { f64::INFINITY } else { far / MM_PER_M };
    let total_dof = if far_limit.is_infinite() {
        f64::INFINITY
    } else {
        far_limit - near_limit
    };

    let front = (distance - near).max(0.0) / MM_PER_M;
    let back = if far.is_infinite() {
        f64::INFINITY
    } else {
        (far - distance).max(0.0) / MM_PER_M
    };

    Ok(DofResult {
        near_limit,
        far_limit,
        total_dof,
        hyperfocal_distance: hyperfocal / MM_PER_M,
        front,
        back,
    })
}

fn validate(params: &DofParameters) -> Result<(), CalculationError> {
    let fields = [
        (Parameter::Aperture, params.aperture),
        (Parameter::FocalLength, params.focal_length),
        (Parameter::CropFactor, params.crop_factor),
        (Parameter::CircleOfConfusion, params.circle_of_confusion),
        (Parameter::SubjectDistance, params.subject_distance),
    ];
    for (field, value) in fields {
        // NaN fails `> 0.0`.
        if !(value.is_finite() && value > 0.0) {
            return Err(CalculationError::InvalidParameter { field, value });
        }
    }
    Ok(())
}
