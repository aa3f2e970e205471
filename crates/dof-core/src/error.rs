//! Calculation error taxonomy.

use std::fmt;

/// Names an input field of [`DofParameters`](crate::DofParameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Aperture,
    FocalLength,
    CropFactor,
    CircleOfConfusion,
    SubjectDistance,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aperture => "aperture",
            Self::FocalLength => "focal length",
            Self::CropFactor => "crop factor",
            Self::CircleOfConfusion => "circle of confusion",
            Self::SubjectDistance => "subject distance",
        };
        f.write_str(name)
    }
}

/// Errors produced by [`calculate_dof`](crate::calculate_dof).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("invalid {field}: {value} (must be finite and greater than zero)")]
    InvalidParameter { field: Parameter, value: f64 },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}

impl CalculationError {
    /// The offending field, for `InvalidParameter` errors.
    pub fn field(&self) -> Option<Parameter> {
        match self {
            Self::InvalidParameter { field, .. } => Some(*field),
            Self::DegenerateGeometry(_) => None,
        }
    }
}
