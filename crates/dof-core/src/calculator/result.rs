//! Output record of a DOF calculation. All distances are in meters.

use serde::{Deserialize, Serialize};

/// Depth-of-field metrics for one set of camera settings.
///
/// `far_limit`, `total_dof` and `back` are `f64::INFINITY` when the subject
/// sits at or beyond the hyperfocal distance. In serialized form those
/// unbounded values are written as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DofResult {
    /// Nearest acceptably sharp distance.
    pub near_limit: f64,
    /// Farthest acceptably sharp distance, possibly infinite.
    #[serde(with = "unbounded")]
    pub far_limit: f64,
    /// `far_limit - near_limit`, or infinite.
    #[serde(with = "unbounded")]
    pub total_dof: f64,
    /// Focus distance beyond which everything to infinity is sharp.
    pub hyperfocal_distance: f64,
    /// Sharp zone in front of the subject. Never negative.
    pub front: f64,
    /// Sharp zone behind the subject. Never negative, possibly infinite.
    #[serde(with = "unbounded")]
    pub back: f64,
}

impl DofResult {
    /// Whether everything behind the subject stays sharp.
    pub fn is_far_unbounded(&self) -> bool {
        self.far_limit.is_infinite()
    }
}

/// Serialize `+inf` as `None` and back.
mod unbounded {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let finite = if value.is_infinite() { None } else { Some(*value) };
        finite.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
