//! Input record for a single DOF calculation.
//!
//! `DofParameters` is built fresh for every request. Nothing here validates;
//! [`calculate_dof`](crate::calculate_dof) re-checks every field.

use serde::{Deserialize, Serialize};

use crate::sensor::{SensorProfile, resolve_sensor_profile};

/// Camera settings for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DofParameters {
    /// f-number, e.g. 2.8.
    pub aperture: f64,
    /// Nominal (real) focal length in millimeters.
    pub focal_length: f64,
    /// Sensor size relative to the 35mm frame.
    pub crop_factor: f64,
    /// Permissible circle of confusion in millimeters.
    pub circle_of_confusion: f64,
    /// Focus distance in meters.
    pub subject_distance: f64,
}

impl DofParameters {
    /// Every value supplied independently.
    pub fn new(
        aperture: f64,
        focal_length: f64,
        crop_factor: f64,
        circle_of_confusion: f64,
        subject_distance: f64,
    ) -> Self {
        Self {
            aperture,
            focal_length,
            crop_factor,
            circle_of_confusion,
            subject_distance,
        }
    }

    /// Crop factor and circle of confusion taken from a sensor profile.
    pub fn for_sensor(
        profile: SensorProfile,
        aperture: f64,
        focal_length: f64,
        subject_distance: f64,
    ) -> Self {
        let constants = resolve_sensor_profile(profile);
        Self::new(
            aperture,
            focal_length,
            constants.crop_factor,
            constants.default_circle_of_confusion,
            subject_distance,
        )
    }

    /// Replace the circle of confusion, keeping everything else.
    pub fn with_circle_of_confusion(self, circle_of_confusion: f64) -> Self {
        Self {
            circle_of_confusion,
            ..self
        }
    }

    /// 35mm-equivalent focal length. Informational; not used by the DOF model.
    pub fn equivalent_focal_length(&self) -> f64 {
        self.focal_length * self.crop_factor
    }
}
