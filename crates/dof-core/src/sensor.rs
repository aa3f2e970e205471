//! Sensor profiles and their optical constants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when matching a raw crop factor back to a profile.
const CROP_FACTOR_TOLERANCE: f64 = 1e-4;

/// Identifies a sensor category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorProfile {
    /// 36×24 mm full frame.
    #[default]
    FullFrame,
    /// Canon APS-C (1.6× crop).
    CanonApsC,
    /// Sony / Nikon APS-C (1.5× crop).
    SonyApsC,
}

/// Optical constants derived from a [`SensorProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorConstants {
    /// Sensor size relative to the 35mm frame.
    pub crop_factor: f64,
    /// Default permissible circle of confusion in millimeters.
    pub default_circle_of_confusion: f64,
}

// Indexed by `SensorProfile::index`.
const SENSOR_TABLE: [SensorConstants; 3] = [
    SensorConstants {
        crop_factor: 1.0,
        default_circle_of_confusion: 0.03,
    },
    SensorConstants {
        crop_factor: 1.6,
        default_circle_of_confusion: 0.019,
    },
    SensorConstants {
        crop_factor: 1.5,
        default_circle_of_confusion: 0.02,
    },
];

impl SensorProfile {
    /// Every supported profile, in picker order.
    pub fn all() -> &'static [Self] {
        const ALL: [SensorProfile; 3] = [
            SensorProfile::FullFrame,
            SensorProfile::CanonApsC,
            SensorProfile::SonyApsC,
        ];
        &ALL
    }

    /// Human-readable label for UI menus.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullFrame => "Full Frame",
            Self::CanonApsC => "Canon APS-C",
            Self::SonyApsC => "Sony APS-C",
        }
    }

    /// Stable identifier, also used by serde and `FromStr`.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FullFrame => "full-frame",
            Self::CanonApsC => "canon-aps-c",
            Self::SonyApsC => "sony-aps-c",
        }
    }

    /// Crop factor and default circle of confusion for this profile.
    pub const fn constants(&self) -> SensorConstants {
        SENSOR_TABLE[self.index()]
    }

    /// Find the profile whose crop factor matches `value`.
    ///
    /// Returns `None` when no profile is within 1e-4.
    pub fn from_crop_factor(value: f64) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| (p.constants().crop_factor - value).abs() < CROP_FACTOR_TOLERANCE)
    }

    const fn index(&self) -> usize {
        match self {
            Self::FullFrame => 0,
            Self::CanonApsC => 1,
            Self::SonyApsC => 2,
        }
    }
}

impl fmt::Display for SensorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name a known sensor profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensor profile `{0}` (expected one of: full-frame, canon-aps-c, sony-aps-c)")]
pub struct ParseSensorProfileError(pub String);

impl FromStr for SensorProfile {
    type Err = ParseSensorProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSensorProfileError(s.to_string()))
    }
}

/// Resolve a sensor selection to its optical constants.
pub fn resolve_sensor_profile(profile: SensorProfile) -> SensorConstants {
    profile.constants()
}
