//! Runtime configuration for the demo, read from `DOF_*` environment variables.

use std::str::FromStr;

use dof_core::{DofParameters, SensorProfile};

/// Default f-number.
const DEFAULT_APERTURE: f64 = 2.8;
/// Default focal length in millimeters.
const DEFAULT_FOCAL_LENGTH: f64 = 50.0;
/// Default subject distance in meters.
const DEFAULT_SUBJECT_DISTANCE: f64 = 0.5;

/// How the result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

/// Camera settings and output options for one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Selected sensor profile.
    pub sensor: SensorProfile,
    /// f-number.
    pub aperture: f64,
    /// Focal length in millimeters.
    pub focal_length: f64,
    /// Circle of confusion override in millimeters. `None` uses the profile's.
    pub circle_of_confusion: Option<f64>,
    /// Subject distance in meters.
    pub subject_distance: f64,
    /// Output format.
    pub output: OutputFormat,
}

impl DemoConfig {
    /// Build a config from an arbitrary key lookup. Unparseable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sensor: parse_or(&lookup, "DOF_SENSOR", SensorProfile::default()),
            aperture: parse_or(&lookup, "DOF_APERTURE", DEFAULT_APERTURE),
            focal_length: parse_or(&lookup, "DOF_FOCAL_LENGTH", DEFAULT_FOCAL_LENGTH),
            circle_of_confusion: lookup("DOF_COC").and_then(|raw| parse_logged("DOF_COC", &raw)),
            subject_distance: parse_or(&lookup, "DOF_DISTANCE", DEFAULT_SUBJECT_DISTANCE),
            output: parse_or(&lookup, "DOF_OUTPUT", OutputFormat::default()),
        }
    }

    /// Assemble the immutable parameter record for the calculator.
    pub fn parameters(&self) -> DofParameters {
        let params = DofParameters::for_sensor(
            self.sensor,
            self.aperture,
            self.focal_length,
            self.subject_distance,
        );
        match self.circle_of_confusion {
            Some(coc) => params.with_circle_of_confusion(coc),
            None => params,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .and_then(|raw| parse_logged(key, &raw))
        .unwrap_or(default)
}

fn parse_logged<T>(key: &str, raw: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{key}={raw:?} ignored: {e}");
            None
        }
    }
}
