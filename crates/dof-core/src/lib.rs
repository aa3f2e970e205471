//! DOF Core — domain layer for depth-of-field calculation.
//!
//! This crate contains the sensor profile table and the closed-form
//! hyperfocal depth-of-field model. No UI, I/O, or logging.

pub mod calculator;
pub mod error;
pub mod sensor;

// Re-exports for convenience.
pub use calculator::evaluate::calculate_dof;
pub use calculator::params::DofParameters;
pub use calculator::result::DofResult;
pub use error::{CalculationError, Parameter};
pub use sensor::{ParseSensorProfileError, SensorConstants, SensorProfile, resolve_sensor_profile};
