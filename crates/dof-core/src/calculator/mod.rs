//! DOF calculator — parameter record, result record, and evaluation.

pub mod evaluate;
pub mod params;
pub mod result;
