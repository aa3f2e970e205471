//! Text rendering of a [`DofResult`].

use std::fmt::Write;

use dof_core::{DofParameters, DofResult};

#[derive(Clone, Copy)]
enum Unit {
    Meters,
    Centimeters,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Centimeters => "cm",
        }
    }

    fn scale(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Centimeters => 100.0,
        }
    }
}

/// Format a distance in meters with two decimals, `∞` when unbounded.
fn format_distance(meters: f64, unit: Unit) -> String {
    if meters.is_infinite() {
        format!("∞ {}", unit.suffix())
    } else {
        format!("{:.2} {}", meters * unit.scale(), unit.suffix())
    }
}

/// Render the result rows, with a header describing the settings.
pub fn render(params: &DofParameters, result: &DofResult) -> String {
    let rows = [
        ("In front of subject:", result.front, Unit::Centimeters),
        ("Behind subject:", result.back, Unit::Centimeters),
        ("Near Limit:", result.near_limit, Unit::Meters),
        ("Far Limit:", result.far_limit, Unit::Meters),
        ("Total DOF:", result.total_dof, Unit::Centimeters),
        ("Hyperfocal:", result.hyperfocal_distance, Unit::Meters),
    ];

    let mut out = String::new();
    let _ = writeln!(
        out,
        "DOF Results  f/{} {:.0}mm ({:.0}mm equiv.) CoC {} mm @ {} m",
        params.aperture,
        params.focal_length,
        params.equivalent_focal_length(),
        params.circle_of_confusion,
        params.subject_distance,
    );
    for (label, value, unit) in rows {
        let _ = writeln!(out, "  {label:<22}{:>14}", format_distance(value, unit));
    }
    out
}
