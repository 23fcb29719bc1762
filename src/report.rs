// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text output for a display surface.
//!
//! Results are printed the conventional way: lengths and areas with four
//! decimals, the radius with two and the angle in degrees with one.

use core::f64::consts::PI;
use core::fmt;

use crate::{CircleSpec, InvalidInput, SectorMetrics};

/// The outcome of one calculation, ready to be shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    /// The input.
    pub spec: CircleSpec,
    /// The metrics, or why there are none.
    pub outcome: Result<SectorMetrics, InvalidInput>,
}

impl Report {
    /// Run the calculation for `spec`.
    pub fn new(spec: CircleSpec) -> Report {
        Report {
            spec,
            outcome: spec.metrics(),
        }
    }

    /// Did the calculation succeed?
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The angle conversion note, e.g. `90.0° is 1.5708 rad.`
    pub fn conversion(&self) -> Conversion {
        Conversion(self.spec)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Ok(m) => {
                writeln!(
                    f,
                    "Radius {:.2} and central angle {:.1}:",
                    self.spec.radius, self.spec.angle
                )?;
                writeln!(f, "  Arc length:  {:.4} units", m.arc_length)?;
                writeln!(f, "  Sector area: {:.4} units²", m.area)?;
                write!(f, "{}", self.conversion())
            }
            Err(_) => {
                write!(f, "Invalid input: the radius must be greater than zero.")
            }
        }
    }
}

/// Degrees-to-radians note for a spec.
#[derive(Clone, Copy, Debug)]
pub struct Conversion(CircleSpec);

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} is {:.4} rad.",
            self.0.angle,
            self.0.angle.radians()
        )
    }
}

/// Explanation of the formulas, for a help screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormulaNotes;

impl fmt::Display for FormulaNotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "1. Arc length (s)")?;
        writeln!(f)?;
        writeln!(
            f,
            "   The part of the circumference cut off by two radii. Think of a slice"
        )?;
        writeln!(f, "   of pizza: the arc is the length of its crust.")?;
        writeln!(f)?;
        writeln!(f, "       s = r × θ")?;
        writeln!(f)?;
        writeln!(f, "   r is the radius and θ the central angle in radians.")?;
        writeln!(f, "   An angle in degrees is converted first:")?;
        writeln!(f)?;
        writeln!(f, "       θ = degrees × π / 180")?;
        writeln!(f)?;
        writeln!(f, "2. Sector area (A)")?;
        writeln!(f)?;
        writeln!(
            f,
            "   The region bounded by the two radii and the arc; the slice itself."
        )?;
        writeln!(f)?;
        writeln!(f, "       A = ½ × r² × θ")?;
        writeln!(f)?;
        writeln!(f, "   Again θ is in radians.")?;
        writeln!(f)?;
        writeln!(
            f,
            "Radians make both formulas linear in the angle: one radian is the angle"
        )?;
        writeln!(f, "whose arc is exactly as long as the radius.")?;
        writeln!(f)?;
        write!(f, "π is taken as {PI:.6}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_report() {
        let text = Report::new(CircleSpec::new(10.0, 90.0)).to_string();
        assert_eq!(
            text,
            "Radius 10.00 and central angle 90.0°:\n\
             \x20 Arc length:  15.7080 units\n\
             \x20 Sector area: 78.5398 units²\n\
             90.0° is 1.5708 rad."
        );
    }

    #[test]
    fn negative_angle_report() {
        let report = Report::new(CircleSpec::new(10.0, -90.0));
        assert!(report.is_ok());
        let text = report.to_string();
        assert!(text.contains("Arc length:  -15.7080"), "{text}");
        assert!(text.ends_with("-90.0° is -1.5708 rad."), "{text}");
    }

    #[test]
    fn error_report() {
        let report = Report::new(CircleSpec::new(0.0, 45.0));
        assert!(!report.is_ok());
        assert_eq!(
            report.to_string(),
            "Invalid input: the radius must be greater than zero."
        );
    }

    #[test]
    fn notes_mention_pi() {
        let notes = FormulaNotes.to_string();
        assert!(notes.contains("s = r × θ"));
        assert!(notes.contains("A = ½ × r² × θ"));
        assert!(notes.ends_with("π is taken as 3.141593."));
    }
}
