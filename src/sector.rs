// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circle with a central angle.

use crate::metrics::measure;
use crate::sample::sample_plot;
use crate::{Angle, InvalidInput, SampleOpts, SectorMetrics, SectorPlot};

/// A circle of a given radius, centered on the origin, together with the
/// central angle of a sector cut from it.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleSpec {
    /// The radius. Must be positive for any measurement.
    pub radius: f64,
    /// The central angle.
    pub angle: Angle,
}

impl CircleSpec {
    /// A new spec from a radius and an angle in degrees.
    #[inline]
    pub fn new(radius: f64, angle_degrees: f64) -> CircleSpec {
        CircleSpec {
            radius,
            angle: Angle::from_degrees(angle_degrees),
        }
    }

    /// A new spec from a radius and an [`Angle`].
    #[inline]
    pub fn with_angle(radius: f64, angle: Angle) -> CircleSpec {
        CircleSpec { radius, angle }
    }

    /// Can this spec be measured?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
    }

    /// Is this spec finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.radius.is_finite() && self.angle.is_finite()
    }

    /// Arc length and area of the sector.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when the radius is not positive.
    pub fn metrics(&self) -> Result<SectorMetrics, InvalidInput> {
        measure(self.radius, self.angle)
    }

    /// Sample the sector for display, after checking the radius.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when the radius is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use wedge::{CircleSpec, SampleOpts};
    ///
    /// let spec = CircleSpec::new(10.0, -90.0);
    /// let plot = spec.plot(&SampleOpts::still()).unwrap();
    /// // The signed angle is kept, the drawing wraps to 270°.
    /// assert_eq!(plot.last_frame().angle, spec.angle);
    /// assert!(plot.last_frame().wedge.area() > 0.0);
    /// ```
    pub fn plot(&self, opts: &SampleOpts) -> Result<SectorPlot, InvalidInput> {
        self.metrics()?;
        Ok(sample_plot(self.radius, self.angle, opts))
    }
}

impl From<(f64, f64)> for CircleSpec {
    /// Radius and angle in degrees.
    #[inline]
    fn from((radius, angle_degrees): (f64, f64)) -> CircleSpec {
        CircleSpec::new(radius, angle_degrees)
    }
}
