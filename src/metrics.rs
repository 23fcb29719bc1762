// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc length and sector area.

use core::fmt;

use crate::Angle;

/// The measurements of a circular sector.
///
/// Both values carry the sign of the angle: a negative angle gives a
/// negative arc length and area. Angles beyond a full turn are not wrapped,
/// so 720° measures two whole circles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorMetrics {
    /// Length of the curved boundary, `r θ`.
    pub arc_length: f64,
    /// Area of the sector, `½ r² θ`.
    pub area: f64,
    /// The central angle the metrics were computed for.
    pub angle: Angle,
}

/// An error which can be returned when measuring a sector.
///
/// More kinds of invalid input may be added, so matches need a fallback arm:
///
/// ```
/// use wedge::{compute, InvalidInput};
///
/// let reason = match compute(-1.0, 90.0) {
///     Err(InvalidInput::NonPositiveRadius(r)) => r,
///     Err(_) => f64::NAN,
///     Ok(_) => 0.0,
/// };
/// assert_eq!(reason, -1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum InvalidInput {
    /// The radius was zero, negative or NaN.
    NonPositiveRadius(f64),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NonPositiveRadius(radius) => {
                write!(f, "radius must be positive, got {radius}")
            }
        }
    }
}

impl core::error::Error for InvalidInput {}

/// Compute the arc length and area of a sector.
///
/// The angle is given in degrees and may be any real number. The only
/// rejected input is a radius that is not strictly positive.
///
/// # Errors
///
/// Returns [`InvalidInput::NonPositiveRadius`] when `radius <= 0` or
/// `radius` is NaN.
///
/// # Examples
///
/// ```
/// let m = wedge::compute(10.0, 90.0).unwrap();
/// assert!((m.arc_length - 15.7080).abs() < 1e-4);
/// assert!((m.area - 78.5398).abs() < 1e-4);
///
/// assert!(wedge::compute(0.0, 45.0).is_err());
/// ```
pub fn compute(radius: f64, angle_degrees: f64) -> Result<SectorMetrics, InvalidInput> {
    measure(radius, Angle::from_degrees(angle_degrees))
}

/// Like [`compute`], with the angle already converted.
///
/// # Errors
///
/// Same as [`compute`].
pub fn measure(radius: f64, angle: Angle) -> Result<SectorMetrics, InvalidInput> {
    // Written so that NaN fails the check too.
    if !(radius > 0.0) {
        tracing::debug!(radius, "rejecting sector with non-positive radius");
        return Err(InvalidInput::NonPositiveRadius(radius));
    }
    let th = angle.radians();
    Ok(SectorMetrics {
        arc_length: radius * th,
        area: 0.5 * radius * radius * th,
        angle,
    })
}
