// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Central angles.

use core::f64::consts::TAU;
use core::fmt;

/// A central angle.
///
/// Stored in radians. Input usually arrives in degrees, so
/// [`Angle::from_degrees`] is the common constructor.
///
/// Angles are *not* wrapped on construction: an angle of 450° stays 450°,
/// and measurements made with it count the extra revolution. Only
/// [`Angle::normalized`] folds it back into a single turn.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle::from_radians(0.0);

    /// A full turn, 2π radians.
    pub const FULL_TURN: Angle = Angle::from_radians(TAU);

    /// Create an angle from a value in radians.
    #[inline]
    pub const fn from_radians(radians: f64) -> Angle {
        Angle { radians }
    }

    /// Create an angle from a value in degrees.
    ///
    /// ```
    /// use wedge::Angle;
    ///
    /// let a = Angle::from_degrees(180.0);
    /// assert!((a.radians() - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_degrees(degrees: f64) -> Angle {
        Angle::from_radians(degrees.to_radians())
    }

    /// The angle in radians.
    #[inline]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// The angle in degrees.
    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// The same direction, folded into `[0, 2π)`.
    ///
    /// Negative angles wrap around, so -90° becomes 270°, and any whole
    /// number of turns (including 360° itself) becomes zero.
    ///
    /// ```
    /// use wedge::Angle;
    ///
    /// let a = Angle::from_degrees(-90.0).normalized();
    /// assert!((a.to_degrees() - 270.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn normalized(self) -> Angle {
        let mut th = self.radians % TAU;
        if th < 0.0 {
            th += TAU;
        }
        // A tiny negative remainder can round up to exactly 2π.
        if th >= TAU {
            th = 0.0;
        }
        Angle::from_radians(th)
    }

    /// Linearly interpolate between two angles.
    #[inline]
    pub fn lerp(self, other: Angle, t: f64) -> Angle {
        Angle::from_radians(self.radians + t * (other.radians - self.radians))
    }

    /// Half of this angle; the direction of the bisector of a sector
    /// starting at zero.
    #[inline]
    pub fn half(self) -> Angle {
        Angle::from_radians(0.5 * self.radians)
    }

    /// Is this angle finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.radians.is_finite()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}°", self.to_degrees())
    }
}

/// Formats the angle in degrees, honoring the requested precision.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_degrees(), f)?;
        write!(f, "°")
    }
}
