// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered point paths, as handed to a plotting surface.

use alloc::vec::Vec;
use core::ops::Deref;

use crate::Point;

/// An ordered sequence of points describing a polyline to render.
///
/// There is no implicit closing segment; a display surface that fills the
/// shape closes it the usual way (last point back to the first).
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointSequence(Vec<Point>);

impl PointSequence {
    /// Create a new, empty sequence.
    pub fn new() -> PointSequence {
        PointSequence::default()
    }

    /// Create an empty sequence with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> PointSequence {
        PointSequence(Vec::with_capacity(capacity))
    }

    /// Create a sequence from a vector of points.
    pub fn from_vec(v: Vec<Point>) -> PointSequence {
        PointSequence(v)
    }

    /// Push a point onto the end of the sequence.
    pub fn push(&mut self, p: impl Into<Point>) {
        self.0.push(p.into());
    }

    /// Get the points.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consume the sequence, returning the points.
    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }

    /// The x coordinates, in order.
    ///
    /// Plotting libraries commonly want the two coordinate columns separately.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|p| p.x)
    }

    /// The y coordinates, in order.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|p| p.y)
    }

    /// Signed area of the polygon formed by closing the sequence.
    ///
    /// Positive when the points run anti-clockwise in a y-up frame.
    ///
    /// ```
    /// use wedge::{Point, PointSequence};
    ///
    /// let square = PointSequence::from_vec(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(square.area(), 1.0);
    /// ```
    pub fn area(&self) -> f64 {
        let n = self.0.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let p0 = self.0[i].to_vec2();
            let p1 = self.0[(i + 1) % n].to_vec2();
            sum += p0.cross(p1);
        }
        0.5 * sum
    }

    /// Total length of the polyline, without a closing segment.
    pub fn length(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Are all the points in this sequence finite?
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|p| p.is_finite())
    }
}

impl Deref for PointSequence {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(v: Vec<Point>) -> PointSequence {
        PointSequence(v)
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> PointSequence {
        PointSequence(iter.into_iter().collect())
    }
}

impl Extend<Point> for PointSequence {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PointSequence {
    type Item = Point;
    type IntoIter = alloc::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_is_signed() {
        let mut tri = PointSequence::new();
        tri.push((0.0, 0.0));
        tri.push((2.0, 0.0));
        tri.push((0.0, 2.0));
        assert_eq!(tri.area(), 2.0);

        let reversed: PointSequence = tri.iter().rev().copied().collect();
        assert_eq!(reversed.area(), -2.0);
    }

    #[test]
    fn degenerate_area() {
        let line = PointSequence::from_vec(vec![Point::ORIGIN, Point::new(1.0, 0.0)]);
        assert_eq!(line.area(), 0.0);
        assert_eq!(PointSequence::new().area(), 0.0);
    }

    #[test]
    fn coordinate_columns() {
        let seq = PointSequence::from_vec(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(seq.xs().collect::<Vec<_>>(), [1.0, 3.0]);
        assert_eq!(seq.ys().collect::<Vec<_>>(), [2.0, 4.0]);
        assert!((seq.length() - 8.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(seq[1], Point::new(3.0, 4.0));
    }
}
