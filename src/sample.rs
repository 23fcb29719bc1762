// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampling of the circle, the sector wedge and its annotation points.
//!
//! Everything here is a pure function of radius and angle. The animated
//! chart is just a list of static frames whose angle sweeps from zero up to
//! the target, so a single code path serves both the static and the animated
//! rendering (a frame count of one is the static case).

use alloc::vec::Vec;
use core::f64::consts::TAU;

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::common::linspace;
use crate::{Angle, Point, PointSequence};

/// Options for sampling a sector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleOpts {
    /// Number of points on the full circle outline.
    pub outline_resolution: usize,
    /// Number of points on the arc of the wedge, endpoints included.
    pub wedge_resolution: usize,
    /// Number of animation frames. One means a static plot.
    pub frame_count: usize,
    /// Distance of the θ label from the center, as a fraction of the radius.
    pub label_distance: f64,
}

impl Default for SampleOpts {
    fn default() -> Self {
        SampleOpts {
            outline_resolution: 100,
            wedge_resolution: 50,
            frame_count: 100,
            label_distance: 0.4,
        }
    }
}

impl SampleOpts {
    /// Options for a single, static frame.
    pub fn still() -> Self {
        SampleOpts::default().with_frame_count(1)
    }

    /// Builder method for setting the outline resolution.
    #[must_use]
    pub fn with_outline_resolution(mut self, resolution: usize) -> Self {
        self.outline_resolution = resolution;
        self
    }

    /// Builder method for setting the wedge resolution.
    #[must_use]
    pub fn with_wedge_resolution(mut self, resolution: usize) -> Self {
        self.wedge_resolution = resolution;
        self
    }

    /// Builder method for setting the number of animation frames.
    #[must_use]
    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Builder method for setting the label distance.
    #[must_use]
    pub fn with_label_distance(mut self, label_distance: f64) -> Self {
        self.label_distance = label_distance;
        self
    }
}

/// The kind of an annotation marker.
///
/// ```
/// use wedge::{annotations, Angle, MarkerKind};
///
/// let a = annotations(1.0, Angle::from_degrees(90.0), 0.4);
/// let texts: Vec<&str> = a
///     .markers()
///     .iter()
///     .map(|&(kind, _)| match kind {
///         MarkerKind::Center | MarkerKind::Start | MarkerKind::End => kind.text(),
///         _ => "?",
///     })
///     .collect();
/// assert_eq!(texts, ["O", "A", "B", "?"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum MarkerKind {
    /// The center of the circle.
    Center,
    /// Where the first radius meets the circle.
    Start,
    /// Where the second radius meets the circle.
    End,
    /// Anchor for the angle label.
    Label,
}

impl MarkerKind {
    /// The text conventionally drawn at this marker.
    pub fn text(self) -> &'static str {
        match self {
            MarkerKind::Center => "O",
            MarkerKind::Start => "A",
            MarkerKind::End => "B",
            MarkerKind::Label => "θ",
        }
    }
}

/// Named auxiliary points of a sector.
///
/// These are drawn as separate markers or text, not as part of any path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotations {
    /// The center, O.
    pub center: Point,
    /// The end of the first radius, A, at angle zero.
    pub start: Point,
    /// The end of the second radius, B, at the sector angle.
    pub end: Point,
    /// Anchor for the θ label, on the bisector of the sector.
    pub label: Point,
}

impl Annotations {
    /// All markers, in drawing order.
    pub fn markers(&self) -> ArrayVec<(MarkerKind, Point), 4> {
        ArrayVec::from([
            (MarkerKind::Center, self.center),
            (MarkerKind::Start, self.start),
            (MarkerKind::End, self.end),
            (MarkerKind::Label, self.label),
        ])
    }

    /// The two radii as one polyline, A → O → B.
    pub fn radii(&self) -> SmallVec<[Point; 3]> {
        SmallVec::from_buf([self.start, self.center, self.end])
    }
}

/// One rendered state of the sector.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorFrame {
    /// The angle this frame shows, before normalization.
    pub angle: Angle,
    /// The wedge boundary, closed through the origin.
    pub wedge: PointSequence,
    /// Marker positions for this frame.
    pub annotations: Annotations,
}

/// A sampled plot: the circle outline plus one or more sector frames.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorPlot {
    /// Radius of the circle.
    pub radius: f64,
    /// The full circle; identical for every frame.
    pub outline: PointSequence,
    /// The frames, in playback order. Never empty.
    pub frames: Vec<SectorFrame>,
}

impl SectorPlot {
    /// The final frame, showing the target angle.
    ///
    /// # Panics
    ///
    /// Panics if `frames` is empty, which never happens for plots made by
    /// [`sample_frames`] or [`sample_static`].
    pub fn last_frame(&self) -> &SectorFrame {
        match self.frames.last() {
            Some(frame) => frame,
            None => panic!("sector plot has no frames"),
        }
    }

    /// Is this plot animated?
    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }
}

/// Sample the full circle outline.
///
/// Produces `resolution` points at angles spread uniformly over `[0, 2π)`.
///
/// ```
/// use wedge::{circle_outline, Point};
///
/// let outline = circle_outline(2.0, 4);
/// assert_eq!(outline.len(), 4);
/// assert_eq!(outline[0], Point::new(2.0, 0.0));
/// ```
pub fn circle_outline(radius: f64, resolution: usize) -> PointSequence {
    linspace(0.0, TAU, resolution, false)
        .map(|th| Point::on_circle(radius, th))
        .collect()
}

/// Sample the boundary of the sector wedge.
///
/// The angle is folded into a single turn first, so the wedge never shows a
/// negative sweep: -90° is drawn as 270°, and 450° as 90°. The arc is
/// sampled with `resolution` points from angle zero to the folded angle,
/// both included, and the origin is placed at both ends so the polygon can
/// be filled.
///
/// A zero angle yields a degenerate, zero-area path.
pub fn wedge(radius: f64, angle: Angle, resolution: usize) -> PointSequence {
    let sweep = angle.normalized().radians();
    let mut path = PointSequence::with_capacity(wedge_len(resolution));
    path.push(Point::ORIGIN);
    path.extend(linspace(0.0, sweep, resolution, true).map(|th| Point::on_circle(radius, th)));
    path.push(Point::ORIGIN);
    path
}

/// Number of points in a wedge path: the arc plus the origin at both ends.
fn wedge_len(resolution: usize) -> usize {
    resolution.saturating_add(2)
}

/// Compute the annotation points of a sector.
///
/// Like [`wedge`], this works on the angle folded into a single turn.
pub fn annotations(radius: f64, angle: Angle, label_distance: f64) -> Annotations {
    let sweep = angle.normalized();
    Annotations {
        center: Point::ORIGIN,
        start: Point::on_circle(radius, 0.0),
        end: Point::on_circle(radius, sweep.radians()),
        label: Point::on_circle(label_distance * radius, sweep.half().radians()),
    }
}

fn frame(radius: f64, angle: Angle, opts: &SampleOpts) -> SectorFrame {
    SectorFrame {
        angle,
        wedge: wedge(radius, angle, opts.wedge_resolution),
        annotations: annotations(radius, angle, opts.label_distance),
    }
}

/// Sample a plot showing only the target angle.
///
/// This ignores `opts.frame_count`.
pub fn sample_static(radius: f64, angle_degrees: f64, opts: &SampleOpts) -> SectorPlot {
    sample_frames(radius, angle_degrees, &opts.with_frame_count(1))
}

/// Sample an animated plot.
///
/// Produces `opts.frame_count` frames whose angles are interpolated linearly
/// from zero to the target, both ends included. A frame count of zero is
/// treated as one, which gives the static plot.
///
/// ```
/// use wedge::{sample_frames, SampleOpts};
///
/// let plot = sample_frames(10.0, 90.0, &SampleOpts::default());
/// assert_eq!(plot.frames.len(), 100);
/// assert_eq!(plot.frames[0].angle.to_degrees(), 0.0);
/// assert!((plot.frames[99].angle.to_degrees() - 90.0).abs() < 1e-9);
/// ```
pub fn sample_frames(radius: f64, angle_degrees: f64, opts: &SampleOpts) -> SectorPlot {
    sample_plot(radius, Angle::from_degrees(angle_degrees), opts)
}

pub(crate) fn sample_plot(radius: f64, target: Angle, opts: &SampleOpts) -> SectorPlot {
    let frame_count = opts.frame_count.max(1);
    tracing::trace!(
        radius,
        degrees = target.to_degrees(),
        frame_count,
        outline = opts.outline_resolution,
        wedge = opts.wedge_resolution,
        "sampling sector"
    );
    let frames = if frame_count == 1 {
        Vec::from([frame(radius, target, opts)])
    } else {
        linspace(0.0, 1.0, frame_count, true)
            .map(|t| frame(radius, Angle::ZERO.lerp(target, t), opts))
            .collect()
    };
    SectorPlot {
        radius,
        outline: circle_outline(radius, opts.outline_resolution),
        frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < EPS, "{x} != {y}");
    }

    fn assert_same_path(a: &PointSequence, b: &PointSequence) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b.iter()) {
            assert!(p.is_near(*q, EPS), "{p:?} != {q:?}");
        }
    }

    #[test]
    fn outline_is_on_circle() {
        let outline = circle_outline(10.0, 100);
        assert_eq!(outline.len(), 100);
        for p in &outline {
            assert_approx_eq(p.to_vec2().hypot(), 10.0);
        }
        // Half-open range: the last sample stops one step short of 2π.
        let last = outline[99].to_vec2().atan2();
        assert_approx_eq(last, -TAU / 100.0);
        // The polygon area approaches the circle area.
        assert!((outline.area() - PI * 100.0).abs() < 1.0);
    }

    #[test]
    fn wedge_shape() {
        let w = wedge(10.0, Angle::from_degrees(90.0), 50);
        assert_eq!(w.len(), 52);
        assert_eq!(w[0], Point::ORIGIN);
        assert_eq!(w[51], Point::ORIGIN);
        assert_eq!(w[1], Point::new(10.0, 0.0));
        assert!(w[50].is_near(Point::new(0.0, 10.0), EPS));
        let quarter = PI * 100.0 / 4.0;
        assert!((w.area() - quarter).abs() < 0.1, "{}", w.area());
    }

    #[test]
    fn wedge_wraps_extra_turns() {
        let a = wedge(4.0, Angle::from_degrees(450.0), 50);
        let b = wedge(4.0, Angle::from_degrees(90.0), 50);
        assert_same_path(&a, &b);
    }

    #[test]
    fn wedge_negative_angle() {
        let w = wedge(10.0, Angle::from_degrees(-90.0), 50);
        let expected = wedge(10.0, Angle::from_degrees(270.0), 50);
        assert_same_path(&w, &expected);
        // Anti-clockwise sweep, so the area is positive.
        assert!(w.area() > 0.0);
    }

    #[test]
    fn wedge_zero_angle_is_degenerate() {
        let w = wedge(5.0, Angle::ZERO, 50);
        assert_eq!(w.len(), 52);
        assert_eq!(w[0], Point::ORIGIN);
        for p in &w[1..51] {
            assert_eq!(*p, Point::new(5.0, 0.0));
        }
        assert_eq!(w.area(), 0.0);
    }

    #[test]
    fn wedge_tiny_resolutions() {
        let w = wedge(1.0, Angle::from_degrees(90.0), 1);
        assert_eq!(w.points(), [Point::ORIGIN, Point::new(1.0, 0.0), Point::ORIGIN]);
        let w = wedge(1.0, Angle::from_degrees(90.0), 0);
        assert_eq!(w.points(), [Point::ORIGIN, Point::ORIGIN]);
    }

    #[test]
    fn annotation_points() {
        let a = annotations(10.0, Angle::from_degrees(90.0), 0.4);
        assert_eq!(a.center, Point::ORIGIN);
        assert_eq!(a.start, Point::new(10.0, 0.0));
        assert!(a.end.is_near(Point::new(0.0, 10.0), EPS));
        let label = Point::on_circle(4.0, FRAC_PI_2 / 2.0);
        assert!(a.label.is_near(label, EPS));

        let kinds: Vec<_> = a.markers().iter().map(|(k, _)| k.text()).collect();
        assert_eq!(kinds, ["O", "A", "B", "θ"]);
        assert_eq!(a.radii().len(), 3);
        assert_eq!(a.radii()[1], Point::ORIGIN);
    }

    #[test]
    fn annotations_follow_folded_angle() {
        let a = annotations(3.0, Angle::from_degrees(-90.0), 0.4);
        assert!(a.end.is_near(Point::new(0.0, -3.0), EPS));
        // Bisector of the 270° wedge sits at 135°.
        assert!(a.label.is_near(Point::on_circle(1.2, 0.75 * PI), EPS));
    }

    #[test]
    fn frames_interpolate() {
        let plot = sample_frames(10.0, 90.0, &SampleOpts::default());
        assert!(plot.is_animated());
        assert_eq!(plot.frames.len(), 100);
        assert_eq!(plot.frames[0].angle, Angle::ZERO);
        assert_approx_eq(plot.frames[99].angle.to_degrees(), 90.0);
        assert_approx_eq(plot.frames[33].angle.to_degrees(), 30.0);
        assert_eq!(plot.outline.len(), 100);
        // First frame is the degenerate wedge.
        assert_eq!(plot.frames[0].wedge.area(), 0.0);
    }

    #[test]
    fn frames_keep_unwrapped_angle() {
        let plot = sample_frames(2.0, 450.0, &SampleOpts::default());
        assert_approx_eq(plot.last_frame().angle.to_degrees(), 450.0);
        let expected = wedge(2.0, Angle::from_degrees(90.0), 50);
        assert_same_path(&plot.last_frame().wedge, &expected);
    }

    #[test]
    fn static_is_single_frame() {
        let opts = SampleOpts::default();
        let still = sample_static(10.0, 60.0, &opts);
        assert!(!still.is_animated());
        assert_eq!(still.frames.len(), 1);
        let animated = sample_frames(10.0, 60.0, &opts);
        assert_eq!(still.last_frame().angle, Angle::from_degrees(60.0));
        assert_same_path(&still.last_frame().wedge, &animated.last_frame().wedge);
    }

    #[test]
    fn zero_frames_means_static() {
        let plot = sample_frames(1.0, 45.0, &SampleOpts::default().with_frame_count(0));
        assert_eq!(plot.frames.len(), 1);
        assert_eq!(plot.frames[0].angle, Angle::from_degrees(45.0));
    }

    #[test]
    fn custom_resolutions() {
        let opts = SampleOpts::still()
            .with_outline_resolution(12)
            .with_wedge_resolution(5)
            .with_label_distance(0.5);
        let plot = sample_frames(1.0, 180.0, &opts);
        assert_eq!(plot.outline.len(), 12);
        assert_eq!(plot.last_frame().wedge.len(), 7);
        assert!(plot
            .last_frame()
            .annotations
            .label
            .is_near(Point::new(0.0, 0.5), EPS));
    }

    #[test]
    fn wedge_len_saturates() {
        assert_eq!(wedge(1.0, Angle::ZERO, 50).len(), wedge_len(50));
        assert_eq!(wedge_len(usize::MAX), usize::MAX);
    }

    #[test]
    fn full_turn_animation_ends_empty() {
        // 360° folds to zero for drawing, so the sweep collapses on the
        // last frame while the measured area stays a full circle.
        let plot = sample_frames(10.0, 360.0, &SampleOpts::default());
        let before = &plot.frames[plot.frames.len() - 2];
        assert!(before.wedge.area() > 300.0, "{}", before.wedge.area());
        let last = plot.last_frame();
        assert_approx_eq(last.angle.to_degrees(), 360.0);
        assert_approx_eq(last.wedge.area(), 0.0);
        assert!(last.annotations.end.is_near(last.annotations.start, EPS));
        let m = crate::compute(10.0, 360.0).unwrap();
        assert_approx_eq(m.area, 100.0 * PI);
    }
}
