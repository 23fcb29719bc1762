// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output.
//!
//! Plots are drawn in a y-up frame, the way sectors are usually sketched,
//! so the document flips the y axis. Animated plots use SMIL `<animate>`
//! elements, one value per frame, and stop on the last frame.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::{Annotations, Color, MarkerKind, Palette, Point, PointSequence, SectorPlot};

/// Visual parameters for [`SectorPlot::to_svg_document`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgStyle {
    /// Width and height of the document, in pixels.
    pub size: f64,
    /// Fill of the wedge.
    pub fill: Color,
    /// Stroke of the circle outline.
    pub outline: Color,
    /// Stroke of the two radii.
    pub radii: Color,
    /// Color of the A and B markers.
    pub accent: Color,
    /// Color of the θ label.
    pub label: Color,
    /// How long each animation frame is shown, in milliseconds.
    pub frame_ms: u32,
    /// Decimal places for coordinates.
    pub precision: usize,
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgStyle {
            size: 600.0,
            fill: Palette::CARDS.get(1),
            outline: Color::rgb(0xD3, 0xD3, 0xD3),
            radii: Color::rgb(0x00, 0x00, 0x8B),
            accent: Color::rgb(0xFF, 0x00, 0x00),
            label: Color::rgb(0x00, 0x64, 0x00),
            frame_ms: 50,
            precision: 4,
        }
    }
}

impl SvgStyle {
    /// Builder method for setting the wedge fill.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Builder method for setting the document size.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Builder method for setting the frame duration.
    #[must_use]
    pub fn with_frame_ms(mut self, frame_ms: u32) -> Self {
        self.frame_ms = frame_ms;
        self
    }
}

/// Display adapter writing SVG path data for a [`PointSequence`].
#[derive(Clone, Copy, Debug)]
pub struct SvgPathData<'a> {
    points: &'a [Point],
    precision: Option<usize>,
    close: bool,
}

impl SvgPathData<'_> {
    /// Limit the number of decimal places.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Add a closing `Z`.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.close = true;
        self
    }
}

impl fmt::Display for SvgPathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_char(if i == 0 { 'M' } else { 'L' })?;
            write_pair(f, p.x, p.y, self.precision)?;
        }
        if self.close && !self.points.is_empty() {
            f.write_str(" Z")?;
        }
        Ok(())
    }
}

fn write_num(f: &mut impl Write, v: f64, precision: Option<usize>) -> fmt::Result {
    // Avoid "-0" in the output.
    let v = if v == 0.0 { 0.0 } else { v };
    match precision {
        Some(prec) => write!(f, "{v:.prec$}"),
        None => write!(f, "{v}"),
    }
}

fn write_pair(f: &mut impl Write, x: f64, y: f64, precision: Option<usize>) -> fmt::Result {
    write_num(f, x, precision)?;
    f.write_char(' ')?;
    write_num(f, y, precision)
}

impl PointSequence {
    /// SVG path data for this sequence, as a display adapter.
    pub fn svg_path(&self) -> SvgPathData<'_> {
        SvgPathData {
            points: self.points(),
            precision: None,
            close: false,
        }
    }

    /// Convert the sequence to an SVG path string.
    ///
    /// Each point becomes a line segment; the first is a move. No special
    /// care is taken to produce a short string.
    ///
    /// ```
    /// use wedge::{Point, PointSequence};
    ///
    /// let seq = PointSequence::from_vec(vec![Point::new(0.0, 0.0), Point::new(1.5, 2.0)]);
    /// assert_eq!(seq.to_svg(), "M0 0 L1.5 2");
    /// ```
    pub fn to_svg(&self) -> String {
        self.svg_path().to_string()
    }
}

/// Display adapter writing a complete SVG document for a [`SectorPlot`].
#[derive(Clone, Copy, Debug)]
pub struct SvgDocument<'a> {
    plot: &'a SectorPlot,
    style: SvgStyle,
}

impl SectorPlot {
    /// The plot as an SVG document, as a display adapter.
    ///
    /// # Panics
    ///
    /// Formatting the adapter panics if the plot has no frames.
    pub fn svg(&self, style: SvgStyle) -> SvgDocument<'_> {
        SvgDocument { plot: self, style }
    }

    /// Render the plot to an SVG document string.
    ///
    /// ```
    /// use wedge::{sample_static, SampleOpts, SvgStyle};
    ///
    /// let plot = sample_static(10.0, 90.0, &SampleOpts::default());
    /// let svg = plot.to_svg_document(&SvgStyle::default());
    /// assert!(svg.starts_with("<svg"));
    /// assert!(!svg.contains("<animate"));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the plot has no frames. Plots from the sampling functions
    /// always have at least one.
    pub fn to_svg_document(&self, style: &SvgStyle) -> String {
        self.svg(*style).to_string()
    }
}

impl SvgDocument<'_> {
    fn closed_path<'p>(&self, seq: &'p PointSequence) -> SvgPathData<'p> {
        seq.svg_path().precision(self.style.precision).closed()
    }

    fn dur(&self) -> u64 {
        self.plot.frames.len() as u64 * u64::from(self.style.frame_ms)
    }

    /// Write an `<animate>` child when the plot has several frames.
    ///
    /// `value` writes the attribute value for one frame.
    fn animate<F>(&self, f: &mut fmt::Formatter<'_>, attr: &str, mut value: F) -> fmt::Result
    where
        F: FnMut(&mut fmt::Formatter<'_>, usize) -> fmt::Result,
    {
        if !self.plot.is_animated() {
            return Ok(());
        }
        write!(f, "<animate attributeName=\"{attr}\" values=\"")?;
        for i in 0..self.plot.frames.len() {
            if i > 0 {
                f.write_char(';')?;
            }
            value(f, i)?;
        }
        write!(
            f,
            "\" dur=\"{}ms\" calcMode=\"discrete\" fill=\"freeze\"/>",
            self.dur()
        )
    }

    fn radii_points(&self, f: &mut fmt::Formatter<'_>, a: &Annotations) -> fmt::Result {
        let prec = Some(self.style.precision);
        for (i, p) in a.radii().iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write_num(f, p.x, prec)?;
            f.write_char(',')?;
            write_num(f, p.y, prec)?;
        }
        Ok(())
    }

    fn dot(
        &self,
        f: &mut fmt::Formatter<'_>,
        kind: MarkerKind,
        pick: fn(&Annotations) -> Point,
    ) -> fmt::Result {
        let prec = Some(self.style.precision);
        let last = pick(&self.plot.last_frame().annotations);
        let color = match kind {
            MarkerKind::Center => Color::rgb(0, 0, 0),
            _ => self.style.accent,
        };
        f.write_str("<circle cx=\"")?;
        write_num(f, last.x, prec)?;
        f.write_str("\" cy=\"")?;
        write_num(f, last.y, prec)?;
        f.write_str("\" r=\"")?;
        write_num(f, 0.02 * self.plot.radius.abs(), prec)?;
        write!(f, "\" fill=\"{color}\">")?;
        self.animate(f, "cx", |f, i| {
            write_num(f, pick(&self.plot.frames[i].annotations).x, prec)
        })?;
        self.animate(f, "cy", |f, i| {
            write_num(f, pick(&self.plot.frames[i].annotations).y, prec)
        })?;
        f.write_str("</circle>\n")
    }

    /// Text is written outside the flipped group so it reads upright, with
    /// y negated by hand.
    fn label(
        &self,
        f: &mut fmt::Formatter<'_>,
        kind: MarkerKind,
        pick: fn(&Annotations) -> Point,
    ) -> fmt::Result {
        let prec = Some(self.style.precision);
        let r = self.plot.radius.abs();
        let (dx, dy, anchor, color, scale) = match kind {
            MarkerKind::Center => (0.04, -0.08, "start", Color::rgb(0, 0, 0), 0.07),
            MarkerKind::Start => (0.04, 0.06, "start", self.style.accent, 0.07),
            MarkerKind::End => (-0.04, 0.06, "end", self.style.accent, 0.07),
            MarkerKind::Label => (0.0, 0.0, "middle", self.style.label, 0.1),
        };
        let tx = |p: Point| p.x + dx * r;
        let ty = |p: Point| -(p.y + dy * r);
        let last = pick(&self.plot.last_frame().annotations);

        f.write_str("<text x=\"")?;
        write_num(f, tx(last), prec)?;
        f.write_str("\" y=\"")?;
        write_num(f, ty(last), prec)?;
        write!(
            f,
            "\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\" font-size=\""
        )?;
        write_num(f, scale * r, prec)?;
        write!(f, "\" fill=\"{color}\">")?;
        self.animate(f, "x", |f, i| {
            write_num(f, tx(pick(&self.plot.frames[i].annotations)), prec)
        })?;
        self.animate(f, "y", |f, i| {
            write_num(f, ty(pick(&self.plot.frames[i].annotations)), prec)
        })?;
        writeln!(f, "{}</text>", kind.text())
    }
}

const MARKERS: [(MarkerKind, fn(&Annotations) -> Point); 4] = [
    (MarkerKind::Center, |a| a.center),
    (MarkerKind::Start, |a| a.start),
    (MarkerKind::End, |a| a.end),
    (MarkerKind::Label, |a| a.label),
];

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = Some(self.style.precision);
        let plot = self.plot;
        let half = 1.2 * plot.radius.abs();
        let stroke = 0.01 * plot.radius.abs();
        let last = plot.last_frame();

        f.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"")?;
        write_num(f, self.style.size, Some(0))?;
        f.write_str("\" height=\"")?;
        write_num(f, self.style.size, Some(0))?;
        f.write_str("\" viewBox=\"")?;
        write_pair(f, -half, -half, prec)?;
        f.write_char(' ')?;
        write_pair(f, 2.0 * half, 2.0 * half, prec)?;
        f.write_str("\">\n")?;
        f.write_str("<g transform=\"scale(1,-1)\" stroke-linejoin=\"round\">\n")?;

        // Wedge first, so everything else draws over it.
        write!(
            f,
            "<path d=\"{}\" fill=\"{}\" fill-opacity=\"0.5\" stroke=\"none\">",
            self.closed_path(&last.wedge),
            self.style.fill
        )?;
        self.animate(f, "d", |f, i| {
            write!(f, "{}", self.closed_path(&plot.frames[i].wedge))
        })?;
        f.write_str("</path>\n")?;

        write!(
            f,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"",
            self.closed_path(&plot.outline),
            self.style.outline
        )?;
        write_num(f, stroke, prec)?;
        f.write_str("\"/>\n")?;

        f.write_str("<polyline points=\"")?;
        self.radii_points(f, &last.annotations)?;
        write!(f, "\" fill=\"none\" stroke=\"{}\" stroke-width=\"", self.style.radii)?;
        write_num(f, stroke, prec)?;
        f.write_str("\">")?;
        self.animate(f, "points", |f, i| {
            self.radii_points(f, &plot.frames[i].annotations)
        })?;
        f.write_str("</polyline>\n")?;

        for &(kind, pick) in &MARKERS {
            if kind != MarkerKind::Label {
                self.dot(f, kind, pick)?;
            }
        }
        f.write_str("</g>\n")?;
        for &(kind, pick) in &MARKERS {
            self.label(f, kind, pick)?;
        }
        f.write_str("</svg>\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample_frames, sample_static, SampleOpts};

    #[test]
    fn path_data() {
        let seq = PointSequence::from_vec(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, -0.0),
            Point::new(0.3, 2.0),
        ]);
        assert_eq!(seq.to_svg(), "M0 0 L1 0 L0.3 2");
        assert_eq!(
            seq.svg_path().precision(1).closed().to_string(),
            "M0.0 0.0 L1.0 0.0 L0.3 2.0 Z"
        );
        assert_eq!(PointSequence::new().svg_path().closed().to_string(), "");
    }

    #[test]
    fn static_document() {
        let plot = sample_static(10.0, 90.0, &SampleOpts::default());
        let svg = plot.to_svg_document(&SvgStyle::default());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\""));
        assert!(svg.contains("viewBox=\"-12.0000 -12.0000 24.0000 24.0000\""));
        assert!(svg.contains("fill=\"#2196F3\""));
        assert!(!svg.contains("<animate"));
        // B sits straight up; the label is drawn with y negated.
        assert!(svg.contains("<circle cx=\"0.0000\" cy=\"10.0000\""), "{svg}");
        for text in ["O</text>", "A</text>", "B</text>", "θ</text>"] {
            assert!(svg.contains(text), "missing {text}");
        }
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn animated_document() {
        let opts = SampleOpts::default().with_frame_count(4);
        let plot = sample_frames(2.0, 90.0, &opts);
        let style = SvgStyle::default().with_frame_ms(25).with_fill(Palette::CARDS.get(0));
        let svg = plot.to_svg_document(&style);
        assert!(svg.contains("fill=\"#4CAF50\""));
        assert!(svg.contains("dur=\"100ms\""));
        assert!(svg.contains("attributeName=\"d\""));
        assert!(svg.contains("attributeName=\"points\""));
        // Center marker stays put, but still animates (with constant values).
        let values = svg.matches("attributeName=\"cx\" values=\"").count();
        assert_eq!(values, 3);
        // First frame of B sits on A.
        assert!(svg.contains("attributeName=\"cx\" values=\"2.0000;"));
    }

    #[test]
    #[should_panic(expected = "sector plot has no frames")]
    fn document_without_frames() {
        let mut plot = sample_static(1.0, 90.0, &SampleOpts::default());
        plot.frames.clear();
        let _ = plot.to_svg_document(&SvgStyle::default());
    }
}
