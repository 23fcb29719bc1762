// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc length and area of circular sectors, with sampled geometry for
//! plotting them.
//!
//! A sector is the pie slice cut from a circle by two radii. Given the
//! radius and the central angle in degrees, [`compute`] returns the length
//! of its arc and its area:
//!
//! ```
//! let m = wedge::compute(10.0, 360.0).unwrap();
//! // A full turn is the whole circle.
//! assert!((m.arc_length - 62.8319).abs() < 1e-4);
//! assert!((m.area - 314.1593).abs() < 1e-4);
//! ```
//!
//! For drawing, the sampler produces point sequences for the circle
//! outline and the wedge, plus named annotation points, for one static
//! frame or a sequence of frames sweeping from zero up to the angle:
//!
//! ```
//! use wedge::{CircleSpec, SampleOpts, SvgStyle};
//!
//! let spec = CircleSpec::new(10.0, 90.0);
//! let plot = spec.plot(&SampleOpts::default()).unwrap();
//! assert_eq!(plot.frames.len(), 100);
//! let svg = plot.to_svg_document(&SvgStyle::default());
//! assert!(svg.contains("<animate"));
//! ```
//!
//! Measurements use the angle as given, so 450° measures one and a quarter
//! turns. Drawings fold the angle into a single turn, so 450° is drawn the
//! same as 90°, and -90° the same as 270°.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate still uses `alloc` regardless.
//!
//! The `rand` feature enables `Palette::choose`, and the `cli` feature
//! builds the `wedge` command-line tool.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::many_single_char_names,
    reason = "geometry code uses the usual one-letter names"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("wedge requires either the `std` or `libm` feature");

extern crate alloc;

mod angle;
pub mod common;
mod metrics;
mod palette;
mod point;
mod point_seq;
pub mod report;
mod sample;
mod sector;
mod svg;
mod vec2;

pub use crate::angle::*;
pub use crate::metrics::*;
pub use crate::palette::*;
pub use crate::point::*;
pub use crate::point_seq::*;
pub use crate::sample::*;
pub use crate::sector::*;
pub use crate::svg::*;
pub use crate::vec2::*;
