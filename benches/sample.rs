// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for sector sampling.

// Note: needs a nightly toolchain, run with `RUSTFLAGS="--cfg nightly" cargo +nightly bench`.
#![cfg(nightly)]
#![feature(test)]
extern crate test;
use test::{black_box, Bencher};

use wedge::*;

#[bench]
fn bench_compute(b: &mut Bencher) {
    b.iter(|| compute(black_box(10.0), black_box(123.4)));
}

#[bench]
fn bench_sample_static(b: &mut Bencher) {
    let opts = SampleOpts::still();
    b.iter(|| sample_static(black_box(10.0), black_box(123.4), &opts));
}

#[bench]
fn bench_sample_frames(b: &mut Bencher) {
    let opts = SampleOpts::default();
    b.iter(|| sample_frames(black_box(10.0), black_box(123.4), &opts));
}

#[bench]
fn bench_svg_document(b: &mut Bencher) {
    let plot = sample_frames(10.0, 123.4, &SampleOpts::default());
    let style = SvgStyle::default();
    b.iter(|| black_box(&plot).to_svg_document(&style));
}
