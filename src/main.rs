// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line front end: prints the arc length and sector area, and can
//! write the (optionally animated) chart as SVG.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use wedge::report::{FormulaNotes, Report};
use wedge::{CircleSpec, Palette, SampleOpts, SvgStyle};

/// Upper bound for frame counts and resolutions.
const MAX_SAMPLES: u64 = 100_000;

fn samples() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(..=MAX_SAMPLES)
}

#[derive(Parser, Debug)]
#[command(name = "wedge")]
#[command(author, version, about = "Arc length and sector area of a circle")]
struct Args {
    /// Radius of the circle
    #[arg(default_value = "10.0", allow_negative_numbers = true)]
    radius: f64,

    /// Central angle in degrees
    #[arg(default_value = "90.0", allow_negative_numbers = true)]
    angle: f64,

    /// Write the chart to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Draw only the final angle instead of animating
    #[arg(long = "static")]
    still: bool,

    /// Number of animation frames
    #[arg(long, default_value = "100", value_parser = samples())]
    frames: usize,

    /// Points on the circle outline
    #[arg(long, default_value = "100", value_parser = samples())]
    outline_resolution: usize,

    /// Points on the arc of the wedge
    #[arg(long, default_value = "50", value_parser = samples())]
    wedge_resolution: usize,

    /// Milliseconds per animation frame
    #[arg(long, default_value = "50")]
    frame_ms: u32,

    /// Seed for the highlight color; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print an explanation of the formulas and exit
    #[arg(long)]
    notes: bool,
}

impl Args {
    fn sample_opts(&self) -> SampleOpts {
        let opts = SampleOpts::default()
            .with_outline_resolution(self.outline_resolution)
            .with_wedge_resolution(self.wedge_resolution);
        if self.still {
            opts.with_frame_count(1)
        } else {
            opts.with_frame_count(self.frames)
        }
    }

    fn style(&self) -> SvgStyle {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        SvgStyle::default()
            .with_fill(Palette::CARDS.choose(&mut rng))
            .with_frame_ms(self.frame_ms)
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<ExitCode> {
    if args.notes {
        writeln!(out, "{}", FormulaNotes)?;
        return Ok(ExitCode::SUCCESS);
    }

    let spec = CircleSpec::new(args.radius, args.angle);
    let report = Report::new(spec);
    writeln!(out, "{report}")?;
    if let Err(err) = report.outcome {
        error!(%err, "cannot draw sector");
        return Ok(ExitCode::FAILURE);
    }

    if let Some(path) = &args.svg {
        let style = args.style();
        let plot = spec.plot(&args.sample_opts())?;
        std::fs::write(path, plot.to_svg_document(&style))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            path = %path.display(),
            frames = plot.frames.len(),
            fill = %style.fill,
            "wrote chart"
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wedge=info".parse()?),
        )
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");
    run(&args, &mut std::io::stdout().lock())
}
