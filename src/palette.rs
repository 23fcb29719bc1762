// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight colors for result cards.
//!
//! The choice of color is the only nondeterministic part of a display
//! surface, so it takes its randomness from the caller.

use core::fmt;

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

/// Formats as a CSS hex color, `#RRGGBB`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A fixed set of colors to pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette(&'static [Color]);

impl Palette {
    /// Green, blue, amber, purple and pink.
    pub const CARDS: Palette = Palette(&[
        Color::rgb(0x4C, 0xAF, 0x50),
        Color::rgb(0x21, 0x96, 0xF3),
        Color::rgb(0xFF, 0xC1, 0x07),
        Color::rgb(0x9C, 0x27, 0xB0),
        Color::rgb(0xE9, 0x1E, 0x63),
    ]);

    /// A palette over the given colors.
    ///
    /// An empty palette falls back to [`Palette::CARDS`].
    pub const fn new(colors: &'static [Color]) -> Palette {
        if colors.is_empty() {
            Palette::CARDS
        } else {
            Palette(colors)
        }
    }

    /// The colors.
    pub fn colors(&self) -> &'static [Color] {
        self.0
    }

    /// The color at `index`, wrapping around.
    pub fn get(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    /// Pick a color using the provided random source.
    #[cfg(feature = "rand")]
    pub fn choose<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.get(rng.random_range(0..self.0.len()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::CARDS
    }
}
