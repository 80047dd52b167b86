//! Rasterizer trait for converting a cell's hits to a glyph

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::braille::BrailleRasterizer;
use super::color::Color;
use super::density::DensityRasterizer;
use super::dot::DotRasterizer;
use super::grid::{CellHits, HitGrid};
use crate::errors::PlotError;

/// A single rendered terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character to display
    pub glyph: char,
    /// Foreground color, if any
    pub color: Option<Color>,
}

impl Cell {
    #[inline]
    pub const fn new(glyph: char, color: Option<Color>) -> Self {
        Self { glyph, color }
    }
}

/// Trait for glyph-encoding strategies
pub trait Rasterizer {
    /// Sub-pixels per cell as `(x, y)`
    fn subpixels(&self) -> (u32, u32);

    /// Inspect the whole buffer before any cell is rendered
    fn prepare(&mut self, _grid: &HitGrid) {}

    /// Collapse the hits of one cell into a glyph and a color
    fn render(&self, cell: &CellHits<'_>) -> Cell;

    /// Glyph of a cell without hits
    fn empty_glyph(&self) -> char;
}

/// Glyph encoding, selected by name when a canvas is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// 1x1 density ramp of ASCII characters
    Ascii,
    /// 2x4 Braille dot patterns
    #[default]
    Braille,
    /// 1x2 stacked dots
    Dot,
    /// 1x1 density ramp of shade blocks
    Density,
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [
        Encoding::Ascii,
        Encoding::Braille,
        Encoding::Dot,
        Encoding::Density,
    ];

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Braille => "braille",
            Encoding::Dot => "dot",
            Encoding::Density => "density",
        }
    }

    /// Sub-pixels per cell as `(x, y)`
    pub const fn subpixels(self) -> (u32, u32) {
        match self {
            Encoding::Braille => (
                BrailleRasterizer::X_PIXEL_PER_CHAR,
                BrailleRasterizer::Y_PIXEL_PER_CHAR,
            ),
            Encoding::Dot => (DotRasterizer::X_PIXEL_PER_CHAR, DotRasterizer::Y_PIXEL_PER_CHAR),
            Encoding::Ascii | Encoding::Density => (1, 1),
        }
    }

    /// Fresh strategy for one render pass
    pub fn rasterizer(self) -> AnyRasterizer {
        match self {
            Encoding::Ascii => {
                AnyRasterizer::Density(DensityRasterizer::new(DensityRasterizer::ASCII))
            }
            Encoding::Braille => AnyRasterizer::Braille(BrailleRasterizer::new()),
            Encoding::Dot => AnyRasterizer::Dot(DotRasterizer::new()),
            Encoding::Density => {
                AnyRasterizer::Density(DensityRasterizer::new(DensityRasterizer::SHADES))
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlotError::UnknownEncoding(Arc::new(s.to_string())))
    }
}

/// Enum dispatch over the available strategies
#[derive(Debug, Clone)]
pub enum AnyRasterizer {
    Braille(BrailleRasterizer),
    Dot(DotRasterizer),
    Density(DensityRasterizer),
}

impl Rasterizer for AnyRasterizer {
    fn subpixels(&self) -> (u32, u32) {
        match self {
            AnyRasterizer::Braille(r) => r.subpixels(),
            AnyRasterizer::Dot(r) => r.subpixels(),
            AnyRasterizer::Density(r) => r.subpixels(),
        }
    }

    fn prepare(&mut self, grid: &HitGrid) {
        match self {
            AnyRasterizer::Braille(r) => r.prepare(grid),
            AnyRasterizer::Dot(r) => r.prepare(grid),
            AnyRasterizer::Density(r) => r.prepare(grid),
        }
    }

    fn render(&self, cell: &CellHits<'_>) -> Cell {
        match self {
            AnyRasterizer::Braille(r) => r.render(cell),
            AnyRasterizer::Dot(r) => r.render(cell),
            AnyRasterizer::Density(r) => r.render(cell),
        }
    }

    fn empty_glyph(&self) -> char {
        match self {
            AnyRasterizer::Braille(r) => r.empty_glyph(),
            AnyRasterizer::Dot(r) => r.empty_glyph(),
            AnyRasterizer::Density(r) => r.empty_glyph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ascii", Encoding::Ascii)]
    #[case("braille", Encoding::Braille)]
    #[case("Dot", Encoding::Dot)]
    #[case(" density ", Encoding::Density)]
    fn test_parse_encoding(#[case] name: &str, #[case] expected: Encoding) {
        assert_eq!(name.parse::<Encoding>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_encoding_names_value() {
        let err = "sextant".parse::<Encoding>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("sextant"));
    }

    #[test]
    fn test_subpixels_match_strategy() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.subpixels(), encoding.rasterizer().subpixels());
        }
        assert_eq!(Encoding::Braille.subpixels(), (2, 4));
        assert_eq!(Encoding::Dot.subpixels(), (1, 2));
        assert_eq!(Encoding::Density.subpixels(), (1, 1));
    }
}
