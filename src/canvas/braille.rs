//! Braille rasterizer - 2x4 dots per cell
//!
//! Each sub-pixel maps to one bit of a Unicode Braille pattern (U+2800 block):
//!
//! ```text
//! 0x01 0x08
//! 0x02 0x10
//! 0x04 0x20
//! 0x40 0x80
//! ```

use super::grid::CellHits;
use super::rasterizer::{Cell, Rasterizer};

/// Braille pattern rasterizer
#[derive(Debug, Clone, Copy, Default)]
pub struct BrailleRasterizer;

impl BrailleRasterizer {
    pub const X_PIXEL_PER_CHAR: u32 = 2;
    pub const Y_PIXEL_PER_CHAR: u32 = 4;

    /// Blank Braille pattern
    pub const FILL: u32 = 0x2800;

    /// Bit of each dot, indexed `[row][column]`
    const BITS: [[u32; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

    pub fn new() -> Self {
        Self
    }

    fn pattern(cell: &CellHits<'_>) -> u32 {
        let mut code = Self::FILL;
        for (j, row) in Self::BITS.iter().enumerate() {
            for (i, bit) in row.iter().enumerate() {
                if !cell.slot(i as u32, j as u32).is_empty() {
                    code |= *bit;
                }
            }
        }
        code
    }
}

impl Rasterizer for BrailleRasterizer {
    fn subpixels(&self) -> (u32, u32) {
        (Self::X_PIXEL_PER_CHAR, Self::Y_PIXEL_PER_CHAR)
    }

    fn render(&self, cell: &CellHits<'_>) -> Cell {
        // Every code point in U+2800..=U+28FF is a valid char
        let glyph = char::from_u32(Self::pattern(cell)).unwrap_or(self.empty_glyph());
        Cell::new(glyph, cell.latest_color())
    }

    fn empty_glyph(&self) -> char {
        '\u{2800}'
    }
}
