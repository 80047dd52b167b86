//! Dot rasterizer - two stacked sub-pixels per cell

use super::grid::CellHits;
use super::rasterizer::{Cell, Rasterizer};

/// Rasterizer drawing `.`, `'` and `:`
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRasterizer;

impl DotRasterizer {
    pub const X_PIXEL_PER_CHAR: u32 = 1;
    pub const Y_PIXEL_PER_CHAR: u32 = 2;

    pub fn new() -> Self {
        Self
    }

    /// Glyph for the occupancy of the top and bottom halves
    pub const fn glyph(top: bool, bottom: bool) -> char {
        match (top, bottom) {
            (false, false) => ' ',
            (false, true) => '.',
            (true, false) => '\'',
            (true, true) => ':',
        }
    }
}

impl Rasterizer for DotRasterizer {
    fn subpixels(&self) -> (u32, u32) {
        (Self::X_PIXEL_PER_CHAR, Self::Y_PIXEL_PER_CHAR)
    }

    fn render(&self, cell: &CellHits<'_>) -> Cell {
        let top = !cell.slot(0, 0).is_empty();
        let bottom = !cell.slot(0, 1).is_empty();
        Cell::new(Self::glyph(top, bottom), cell.latest_color())
    }

    fn empty_glyph(&self) -> char {
        ' '
    }
}
