//! Density rasterizer - one sub-pixel per cell, shaded by hit count
//!
//! The glyph is picked from a ramp by the cell's hit count relative to the
//! busiest cell of the whole buffer, so `prepare` must run first.

use super::grid::{CellHits, HitGrid};
use super::rasterizer::{Cell, Rasterizer};

/// Ramp-based density rasterizer, shared by the ascii and density encodings
#[derive(Debug, Clone)]
pub struct DensityRasterizer {
    ramp: &'static [char],
    max: usize,
}

impl DensityRasterizer {
    /// Shade blocks from empty to full
    pub const SHADES: &'static [char] = &[' ', '\u{2591}', '\u{2592}', '\u{2593}', '\u{2588}'];

    /// Plain ASCII ramp from empty to full
    pub const ASCII: &'static [char] = &[' ', '.', ':', '*', '#'];

    pub fn new(ramp: &'static [char]) -> Self {
        debug_assert!(!ramp.is_empty());
        Self { ramp, max: 0 }
    }

    /// Highest slot occupancy seen by `prepare`
    pub fn max(&self) -> usize {
        self.max
    }

    /// Ramp index for a cell holding `count` hits
    pub fn level(&self, count: usize) -> usize {
        if self.max == 0 {
            return 0;
        }
        let top = (self.ramp.len() - 1) as f64;
        let level = (count as f64 / self.max as f64 * top).round() as usize;
        level.min(self.ramp.len() - 1)
    }
}

impl Rasterizer for DensityRasterizer {
    fn subpixels(&self) -> (u32, u32) {
        (1, 1)
    }

    fn prepare(&mut self, grid: &HitGrid) {
        self.max = grid.slots().map(|slot| slot.len()).max().unwrap_or(0);
    }

    fn render(&self, cell: &CellHits<'_>) -> Cell {
        let glyph = self.ramp[self.level(cell.count())];
        Cell::new(glyph, cell.latest_color())
    }

    fn empty_glyph(&self) -> char {
        self.ramp[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::color::Color;

    #[test]
    fn test_empty_buffer_renders_level_zero() {
        let grid = HitGrid::new(3, 1, 1, 1).unwrap();
        let mut r = DensityRasterizer::new(DensityRasterizer::SHADES);
        r.prepare(&grid);
        assert_eq!(r.max(), 0);
        assert_eq!(r.render(&grid.cell(1, 0)), Cell::new(' ', None));
    }

    #[test]
    fn test_levels_relative_to_busiest_cell() {
        let mut grid = HitGrid::new(3, 1, 1, 1).unwrap();
        for _ in 0..4 {
            grid.hit(0.0, 0.5, Some(Color::Red));
        }
        grid.hit(0.5, 0.5, Some(Color::Green));
        grid.hit(0.5, 0.5, Some(Color::Yellow));

        let mut r = DensityRasterizer::new(DensityRasterizer::SHADES);
        r.prepare(&grid);
        assert_eq!(r.max(), 4);
        assert_eq!(r.render(&grid.cell(0, 0)), Cell::new('\u{2588}', Some(Color::Red)));
        // 2 / 4 * 4 = 2
        assert_eq!(r.render(&grid.cell(1, 0)), Cell::new('\u{2592}', Some(Color::Yellow)));
        assert_eq!(r.render(&grid.cell(2, 0)).glyph, ' ');
    }

    #[test]
    fn test_ascii_ramp() {
        let mut grid = HitGrid::new(1, 1, 1, 1).unwrap();
        grid.hit(0.5, 0.5, None);
        let mut r = DensityRasterizer::new(DensityRasterizer::ASCII);
        r.prepare(&grid);
        assert_eq!(r.render(&grid.cell(0, 0)).glyph, '#');
        assert_eq!(r.empty_glyph(), ' ');
    }
}
