//! Canvas: a hit buffer paired with a glyph encoding

use std::io::Write;

use tracing::debug;

use super::color::Color;
use super::grid::HitGrid;
use super::rasterizer::{AnyRasterizer, Cell, Encoding, Rasterizer};
use crate::errors::Result;
use crate::style::Styler;

/// Terminal canvas accepting normalized coordinates
///
/// Hits persist until the canvas is dropped; rendering never consumes them
/// and can be repeated.
#[derive(Debug, Clone)]
pub struct Canvas {
    grid: HitGrid,
    encoding: Encoding,
}

impl Canvas {
    /// Create a canvas of `columns x rows` cells
    pub fn new(columns: u32, rows: u32, encoding: Encoding) -> Result<Self> {
        let (sub_x, sub_y) = encoding.subpixels();
        let grid = HitGrid::new(columns, rows, sub_x, sub_y)?;
        debug!(
            "Created {} canvas of {}x{} cells ({}x{} sub-pixels)",
            encoding,
            columns,
            rows,
            grid.pixel_width(),
            grid.pixel_height()
        );
        Ok(Self { grid, encoding })
    }

    /// Width in cells
    pub fn columns(&self) -> u32 {
        self.grid.columns()
    }

    /// Height in cells
    pub fn rows_count(&self) -> u32 {
        self.grid.rows()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Underlying hit buffer
    pub fn grid(&self) -> &HitGrid {
        &self.grid
    }

    /// Total number of recorded hits
    pub fn hit_count(&self) -> usize {
        self.grid.hit_count()
    }

    /// Record a single hit; out of range coordinates are dropped
    pub fn hit(&mut self, x: f64, y: f64, color: Option<Color>) -> bool {
        self.grid.hit(x, y, color)
    }

    /// Plot isolated points
    pub fn points(&mut self, xs: &[f64], ys: &[f64], color: Option<Color>) -> Result<&mut Self> {
        self.grid.points(xs, ys, color)?;
        Ok(self)
    }

    /// Plot connected segments
    pub fn lines(&mut self, xs: &[f64], ys: &[f64], color: Option<Color>) -> Result<&mut Self> {
        self.grid.lines(xs, ys, color)?;
        Ok(self)
    }

    /// Lazy styled rows using the process-wide color toggle
    pub fn rows(&self) -> Rows<'_> {
        self.rows_with(Styler::current())
    }

    /// Lazy styled rows using an explicit styler
    pub fn rows_with(&self, styler: Styler) -> Rows<'_> {
        let mut rasterizer = self.encoding.rasterizer();
        rasterizer.prepare(&self.grid);
        debug!("Rendering {} hits with {} encoding", self.hit_count(), self.encoding);
        Rows {
            grid: &self.grid,
            rasterizer,
            styler,
            next: 0,
        }
    }

    /// All rows as strings
    pub fn render(&self) -> Vec<String> {
        self.rows().collect()
    }

    /// Unstyled cells, row by row
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        let mut rows = self.rows_with(Styler::plain());
        let mut out = Vec::with_capacity(self.rows_count() as usize);
        while let Some(row) = rows.next_cells() {
            out.push(row);
        }
        out
    }

    /// Write every row followed by a newline
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        for row in self.rows() {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

/// Row-by-row rendering of a canvas
///
/// Borrows the canvas read-only, so independent passes never interfere.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    grid: &'a HitGrid,
    rasterizer: AnyRasterizer,
    styler: Styler,
    next: u32,
}

impl Rows<'_> {
    /// Next row as cells, without styling
    pub fn next_cells(&mut self) -> Option<Vec<Cell>> {
        if self.next >= self.grid.rows() {
            return None;
        }
        let cy = self.next;
        self.next += 1;
        Some(
            (0..self.grid.columns())
                .map(|cx| self.rasterizer.render(&self.grid.cell(cx, cy)))
                .collect(),
        )
    }
}

impl Iterator for Rows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let cells = self.next_cells()?;
        let mut row = String::with_capacity(cells.len() * 4);
        for cell in cells {
            let mut buf = [0u8; 4];
            row.push_str(&self.styler.paint(cell.glyph.encode_utf8(&mut buf), cell.color));
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.rows().saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rows<'_> {}
