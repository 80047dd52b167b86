//! Hit buffer with sub-pixel resolution
//!
//! Normalized coordinates in `[0, 1] x [0, 1]` (y pointing up) are quantized
//! onto a buffer of `columns * sub_x` by `rows * sub_y` sub-pixels (row 0 at
//! the top). Each sub-pixel keeps every hit that landed on it, in insertion
//! order.

use tracing::trace;

use super::color::Color;
use super::hit::{latest_color, Hit};
use crate::errors::{PlotError, Result};

/// Sub-pixel hit buffer
#[derive(Debug, Clone)]
pub struct HitGrid {
    columns: u32,
    rows: u32,
    sub_x: u32,
    sub_y: u32,
    /// Row-major slots, `pixel_height` rows of `pixel_width` slots
    slots: Vec<Vec<Hit>>,
    next_seq: u64,
}

impl HitGrid {
    /// Allocate an empty buffer for `columns x rows` cells of `sub_x x sub_y` sub-pixels
    pub fn new(columns: u32, rows: u32, sub_x: u32, sub_y: u32) -> Result<Self> {
        let invalid = || PlotError::InvalidCanvasSize { columns, rows };
        if columns == 0 || rows == 0 || sub_x == 0 || sub_y == 0 {
            return Err(invalid());
        }
        let width = columns.checked_mul(sub_x).ok_or_else(invalid)?;
        let height = rows.checked_mul(sub_y).ok_or_else(invalid)?;
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(invalid)?;

        Ok(Self {
            columns,
            rows,
            sub_x,
            sub_y,
            slots: vec![Vec::new(); size],
            next_seq: 0,
        })
    }

    /// Width in cells
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Height in cells
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Sub-pixels per cell as `(x, y)`
    pub fn subpixels(&self) -> (u32, u32) {
        (self.sub_x, self.sub_y)
    }

    /// Width in sub-pixels
    pub fn pixel_width(&self) -> u32 {
        self.columns * self.sub_x
    }

    /// Height in sub-pixels
    pub fn pixel_height(&self) -> u32 {
        self.rows * self.sub_y
    }

    /// Quantize normalized coordinates to an absolute sub-pixel `(px, py)`
    ///
    /// Returns `None` for coordinates that fall outside the buffer or are not
    /// finite. Values are rounded, not clamped.
    pub fn locate(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let max_px = f64::from(self.pixel_width() - 1);
        let max_py = f64::from(self.pixel_height() - 1);
        let px = (x * max_px).round();
        let py = ((1.0 - y) * max_py).round();
        if px < 0.0 || py < 0.0 || px > max_px || py > max_py {
            return None;
        }
        Some((px as u32, py as u32))
    }

    /// Record a hit at normalized `(x, y)`; returns whether it was kept
    pub fn hit(&mut self, x: f64, y: f64, color: Option<Color>) -> bool {
        let Some((px, py)) = self.locate(x, y) else {
            trace!("Dropping out of bounds hit at ({}, {})", x, y);
            return false;
        };
        let idx = self.index(px, py);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[idx].push(Hit::new(x, y, color, seq));
        true
    }

    /// Hit every `(xs[i], ys[i])` pair in order
    pub fn points(&mut self, xs: &[f64], ys: &[f64], color: Option<Color>) -> Result<&mut Self> {
        check_lengths(xs, ys)?;
        for (&x, &y) in xs.iter().zip(ys) {
            self.hit(x, y, color);
        }
        Ok(self)
    }

    /// Draw straight segments between consecutive points
    pub fn lines(&mut self, xs: &[f64], ys: &[f64], color: Option<Color>) -> Result<&mut Self> {
        check_lengths(xs, ys)?;
        if xs.len() < 2 {
            return Err(PlotError::TooFewPoints(xs.len()));
        }
        for i in 0..xs.len() - 1 {
            self.line(xs[i], ys[i], xs[i + 1], ys[i + 1], color);
        }
        Ok(self)
    }

    /// Number of steps a segment is split into by [`HitGrid::line`]
    ///
    /// At least one step per sub-pixel crossed along the dominant axis.
    pub fn line_steps(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> u64 {
        let w = (x2 - x1).abs() * f64::from(self.pixel_width());
        let h = (y2 - y1).abs() * f64::from(self.pixel_height());
        w.ceil().max(h.ceil()) as u64
    }

    /// Digital Differential Analyzer: `n + 1` hits from `(x1, y1)` to `(x2, y2)`
    ///
    /// Only the steps that can land on the buffer are visited; the others
    /// would be dropped by [`HitGrid::hit`] anyway.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Option<Color>) {
        let (w, h) = (x2 - x1, y2 - y1);
        if ![x1, y1, w, h].iter().all(|v| v.is_finite()) {
            trace!("Skipping segment with non-finite extent");
            return;
        }
        let n = self.line_steps(x1, y1, x2, y2);
        let Some((first, last)) = self.visible_steps(x1, y1, w, h, n) else {
            trace!("Segment ({}, {})-({}, {}) misses the canvas", x1, y1, x2, y2);
            return;
        };
        let (dx, dy) = if n == 0 {
            (0.0, 0.0)
        } else {
            (w / n as f64, h / n as f64)
        };
        for i in first..=last {
            let t = i as f64;
            self.hit(x1 + dx * t, y1 + dy * t, color);
        }
    }

    /// Range of DDA steps `i` in `0..=n` whose samples can fall on the buffer
    ///
    /// Clips the parameter `t = i / n` against the band of normalized values
    /// that round into the buffer, one axis at a time (Liang-Barsky). The range
    /// is widened by one step on each side to absorb float error.
    fn visible_steps(&self, x1: f64, y1: f64, w: f64, h: f64, n: u64) -> Option<(u64, u64)> {
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (start, delta, pixels) in [(x1, w, self.pixel_width()), (y1, h, self.pixel_height())] {
            // a single sub-pixel accepts every finite value
            if pixels <= 1 {
                continue;
            }
            let margin = 0.5 / f64::from(pixels - 1);
            let (lo, hi) = (-margin, 1.0 + margin);
            if delta.abs() < f64::MIN_POSITIVE {
                if start < lo || start > hi {
                    return None;
                }
                continue;
            }
            let a = (lo - start) / delta;
            let b = (hi - start) / delta;
            t0 = t0.max(a.min(b));
            t1 = t1.min(a.max(b));
        }
        if t0 > t1 {
            return None;
        }
        let steps = n as f64;
        let first = ((t0 * steps).floor() as u64).saturating_sub(1);
        let last = ((t1 * steps).ceil() as u64).saturating_add(1).min(n);
        Some((first, last))
    }

    /// Hits stored at absolute sub-pixel `(px, py)`
    pub fn slot(&self, px: u32, py: u32) -> &[Hit] {
        &self.slots[self.index(px, py)]
    }

    /// Every slot of the buffer, row by row
    pub fn slots(&self) -> impl Iterator<Item = &[Hit]> + '_ {
        self.slots.iter().map(Vec::as_slice)
    }

    /// Sub-grid of slots covering cell `(cx, cy)`
    pub fn cell(&self, cx: u32, cy: u32) -> CellHits<'_> {
        debug_assert!(cx < self.columns && cy < self.rows);
        CellHits { grid: self, cx, cy }
    }

    /// Total number of recorded hits
    pub fn hit_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    #[inline]
    fn index(&self, px: u32, py: u32) -> usize {
        py as usize * self.pixel_width() as usize + px as usize
    }
}

fn check_lengths(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() == ys.len() {
        Ok(())
    } else {
        Err(PlotError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        })
    }
}

/// Read-only view of the `sub_x x sub_y` slots of one cell
#[derive(Debug, Clone, Copy)]
pub struct CellHits<'a> {
    grid: &'a HitGrid,
    cx: u32,
    cy: u32,
}

impl<'a> CellHits<'a> {
    /// Slot at sub-column `i`, sub-row `j` (row 0 at the top of the cell)
    pub fn slot(&self, i: u32, j: u32) -> &'a [Hit] {
        let px = self.cx * self.grid.sub_x + i;
        let py = self.cy * self.grid.sub_y + j;
        self.grid.slot(px, py)
    }

    /// All slots of the cell, y-major then x-minor
    pub fn slots(&self) -> impl Iterator<Item = &'a [Hit]> + 'a {
        let this = *self;
        (0..self.grid.sub_y).flat_map(move |j| (0..this.grid.sub_x).map(move |i| this.slot(i, j)))
    }

    /// Number of hits across the cell
    pub fn count(&self) -> usize {
        self.slots().map(|slot| slot.len()).sum()
    }

    /// Color of the most recently added hit in the cell
    pub fn latest_color(&self) -> Option<Color> {
        latest_color(self.slots())
    }
}
