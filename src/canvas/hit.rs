//! Recorded samples in the hit buffer

use super::color::Color;

/// A single point or line sample that quantized into a sub-pixel
///
/// Coordinates are the normalized values passed by the caller, before
/// quantization. `seq` is the canvas-wide insertion order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub x: f64,
    pub y: f64,
    pub color: Option<Color>,
    pub seq: u64,
}

impl Hit {
    #[inline]
    pub const fn new(x: f64, y: f64, color: Option<Color>, seq: u64) -> Self {
        Self { x, y, color, seq }
    }
}

/// Color of the most recently added hit among several slots
///
/// Ordering is by insertion sequence only, never by position.
pub fn latest_color<'a, I>(slots: I) -> Option<Color>
where
    I: IntoIterator<Item = &'a [Hit]>,
{
    slots
        .into_iter()
        .flat_map(|slot| slot.iter())
        .max_by_key(|hit| hit.seq)
        .and_then(|hit| hit.color)
}
