//! # Canvas - sub-pixel rasterization onto terminal cells
//!
//! Plot calls take normalized coordinates and append hits to a sub-pixel
//! buffer. Rendering collapses each cell's hits into one glyph and color with
//! the selected encoding.
//!
//! ```text
//!        points / lines  (normalized [0,1] x [0,1])
//!                    │
//!                    ▼
//!          ┌───────────────────┐
//!          │      HitGrid      │   columns*sub_x x rows*sub_y slots
//!          └─────────┬─────────┘
//!                    │  prepare + render per cell
//!     ┌──────────┬───┴──────┬──────────┐
//!     ▼          ▼          ▼          ▼
//!   Ascii     Braille      Dot      Density
//!   1x1        2x4         1x2        1x1
//! ```

#[allow(clippy::module_inception)]
mod canvas;
mod braille;
mod color;
mod density;
mod dot;
mod grid;
mod hit;
mod rasterizer;

pub use braille::BrailleRasterizer;
pub use canvas::{Canvas, Rows};
pub use color::Color;
pub use density::DensityRasterizer;
pub use dot::DotRasterizer;
pub use grid::{CellHits, HitGrid};
pub use hit::{latest_color, Hit};
pub use rasterizer::{AnyRasterizer, Cell, Encoding, Rasterizer};
