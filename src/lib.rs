//! # termlot
//!
//! Plots numeric series on a text terminal. Coordinates are rasterized onto
//! a grid of cells, each split into sub-pixels, and every cell is rendered as
//! one glyph: Braille dot patterns, stacked dots, or a density ramp, with
//! optional ANSI colors.
//!
//! ```no_run
//! use termlot::{Canvas, Color, Encoding};
//!
//! let mut canvas = Canvas::new(40, 10, Encoding::Braille)?;
//! canvas.lines(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0], Some(Color::Cyan))?;
//! for row in canvas.rows() {
//!     println!("{row}");
//! }
//! # Ok::<(), termlot::PlotError>(())
//! ```

pub mod canvas;
pub mod config;
pub mod errors;
pub mod input;
pub mod plot;
pub mod session;
pub mod style;

pub use canvas::{Canvas, Cell, Color, Encoding};
pub use config::{load_config, load_config_from, Config};
pub use errors::{PlotError, Result};
pub use plot::{Limits, Plot, Size};
pub use session::Session;
pub use style::{colors_enabled, set_colors_enabled, style, Styler};
