//! Plot settings: sizes, limits and per-series option strings

use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::canvas::Color;
use crate::errors::{PlotError, Result};

/// Outer size of a plot along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Half of the terminal
    #[default]
    Auto,
    /// The whole terminal (one row is left for a prompt)
    Full,
    /// Fixed number of cells
    #[serde(untagged)]
    Cells(u16),
}

impl Size {
    /// Resolve against the terminal extent along the same axis
    pub fn resolve(self, terminal: u16, prompt_rows: u16) -> u16 {
        match self {
            Size::Auto => terminal / 2,
            Size::Full => terminal.saturating_sub(prompt_rows),
            Size::Cells(n) => n,
        }
    }
}

impl FromStr for Size {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Size::Auto),
            "full" => Ok(Size::Full),
            other => other
                .parse::<u16>()
                .map(Size::Cells)
                .map_err(|_| PlotError::InvalidSize(Arc::new(s.to_string()))),
        }
    }
}

/// Axis limits
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Limits {
    /// Data minimum and maximum
    #[default]
    Auto,
    /// Explicit `[min, max]`
    Fixed(f64, f64),
}

impl Limits {
    /// Fixed limits, rejecting non-finite or non-increasing bounds
    pub fn fixed(min: f64, max: f64) -> Result<Self> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(Limits::Fixed(min, max))
        } else {
            Err(PlotError::InvalidLimits { min, max })
        }
    }

    /// Resolve against the values of every series along this axis
    ///
    /// Degenerate data ranges are widened by one unit on each side.
    pub fn resolve<'a, I>(self, values: I) -> Result<(f64, f64)>
    where
        I: IntoIterator<Item = &'a f64>,
    {
        if let Limits::Fixed(min, max) = self {
            return Ok((min, max));
        }
        let (min, max) = values
            .into_iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or(PlotError::EmptyPlot)?;
        if min < max {
            Ok((min, max))
        } else {
            Ok((min - 1.0, max + 1.0))
        }
    }
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesStyle {
    #[default]
    Lines,
    Points,
}

impl SeriesStyle {
    fn from_token(c: char) -> Option<Self> {
        match c {
            '-' => Some(SeriesStyle::Lines),
            'x' | ':' | '*' => Some(SeriesStyle::Points),
            _ => None,
        }
    }
}

/// Single-letter color token of an option string
pub fn color_token(c: char) -> Option<Color> {
    match c {
        'r' => Some(Color::Red),
        'g' => Some(Color::Green),
        'b' => Some(Color::Blue),
        'c' => Some(Color::Cyan),
        'm' => Some(Color::Magenta),
        'y' => Some(Color::Yellow),
        _ => None,
    }
}

/// Parse an option string such as `"r-"` or `"c:"`
///
/// At most one style and one color may be given.
pub fn parse_options(opts: &str) -> Result<(Option<SeriesStyle>, Option<Color>)> {
    let mut style = None;
    let mut color = None;
    for c in opts.chars() {
        if let Some(s) = SeriesStyle::from_token(c) {
            if style.replace(s).is_some() {
                return Err(PlotError::RepeatedStyle(Arc::new(opts.to_string())));
            }
        } else if let Some(k) = color_token(c) {
            if color.replace(k).is_some() {
                return Err(PlotError::RepeatedColor(Arc::new(opts.to_string())));
            }
        } else {
            return Err(PlotError::InvalidOption(c));
        }
    }
    Ok((style, color))
}
