//! Symbolic terminal colors

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::PlotError;

/// Named color of a plotted series
///
/// Absence of a color (`Option::None`) means the glyph is printed unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    /// Secondary color used for borders and ticks
    #[serde(alias = "gray")]
    Grey,
}

impl Color {
    /// Series colors in the order they are handed out
    pub const SERIES: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
    ];

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::Grey => "grey",
        }
    }

    /// Convert to the nu-ansi-term foreground color
    #[inline]
    pub fn to_ansi(self) -> nu_ansi_term::Color {
        match self {
            Color::Red => nu_ansi_term::Color::Red,
            Color::Green => nu_ansi_term::Color::Green,
            Color::Blue => nu_ansi_term::Color::Blue,
            Color::Cyan => nu_ansi_term::Color::Cyan,
            Color::Magenta => nu_ansi_term::Color::Purple,
            Color::Yellow => nu_ansi_term::Color::Yellow,
            Color::Grey => nu_ansi_term::Color::DarkGray,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "cyan" => Ok(Color::Cyan),
            "magenta" => Ok(Color::Magenta),
            "yellow" => Ok(Color::Yellow),
            "grey" | "gray" => Ok(Color::Grey),
            _ => Err(PlotError::UnknownColor(Arc::new(s.to_string()))),
        }
    }
}
