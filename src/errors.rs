use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building or drawing a plot
#[derive(Error, Debug)]
pub enum PlotError {
    /// Error when the x and y sequences differ in length
    #[error("Incompatible array sizes: {xs} x values and {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    /// Error when a line is requested with fewer than two points
    #[error("A line needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Error when a canvas is created with a zero dimension
    #[error("Invalid canvas size: {columns}x{rows} cells")]
    InvalidCanvasSize { columns: u32, rows: u32 },

    /// Error when the encoding name is not one of ascii, braille, dot or density
    #[error("Unsupported encoding: '{0}'")]
    UnknownEncoding(Arc<String>),

    /// Error when a color name or token is not recognized
    #[error("Unknown color: '{0}'")]
    UnknownColor(Arc<String>),

    /// Error when a plot option string contains an unknown character
    #[error("Invalid option: '{0}'")]
    InvalidOption(char),

    /// Error when a plot option string names two styles
    #[error("Repeated style options in '{0}'")]
    RepeatedStyle(Arc<String>),

    /// Error when a plot option string names two colors
    #[error("Repeated color options in '{0}'")]
    RepeatedColor(Arc<String>),

    /// Error when a size setting cannot be parsed
    #[error("Invalid size: '{0}' (expected auto, full or a number of cells)")]
    InvalidSize(Arc<String>),

    /// Error when axis limits are not finite or not increasing
    #[error("Invalid limits: [{min}, {max}]")]
    InvalidLimits { min: f64, max: f64 },

    /// Error when decorations leave no room for the canvas
    #[error("Plot of {width}x{height} leaves no room for the canvas")]
    LayoutTooSmall { width: u16, height: u16 },

    /// Error when a hold value is neither on nor off
    #[error("Unknown hold value: '{0}'")]
    UnknownHold(Arc<String>),

    /// Error when the plot has no data to derive limits from
    #[error("Nothing to plot")]
    EmptyPlot,

    /// Error when reading or parsing the configuration file
    #[error("Configuration error for {path}: {message}")]
    ConfigurationError { path: PathBuf, message: Arc<String> },

    /// Error when parsing input data
    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: Arc<String> },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result with PlotError
pub type Result<T> = std::result::Result<T, PlotError>;

impl PlotError {
    /// Check if the error is a violation of the caller contract
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            PlotError::ConfigurationError { .. }
                | PlotError::ParseError { .. }
                | PlotError::IoError(_)
        )
    }

    /// Create a configuration error
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PlotError::ConfigurationError {
            path: path.into(),
            message: Arc::new(message.into()),
        }
    }
}

/// Enable cloning for PlotError
impl Clone for PlotError {
    fn clone(&self) -> Self {
        match self {
            Self::LengthMismatch { xs, ys } => Self::LengthMismatch { xs: *xs, ys: *ys },
            Self::TooFewPoints(n) => Self::TooFewPoints(*n),
            Self::InvalidCanvasSize { columns, rows } => Self::InvalidCanvasSize {
                columns: *columns,
                rows: *rows,
            },
            Self::UnknownEncoding(name) => Self::UnknownEncoding(Arc::clone(name)),
            Self::UnknownColor(name) => Self::UnknownColor(Arc::clone(name)),
            Self::InvalidOption(c) => Self::InvalidOption(*c),
            Self::RepeatedStyle(opts) => Self::RepeatedStyle(Arc::clone(opts)),
            Self::RepeatedColor(opts) => Self::RepeatedColor(Arc::clone(opts)),
            Self::InvalidSize(value) => Self::InvalidSize(Arc::clone(value)),
            Self::InvalidLimits { min, max } => Self::InvalidLimits {
                min: *min,
                max: *max,
            },
            Self::LayoutTooSmall { width, height } => Self::LayoutTooSmall {
                width: *width,
                height: *height,
            },
            Self::UnknownHold(value) => Self::UnknownHold(Arc::clone(value)),
            Self::EmptyPlot => Self::EmptyPlot,
            Self::ConfigurationError { path, message } => Self::ConfigurationError {
                path: path.clone(),
                message: Arc::clone(message),
            },
            Self::ParseError { line, message } => Self::ParseError {
                line: *line,
                message: Arc::clone(message),
            },
            Self::IoError(err) => Self::IoError(std::io::Error::new(err.kind(), err.to_string())),
        }
    }
}
