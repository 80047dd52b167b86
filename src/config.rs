//! Plot configuration
//!
//! Loaded from `config.toml` in the platform config directory, then
//! overridden by environment variables and finally by command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::canvas::Encoding;
use crate::errors::{PlotError, Result};
use crate::plot::{Plot, Size};
use crate::style;

/// Environment variable overriding the encoding
pub const ENCODING_ENV: &str = "TERMLOT_ENCODING";

/// Conventional variable disabling colored output
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Plot defaults
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glyph encoding
    pub encoding: Encoding,

    /// Plot width: "auto", "full" or a number of cells
    pub width: Size,

    /// Plot height: "auto", "full" or a number of cells
    pub height: Size,

    /// Colored output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: Encoding::Braille,
            width: Size::Auto,
            height: Size::Auto,
            color: true,
        }
    }
}

impl Config {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "termlot", "termlot").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Path of the configuration file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Result<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENCODING_ENV).filter(|v| !v.is_empty()) {
            self.encoding = name.parse()?;
        }
        if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        Ok(self)
    }

    /// Set the process-wide styling toggle
    pub fn apply_color(&self) {
        style::set_colors_enabled(self.color);
    }

    /// Empty plot carrying these defaults
    pub fn plot(&self) -> Plot {
        let mut plot = Plot::new();
        plot.set_encoding(self.encoding)
            .set_width(self.width)
            .set_height(self.height);
        plot
    }
}

/// Load the configuration file, falling back to defaults when it is absent
pub fn load_config() -> Result<Config> {
    let Some(path) = Config::config_path() else {
        warn!("Could not determine config path, using defaults");
        return Ok(Config::default());
    };
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(Config::default());
    }
    load_config_from(&path)
}

/// Load a configuration file
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| PlotError::config(path, format!("Failed to read config: {e}")))?;
    let config = toml::from_str(&content)
        .map_err(|e| PlotError::config(path, format!("Invalid TOML config: {e}")))?;
    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write("encoding = \"dot\"\nwidth = 100\nheight = \"full\"\ncolor = false\n");
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(
            config,
            Config {
                encoding: Encoding::Dot,
                width: Size::Cells(100),
                height: Size::Full,
                color: false,
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write("encoding = \"density\"\n");
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.encoding, Encoding::Density);
        assert_eq!(config.width, Size::Auto);
        assert!(config.color);
    }

    #[test]
    fn test_invalid_config() {
        let file = write("encoding = \"hex\"\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, PlotError::ConfigurationError { .. }));

        let file = write("colour = true\n");
        assert!(load_config_from(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/termlot.toml")).unwrap_err();
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_env_overrides() {
        let env = |key: &str| match key {
            ENCODING_ENV => Some("ascii".to_string()),
            NO_COLOR_ENV => Some("1".to_string()),
            _ => None,
        };
        let config = Config::default().with_env_from(env).unwrap();
        assert_eq!(config.encoding, Encoding::Ascii);
        assert!(!config.color);

        let empty_no_color = |key: &str| (key == NO_COLOR_ENV).then(String::new);
        assert!(Config::default().with_env_from(empty_no_color).unwrap().color);

        let bad = |key: &str| (key == ENCODING_ENV).then(|| "hex".to_string());
        assert!(Config::default().with_env_from(bad).is_err());
    }

    #[test]
    fn test_plot_defaults() {
        let config = Config {
            encoding: Encoding::Dot,
            width: Size::Cells(40),
            ..Config::default()
        };
        let plot = config.plot().with_terminal_size(100, 30);
        assert_eq!(plot.encoding(), Encoding::Dot);
        assert_eq!(plot.width(), 40);
        assert_eq!(plot.height(), 15);
    }
}
