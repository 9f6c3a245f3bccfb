//! Optional TOML configuration for the tour.
//!
//! ```toml
//! header_color = "cyan"
//! color = "never"        # auto | always | never
//! dump_cast_json = true
//! ```

use std::env;
use std::fs;
use std::path::Path;

use colored::Color;
use serde::Deserialize;

use crate::error::{Result, TourError};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "PATTERN_TOUR_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide from the terminal and `NO_COLOR` / `CLICOLOR`.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub header_color: String,
    pub color: ColorMode,
    pub dump_cast_json: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            header_color: "yellow".to_string(),
            color: ColorMode::Auto,
            dump_cast_json: false,
        }
    }
}

impl TourConfig {
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        // Reject bad colors up front rather than halfway through the tour
        config.header_color()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TourError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn header_color(&self) -> Result<Color> {
        self.header_color
            .parse::<Color>()
            .map_err(|_| TourError::UnknownColor(self.header_color.clone()))
    }

    pub fn colorize(&self) -> bool {
        match self.color {
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TourConfig::default();
        assert_eq!(config.header_color().unwrap(), Color::Yellow);
        assert_eq!(config.color, ColorMode::Auto);
        assert!(!config.dump_cast_json);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(TourConfig::parse("").unwrap(), TourConfig::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = TourConfig::parse(
            r#"
header_color = "bright cyan"
color = "never"
dump_cast_json = true
"#,
        )
        .unwrap();

        assert_eq!(config.header_color().unwrap(), Color::BrightCyan);
        assert_eq!(config.color, ColorMode::Never);
        assert!(!config.colorize());
        assert!(config.dump_cast_json);
    }

    #[test]
    fn test_always_forces_color() {
        let config = TourConfig::parse(r#"color = "always""#).unwrap();
        assert!(config.colorize());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let result = TourConfig::parse(r#"header_color = "plaid""#);
        assert!(matches!(result, Err(TourError::UnknownColor(name)) if name == "plaid"));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let result = TourConfig::parse("color = ");
        assert!(matches!(result, Err(TourError::ParseConfig(_))));

        let result = TourConfig::parse(r#"color = "sometimes""#);
        assert!(matches!(result, Err(TourError::ParseConfig(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "header_color = \"green\"").unwrap();

        let config = TourConfig::load(file.path()).unwrap();
        assert_eq!(config.header_color().unwrap(), Color::Green);
    }

    #[test]
    fn test_load_missing_file() {
        let result = TourConfig::load(Path::new("/definitely/not/here/tour.toml"));
        assert!(matches!(result, Err(TourError::ReadConfig { .. })));
    }
}
