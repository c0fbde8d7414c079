use chrono::{Datelike, Local, Month};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::style::{Color, Decoration, FontStyle, FontWeight};

const CONFIG_PATH_ENV_VAR: &str = "MONTHGRID_CONFIG_FILE";

/// The full grid description a caller hands to the generator.
///
/// This is also the record persisted between sessions: the TOML form of
/// this struct is what `load_suitable_config` reads back. Missing fields
/// fall back to their defaults so a partial file stays loadable.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub spacing: f64,
    /// 0-based month index, 0 = January.
    pub month: u32,
    pub year: i32,
    pub shape_color: Color,
    pub weekend_shape_color: Color,
    pub text_color: Color,
    pub weekend_text_color: Color,
    pub weekend_day_label_color: Color,
    pub decoration: Decoration,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub font_size: f64,
    pub day_font_size: f64,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        let today = Local::now();

        GridConfig {
            rows: 6,
            columns: 7,
            cell_width: 30.0,
            cell_height: 45.0,
            spacing: 0.0,
            month: today.month0(),
            year: today.year(),
            shape_color: Color::new(0xE9, 0xE9, 0xE9),
            weekend_shape_color: Color::new(0xF9, 0xCD, 0xCD),
            text_color: Color::new(0x00, 0x00, 0x00),
            weekend_text_color: Color::new(0xFF, 0x00, 0x00),
            weekend_day_label_color: Color::new(0xFF, 0x00, 0x00),
            decoration: Decoration::None,
            font_style: FontStyle::Normal,
            font_weight: FontWeight::Normal,
            font_size: 9.0,
            day_font_size: 9.0,
        }
    }
}

impl GridConfig {
    /// Checks the constraints the generator itself assumes to hold.
    ///
    /// The generator stays total over whatever it is given; callers run
    /// this gate first and refuse to generate on failure.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 {
            return Err(Error::new(ErrorKind::Validation, "rows must be at least 1"));
        }
        if self.columns < 1 {
            return Err(Error::new(
                ErrorKind::Validation,
                "columns must be at least 1",
            ));
        }
        if self.cell_width < 1.0 {
            return Err(Error::new(
                ErrorKind::Validation,
                "cell_width must be at least 1",
            ));
        }
        if self.cell_height < 1.0 {
            return Err(Error::new(
                ErrorKind::Validation,
                "cell_height must be at least 1",
            ));
        }
        if self.spacing < 0.0 {
            return Err(Error::new(
                ErrorKind::Validation,
                "spacing must not be negative",
            ));
        }
        if self.month > 11 {
            return Err(Error::new(
                ErrorKind::Validation,
                "month must be in 0..=11 (0 = January)",
            ));
        }

        Ok(())
    }

    /// The target month as a chrono value. Assumes `month` passed
    /// validation.
    pub fn chrono_month(&self) -> Month {
        Month::from_u32(self.month + 1).unwrap()
    }
}

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("monthgrid").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".monthgrid.toml"));
    }

    locations
}

pub fn load_config(path: &Path) -> Result<GridConfig> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;

    Ok(config)
}

/// Loads `path` if given, otherwise the first existing file from the
/// usual locations, otherwise the default configuration.
pub fn load_suitable_config(path: Option<&Path>) -> Result<GridConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            log::debug!("Loading config from '{}'", location.display());
            return load_config(&location);
        }
    }

    log::debug!("No config file found, falling back to defaults");
    Ok(GridConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_matches_initial_panel_state() {
        let config = GridConfig::default();

        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
        assert_eq!(config.cell_width, 30.0);
        assert_eq!(config.cell_height, 45.0);
        assert_eq!(config.spacing, 0.0);
        assert_eq!(config.shape_color.to_string(), "#E9E9E9");
        assert_eq!(config.weekend_shape_color.to_string(), "#F9CDCD");
        assert_eq!(config.text_color.to_string(), "#000000");
        assert_eq!(config.weekend_text_color.to_string(), "#FF0000");
        assert_eq!(config.weekend_day_label_color.to_string(), "#FF0000");
        assert_eq!(config.font_size, 9.0);
        assert_eq!(config.day_font_size, 9.0);
        assert!(config.month <= 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_gate() {
        let valid = GridConfig {
            month: 0,
            year: 2024,
            ..GridConfig::default()
        };
        assert!(valid.validate().is_ok());

        let no_rows = GridConfig { rows: 0, ..valid.clone() };
        assert!(no_rows.validate().is_err());

        let no_columns = GridConfig { columns: 0, ..valid.clone() };
        assert!(no_columns.validate().is_err());

        let flat_cells = GridConfig {
            cell_height: 0.0,
            ..valid.clone()
        };
        assert!(flat_cells.validate().is_err());

        let negative_spacing = GridConfig {
            spacing: -1.0,
            ..valid.clone()
        };
        assert!(negative_spacing.validate().is_err());

        let bad_month = GridConfig { month: 12, ..valid };
        assert!(bad_month.validate().is_err());
    }

    #[test]
    fn toml_round_trip() {
        let config = GridConfig {
            month: 3,
            year: 2025,
            decoration: Decoration::Underline,
            font_weight: FontWeight::Bold,
            ..GridConfig::default()
        };

        let serialized = toml::to_string(&config).expect("config serializes");
        let parsed: GridConfig = toml::from_str(&serialized).expect("config parses back");

        assert_eq!(parsed, config);
    }

    #[test]
    fn load_partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "rows = 5\nmonth = 1\nyear = 2024\nweekend_shape_color = \"#ABCDEF\"\n"
        )
        .expect("write temp config");

        let config = load_config(file.path()).expect("config loads");

        assert_eq!(config.rows, 5);
        assert_eq!(config.month, 1);
        assert_eq!(config.year, 2024);
        assert_eq!(config.weekend_shape_color, Color::new(0xAB, 0xCD, 0xEF));
        // untouched fields keep their defaults
        assert_eq!(config.columns, 7);
        assert_eq!(config.font_size, 9.0);
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "rows = \"six\"\n").expect("write temp config");

        assert!(load_config(file.path()).is_err());
    }
}
