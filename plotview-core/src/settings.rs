use crate::fit::{Margins, DEFAULT_FLOOR_MARGIN, DEFAULT_MARGIN_FRACTION};
use crate::series::DEFAULT_WINDOW_WIDTH;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterSettings {
    pub window_width: i64,
    pub margin_fraction: f64,
    pub floor_margin: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_ticks: Option<u64>,
    pub line_names: Vec<String>,
}

impl Default for PlotterSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            margin_fraction: DEFAULT_MARGIN_FRACTION,
            floor_margin: DEFAULT_FLOOR_MARGIN,
            retain_ticks: None,
            line_names: Vec::new(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("invalid setting '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Toml,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

fn check_margin(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SettingsError::Invalid {
            field,
            reason: format!("must be a finite value >= 0, got {value}"),
        });
    }
    Ok(())
}

impl PlotterSettings {
    /// Clamps the window width and validates the margins.
    pub fn normalize(mut self) -> Result<Self, SettingsError> {
        self.window_width = self.window_width.max(1);
        check_margin("margin_fraction", self.margin_fraction)?;
        check_margin("floor_margin", self.floor_margin)?;
        if self.floor_margin == 0.0 {
            return Err(SettingsError::Invalid {
                field: "floor_margin",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(self)
    }

    pub fn margins(&self) -> Margins {
        Margins {
            fraction: self.margin_fraction,
            floor: self.floor_margin,
        }
    }

    /// Reads settings as TOML when the file ends in `.toml`, JSON otherwise.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let settings: Self = match SettingsFormat::from_path(path) {
            SettingsFormat::Toml => toml::from_str(&data)?,
            SettingsFormat::Json => serde_json::from_str(&data)?,
        };
        info!("loaded plotter settings from {}", path.display());
        settings.normalize()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = match SettingsFormat::from_path(path) {
            SettingsFormat::Toml => toml::to_string_pretty(self)?,
            SettingsFormat::Json => serde_json::to_string_pretty(self)?,
        };
        fs::write(path, data)?;
        Ok(())
    }
}
