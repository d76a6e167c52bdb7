use crate::error::{Error, Result};

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// Config file name inside the sgb config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SGB_CONFIG";

const APP_NAME: &str = "sgb";

/// Location of the user config file, if one can be determined.
pub(crate) fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

/// Load the user config. A missing file yields the defaults.
pub(crate) fn load() -> Result<Config> {
    match config_path() {
        Some(path) => Ok(load_from(&path)?.unwrap_or_default()),
        None => Ok(Config::default()),
    }
}

/// Load config from `path`. Returns None if the file doesn't exist.
pub(crate) fn load_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        log::debug!("no config file at {}", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(Some(config))
}

/// Root configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UiConfig {
    #[serde(default)]
    pub colors: UiColors,
}

/// Color overrides shared by the picker and the CLI output.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UiColors {
    pub border: Option<UiColor>,
    pub text: Option<UiColor>,
    pub accent: Option<UiColor>,
    pub header: Option<UiColor>,
    pub footer: Option<UiColor>,
    pub title: Option<UiColor>,
    pub muted: Option<UiColor>,
    pub search: Option<UiColor>,
    pub selection_bg: Option<UiColor>,
    pub selection_fg: Option<UiColor>,
    pub warning: Option<UiColor>,
    pub error: Option<UiColor>,
}

/// A configured color: a named terminal color or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub(crate) enum UiColor {
    Named(UiColorName),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiColorName {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl FromStr for UiColorName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let name = match normalized.as_str() {
            "default" | "reset" => Self::Default,
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "gray" | "grey" => Self::Gray,
            "dark-gray" | "dark-grey" => Self::DarkGray,
            "light-red" => Self::LightRed,
            "light-green" => Self::LightGreen,
            "light-yellow" => Self::LightYellow,
            "light-blue" => Self::LightBlue,
            "light-magenta" => Self::LightMagenta,
            "light-cyan" => Self::LightCyan,
            "white" => Self::White,
            _ => return Err(format!("unknown color name: {s}")),
        };
        Ok(name)
    }
}

impl TryFrom<String> for UiColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let Some(hex) = value.trim().strip_prefix('#') else {
            return value.parse().map(UiColor::Named);
        };
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color: {value} (expected #rrggbb)"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("invalid hex color: {value} ({e})"))
        };
        Ok(UiColor::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
