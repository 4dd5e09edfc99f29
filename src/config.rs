use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::num::NonZeroU16;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::{
    format_description::FormatItem,
    macros::{date, format_description},
    Date,
};

pub(crate) static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const CONFIG_PATH_ENV_VAR: &str = "ESCALA_CONFIG";

/// The last known workday of the default roster
pub(crate) const DEFAULT_ANCHOR: Date = date!(2025 - 05 - 17);

/// Number of months loaded around the navigation center
pub(crate) const DEFAULT_WINDOW: NonZeroU16 = match NonZeroU16::new(24) {
    Some(n) => n,
    None => unreachable!(),
};

/// Contents of a configuration file.  Every key is optional.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    anchor: Option<String>,
    #[serde(default)]
    months: Option<NonZeroU16>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    /// A date known to be a workday
    pub(crate) anchor: Date,
    /// Number of months in a freshly generated window
    pub(crate) window_size: NonZeroU16,
    /// Whose roster this is, for the status message
    pub(crate) name: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            anchor: DEFAULT_ANCHOR,
            window_size: DEFAULT_WINDOW,
            name: None,
        }
    }
}

impl Config {
    /// Loads the configuration file at `path` if given, otherwise the file
    /// named by `$ESCALA_CONFIG`, otherwise `escala/config.toml` in the
    /// user's configuration directory.  Only the last of these may be
    /// absent, in which case the defaults are used.
    pub(crate) fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return Config::from_file(path);
        }
        if let Some(path) = env::var_os(CONFIG_PATH_ENV_VAR) {
            return Config::from_file(Path::new(&path));
        }
        match default_path() {
            Some(path) if path.is_file() => Config::from_file(&path),
            _ => {
                log::info!("No configuration file found; using defaults");
                Ok(Config::default())
            }
        }
    }

    fn from_file(path: &Path) -> Result<Config, ConfigError> {
        log::info!("Loading configuration from {}", path.display());
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Config::parse(path, &src)
    }

    fn parse(path: &Path, src: &str) -> Result<Config, ConfigError> {
        let file = toml::from_str::<ConfigFile>(src).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        let mut config = Config::default();
        if let Some(value) = file.anchor {
            config.anchor = Date::parse(&value, &YMD_FMT)
                .map_err(|source| ConfigError::Anchor { value, source })?;
        }
        if let Some(months) = file.months {
            config.window_size = months;
        }
        config.name = file.name.filter(|name| !name.trim().is_empty());
        Ok(config)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("escala").join("config.toml"))
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read configuration file {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse configuration file {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid anchor date {value:?}; expected YYYY-MM-DD")]
    Anchor {
        value: String,
        source: time::error::Parse,
    },
}
