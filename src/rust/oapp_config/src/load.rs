//! Locates and loads the configuration file.

use crate::{Config, ConfigError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where the configuration lives if nobody says otherwise.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/oapp_ranking.conf";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "OAPP_CONFIG";

/// Where a configuration path came from. An explicitly named file must
/// exist; the default one may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line or in `OAPP_CONFIG`
    Explicit(PathBuf),
    /// The built-in default path
    Default(PathBuf),
}

impl ConfigSource {
    /// The path, regardless of origin
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p) | Self::Default(p) => p,
        }
    }
}

/// Picks the configuration path: command line first, then the
/// environment, then the default.
pub fn resolve_config_path(cli_path: Option<&Path>, env_path: Option<OsString>) -> ConfigSource {
    if let Some(path) = cli_path {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    match env_path {
        Some(p) if !p.is_empty() => ConfigSource::Explicit(PathBuf::from(p)),
        _ => ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

/// Loads the configuration. Values are parsed but not range-checked; call
/// [`Config::validate`] once any command-line overrides are applied.
///
/// If the default file is missing, the built-in defaults are used. A file
/// that was asked for by name has to be there.
pub fn load_config(cli_path: Option<&Path>) -> Result<Config, ConfigError> {
    let source = resolve_config_path(cli_path, std::env::var_os(CONFIG_PATH_ENV));
    load_from_source(&source)
}

fn load_from_source(source: &ConfigSource) -> Result<Config, ConfigError> {
    let path = source.path();
    if let ConfigSource::Default(_) = source {
        if !path.exists() {
            warn!(
                "No configuration file at {}, using built-in defaults",
                path.display()
            );
            return Ok(Config::default());
        }
    }

    info!("Loading configuration from {}", path.display());
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::CannotRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Config::parse_from_string(&raw)
}
