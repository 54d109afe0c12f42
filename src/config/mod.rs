//! Diagnostics settings. Nothing here changes what the agent prints.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::Result;

pub const ENV_PREFIX: &str = "ECHO_AGENT";

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join("Library/Application Support/echo-agent"))
    }

    #[cfg(target_os = "linux")]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
            .map(|c| c.join("echo-agent"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .map(|a| a.join("echo-agent"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join(".config/echo-agent"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Debug log destination, used with the `debug-log` feature.
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive for debug logs.
    pub log_filter: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn load() -> Self {
        Self::try_load_from(Self::get_config_path().as_deref()).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config: {e}");
            Self::default()
        })
    }

    /// Layers an optional TOML file under `ECHO_AGENT_*` environment variables.
    pub fn try_load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        Ok(builder.build()?.try_deserialize()?)
    }

    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join("config.toml"))
    }
}
