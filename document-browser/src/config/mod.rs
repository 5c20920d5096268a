use client_core::config::{self as core_config, LogSettings};
use client_core::error::CoreError;
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

/// Default configuration file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "configuration";

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApiSettings {
    /// Prefix for API paths. Empty means paths are relative to the origin.
    #[serde(default)]
    pub base_url: String,
    /// Cookie (`name=value`) carrying the ambient session.
    #[serde(default)]
    pub session_cookie: Option<Secret<String>>,
    /// Transport timeout; unset leaves requests unbounded.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Settings {
    pub fn load(file_stem: &str) -> Result<Self, CoreError> {
        core_config::load(file_stem)
    }
}
