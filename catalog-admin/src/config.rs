use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::CatalogClient;
use crate::http_client::{ApiClient, DEFAULT_BASE_URL};
use crate::session::Session;

pub const DEFAULT_CONFIG_FILE: &str = "catalog-admin.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays on screen.
    pub notice_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { notice_seconds: 4 }
    }
}

impl AdminConfig {
    /// Load configuration from file with environment variable overrides.
    /// A missing or broken file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let mut config = Self::load_from_file(path).unwrap_or_else(|err| {
            log::warn!("⚠️ {}, using defaults", err);
            AdminConfig::default()
        });

        config.apply_env_overrides();
        config
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup("API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = base_url;
        }
        if let Some(token) = lookup("CATALOG_ADMIN_TOKEN") {
            self.api.token = (!token.trim().is_empty()).then_some(token);
        }
        if let Some(seconds) = lookup("CATALOG_ADMIN_NOTICE_SECONDS") {
            match seconds.parse::<u64>() {
                Ok(seconds) => self.ui.notice_seconds = seconds,
                Err(_) => log::warn!("Ignoring CATALOG_ADMIN_NOTICE_SECONDS={}", seconds),
            }
        }
    }

    /// Save current configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn session(&self) -> Session {
        match &self.api.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::new(),
        }
    }

    pub fn client(&self) -> CatalogClient {
        CatalogClient::from_api(ApiClient::with_session(&self.api.base_url, self.session()))
    }
}
