//! # Client configuration — `client.toml`
//!
//! Where the backend lives and how the login redirect is phrased. Every
//! section defaults, so a missing or empty file is the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//! timeout_secs = 30
//!
//! [auth]
//! login_path = "/auth/login"
//! login_message = "Please log in to access this page"
//! ```
//!
//! ## Loading
//!
//! [`ClientConfig::load`] is what the app calls at startup. On native builds
//! it reads the first `client.toml` found in the working directory or in
//! `<config_dir>/tagdesk/`. WASM builds have no filesystem and start from the
//! defaults. An unreadable file is logged and skipped.
//!
//! ## Environment
//!
//! `API_URL` overrides `api.base_url` on top of whatever was loaded. Native
//! builds read it at runtime (after loading `.env` via `dotenvy`); WASM builds
//! have no process environment, so the value is baked in at compile time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Ignored on WASM.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Route unauthenticated visitors are sent to.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Shown on the login page after a redirect.
    #[serde(default = "default_login_message")]
    pub login_message: String,
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

fn default_login_message() -> String {
    "Please log in to access this page".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            login_message: default_login_message(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Startup configuration: the first readable `client.toml`, else the
    /// defaults, with `API_URL` applied on top.
    pub fn load() -> Self {
        Self::load_first(&search_paths())
    }

    fn load_first(candidates: &[PathBuf]) -> Self {
        let loaded = candidates
            .iter()
            .filter(|path| path.is_file())
            .find_map(|path| match Self::read(path) {
                Ok(config) => {
                    tracing::info!("Loaded client config from {}", path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Skipping client config: {}", e);
                    None
                }
            });
        loaded.unwrap_or_default().with_env_override()
    }

    /// Read and parse one config file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    fn with_env_override(self) -> Self {
        match api_url_from_env() {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }
}

/// Where [`ClientConfig::load`] looks, in order.
#[cfg(not(target_arch = "wasm32"))]
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(ClientConfig::filename())];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("tagdesk").join(ClientConfig::filename()));
    }
    paths
}

#[cfg(target_arch = "wasm32")]
fn search_paths() -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn api_url_from_env() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn api_url_from_env() -> Option<String> {
    option_env!("API_URL").map(str::to_string)
}
