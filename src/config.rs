//! Layered runtime configuration.
//!
//! Only two values actually matter — the job resource endpoint and the login
//! endpoint. They resolve in the usual order: built-in defaults, then
//! `config.toml` in the jobdeck data directory, then environment
//! (`JOBDECK_API_BASE`, `JOBDECK_LOGIN_URL`), then CLI flags.
//!
//! # Configuration File Format
//!
//! ```toml
//! api_base = "https://api.eduden.io/api/job-opening"
//! login_url = "https://api.eduden.io/api/login/"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL of the job resource collection.
pub const DEFAULT_API_BASE: &str = "https://api.eduden.io/api/job-opening";
/// URL of the identity endpoint.
pub const DEFAULT_LOGIN_URL: &str = "https://api.eduden.io/api/login/";

/// File name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// On-disk configuration. Every field is optional; anything absent falls
/// through to the next layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub login_url: Option<String>,
}

impl ConfigFile {
    /// Parse the config file if it exists. A missing file is `None`, a
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let parsed = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
        Ok(Some(parsed))
    }
}

/// Endpoint values from the environment and CLI layers, split out so the
/// layering itself stays a pure function.
#[derive(Debug, Default)]
pub struct EndpointOverrides {
    pub env_api_base: Option<String>,
    pub env_login_url: Option<String>,
    pub cli_api_base: Option<String>,
    pub cli_login_url: Option<String>,
}

/// Fully resolved runtime configuration, owned by the App Controller and
/// borrowed by everything else.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub login_url: String,
    pub data_dir: PathBuf,
    pub verbose: bool,
    /// Skip confirmation prompts (`--yes`).
    pub assume_yes: bool,
}

impl Config {
    /// Gather all layers from the real environment and resolve them.
    pub fn load(
        cli_api_base: Option<String>,
        cli_login_url: Option<String>,
        verbose: bool,
        assume_yes: bool,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir();
        let file = ConfigFile::load(&data_dir.join(CONFIG_FILE))?.unwrap_or_default();
        let overrides = EndpointOverrides {
            env_api_base: std::env::var("JOBDECK_API_BASE").ok(),
            env_login_url: std::env::var("JOBDECK_LOGIN_URL").ok(),
            cli_api_base,
            cli_login_url,
        };
        Ok(Self::resolve(data_dir, file, overrides, verbose, assume_yes))
    }

    /// Pure layering: CLI beats environment beats file beats defaults.
    pub fn resolve(
        data_dir: PathBuf,
        file: ConfigFile,
        overrides: EndpointOverrides,
        verbose: bool,
        assume_yes: bool,
    ) -> Self {
        let api_base = overrides
            .cli_api_base
            .or(overrides.env_api_base)
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let login_url = overrides
            .cli_login_url
            .or(overrides.env_login_url)
            .or(file.login_url)
            .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string());
        Self {
            api_base,
            login_url,
            data_dir,
            verbose,
            assume_yes,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Write a config file seeded with the currently resolved endpoints.
    /// Refuses to clobber an existing file.
    pub fn write_default_file(&self) -> Result<PathBuf> {
        let path = self.config_path();
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create data directory at {}", self.data_dir.display()))?;
        let file = ConfigFile {
            api_base: Some(self.api_base.clone()),
            login_url: Some(self.login_url.clone()),
        };
        let content = toml::to_string_pretty(&file).context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file at {}", path.display()))?;
        Ok(path)
    }

    /// Sanity-check the resolved endpoints. Returns human-readable warnings
    /// rather than failing — a broken endpoint only matters once a request
    /// actually fires.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if reqwest::Url::parse(&self.api_base).is_err() {
            warnings.push(format!("api_base is not a valid URL: {}", self.api_base));
        }
        if reqwest::Url::parse(&self.login_url).is_err() {
            warnings.push(format!("login_url is not a valid URL: {}", self.login_url));
        }
        warnings
    }
}

/// Data directory holding the session file and config file.
/// `JOBDECK_DATA_DIR` overrides the platform default.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JOBDECK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join("jobdeck"))
        .unwrap_or_else(|| PathBuf::from(".jobdeck"))
}
