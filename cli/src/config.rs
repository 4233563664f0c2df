use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rentsweep_api::consts::{DEFAULT_DERIVATION_PATH, DEFAULT_RPC_URL};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SweepConfig {
    pub solana: SolanaConfig,
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolanaConfig {
    pub rpc_url: String,
    pub commitment: CommitmentLevel,
    pub skip_preflight: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IdentityConfig {
    pub keypair_path: String,
    pub derivation_path: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: LogLevel,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentLevel {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl std::fmt::Display for CommitmentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitmentLevel::Processed => write!(f, "processed"),
            CommitmentLevel::Confirmed => write!(f, "confirmed"),
            CommitmentLevel::Finalized => write!(f, "finalized"),
        }
    }
}

impl CommitmentLevel {
    pub fn to_commitment_config(&self) -> CommitmentConfig {
        match self {
            CommitmentLevel::Processed => CommitmentConfig::processed(),
            CommitmentLevel::Confirmed => CommitmentConfig::confirmed(),
            CommitmentLevel::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentLevel::Confirmed,
            skip_preflight: false,
            timeout_secs: 60,
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            keypair_path: "~/.config/solana/id.json".to_string(),
            derivation_path: DEFAULT_DERIVATION_PATH.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SweepConfigError {
    #[error("Configuration file not found at path: {0}")]
    CustomConfigFileNotFound(String),
    #[error("Invalid URL configuration: {0}")]
    InvalidUrl(String),
    #[error("Home directory not found")]
    HomeDirectoryNotFound,
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl SweepConfig {
    /// Loads the config at `config_path`, or the default location. A missing
    /// default file yields the built-in defaults; a missing explicit one is an
    /// error.
    pub fn load(config_path: &Option<PathBuf>) -> Result<Self, SweepConfigError> {
        match config_path {
            Some(path) => {
                let expanded_path = expand_path(path);
                if !expanded_path.exists() {
                    return Err(SweepConfigError::CustomConfigFileNotFound(
                        expanded_path.display().to_string(),
                    ));
                }
                Self::load_from_path(expanded_path)
            }
            None => {
                let default_path = get_default_config_path()?;
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from_path(default_path)
            }
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SweepConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SweepConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command line / environment values on top of the file.
    pub fn with_overrides(
        mut self,
        rpc_url: Option<String>,
        derivation_path: Option<String>,
    ) -> Result<Self, SweepConfigError> {
        if let Some(url) = rpc_url {
            self.solana.rpc_url = url;
        }
        if let Some(path) = derivation_path {
            self.identity.derivation_path = path;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SweepConfigError> {
        validate_url(&self.solana.rpc_url, "Solana RPC URL", &["http://", "https://"])
    }

    pub fn keypair_path(&self) -> PathBuf {
        expand_path(&self.identity.keypair_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.solana.timeout_secs)
    }
}

fn validate_url(url: &str, field_name: &str, valid_schemes: &[&str]) -> Result<(), SweepConfigError> {
    if url.trim().is_empty() {
        return Err(SweepConfigError::InvalidUrl(format!("{} cannot be empty", field_name)));
    }

    if !valid_schemes.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(SweepConfigError::InvalidUrl(format!(
            "{} must start with one of {:?}, found: '{}'",
            field_name, valid_schemes, url
        )));
    }

    if url.contains(' ') {
        return Err(SweepConfigError::InvalidUrl(format!(
            "{} cannot contain spaces, found: '{}'",
            field_name, url
        )));
    }

    Ok(())
}

pub fn get_default_config_path() -> Result<PathBuf, SweepConfigError> {
    let home_dir = dirs::home_dir().ok_or(SweepConfigError::HomeDirectoryNotFound)?;
    Ok(home_dir.join(".config").join("rentsweep").join("rentsweep.toml"))
}

pub fn expand_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path_str = path.as_ref().to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.as_ref())
}
