use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use rentsweep_client::signer::{keypair_from_base58, keypair_from_file, ledger_signer, Signer};

use crate::config::expand_path;

/// Environment variable holding a base58 secret key.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Where a local secret key comes from. Resolved once, before any chain call.
#[derive(Debug, PartialEq)]
pub enum LocalKeySource {
    Base58Env,
    File(PathBuf),
}

/// `PRIVATE_KEY` wins over `--keypair`, which wins over the config file.
pub fn resolve_local_key_source(
    env_secret_present: bool,
    cli_path: Option<&PathBuf>,
    config_path: PathBuf,
) -> LocalKeySource {
    if env_secret_present {
        return LocalKeySource::Base58Env;
    }
    match cli_path {
        Some(path) => LocalKeySource::File(expand_path(path)),
        None => LocalKeySource::File(config_path),
    }
}

pub fn load_local_signer(cli_path: Option<&PathBuf>, config_path: PathBuf) -> Result<Box<dyn Signer>> {
    let secret = env::var(PRIVATE_KEY_ENV).ok().filter(|s| !s.trim().is_empty());

    match resolve_local_key_source(secret.is_some(), cli_path, config_path) {
        LocalKeySource::Base58Env => {
            let secret = secret.unwrap_or_default();
            let keypair = keypair_from_base58(&secret)
                .map_err(|e| anyhow!("Invalid {} value: {}", PRIVATE_KEY_ENV, e))?;
            Ok(Box::new(keypair))
        }
        LocalKeySource::File(path) => {
            let keypair = keypair_from_file(&path)?;
            Ok(Box::new(keypair))
        }
    }
}

pub fn load_ledger_signer(derivation_path: &str, confirm_key: bool) -> Result<Box<dyn Signer>> {
    let keypair = ledger_signer(derivation_path, confirm_key)
        .map_err(|e| anyhow!("Failed to open Ledger at {}: {}", derivation_path, e))?;
    Ok(Box::new(keypair))
}
