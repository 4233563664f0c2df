//! Signing backends. Both hand back something that implements [`Signer`];
//! nothing outside this module sees secret key bytes.

use std::path::Path;

use log::debug;
use rentsweep_api::consts::DEFAULT_LEDGER_LOCATOR;
use solana_remote_wallet::{
    locator::{Locator, LocatorError},
    remote_keypair::{generate_remote_keypair, RemoteKeypair},
    remote_wallet::{maybe_wallet_manager, RemoteWalletError},
};
use solana_sdk::{
    derivation_path::DerivationPath,
    signature::{read_keypair_file, Keypair},
};
use thiserror::Error;

pub use solana_sdk::signer::Signer;

#[derive(Error, Debug)]
pub enum SignerLoadError {
    #[error("Secret key is not valid base58: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),
    #[error("Secret key is not a valid ed25519 keypair (got {0} bytes, expected 64)")]
    InvalidSecretKey(usize),
    #[error("Failed to read keypair from {path}: {reason}")]
    KeypairFile { path: String, reason: String },
    #[error("Invalid derivation path '{path}': {reason}")]
    InvalidDerivationPath { path: String, reason: String },
    #[error("No hardware wallet found, is the device connected and unlocked?")]
    NoHardwareWallet,
    #[error("Invalid wallet locator: {0}")]
    Locator(#[from] LocatorError),
    #[error("Hardware wallet error: {0}")]
    RemoteWallet(#[from] RemoteWalletError),
}

/// Decodes a base58 secret key, the format wallets export private keys in.
pub fn keypair_from_base58(secret: &str) -> Result<Keypair, SignerLoadError> {
    let bytes = bs58::decode(secret.trim()).into_vec()?;
    Keypair::from_bytes(&bytes).map_err(|_| SignerLoadError::InvalidSecretKey(bytes.len()))
}

/// Reads a JSON keypair file as written by `solana-keygen`.
pub fn keypair_from_file<P: AsRef<Path>>(path: P) -> Result<Keypair, SignerLoadError> {
    let path = path.as_ref();
    read_keypair_file(path).map_err(|e| SignerLoadError::KeypairFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Accepts both `m/44'/501'/0'/0'` and the bare `44'/501'/0'/0'` form.
pub fn parse_derivation_path(path: &str) -> Result<DerivationPath, SignerLoadError> {
    let trimmed = path.trim();
    let absolute = if trimmed.starts_with("m/") {
        trimmed.to_string()
    } else {
        format!("m/{trimmed}")
    };

    DerivationPath::from_absolute_path_str(&absolute).map_err(|e| {
        SignerLoadError::InvalidDerivationPath {
            path: path.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Opens the first connected Ledger and derives the key at `derivation_path`.
/// With `confirm_key` the device asks the user to approve the public key.
pub fn ledger_signer(
    derivation_path: &str,
    confirm_key: bool,
) -> Result<RemoteKeypair, SignerLoadError> {
    let derivation_path = parse_derivation_path(derivation_path)?;

    let wallet_manager = maybe_wallet_manager()?.ok_or(SignerLoadError::NoHardwareWallet)?;
    let locator = Locator::new_from_path(DEFAULT_LEDGER_LOCATOR)?;
    debug!("Using hardware wallet at {DEFAULT_LEDGER_LOCATOR}");

    let keypair = generate_remote_keypair(
        locator,
        derivation_path,
        &wallet_manager,
        confirm_key,
        "ledger",
    )?;

    Ok(keypair)
}
