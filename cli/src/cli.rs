use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rentsweep_client::{AccountCloser, CloserConfig, RpcChainClient};

use crate::config::SweepConfig;

#[derive(Parser)]
#[command(
    name = "rentsweep",
    about = "Close empty SPL token accounts and reclaim their rent, one account per run.",
    arg_required_else_help = true,
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 'c', long = "config", help = "Path to config file (overrides default)", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short = 'u', long = "url", env = "RPC", help = "Solana RPC endpoint", global = true)]
    pub rpc_url: Option<String>,

    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts", global = true)]
    pub yes: bool,

    #[arg(short = 'v', long = "verbose", help = "Print verbose output", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign with a Ledger hardware wallet
    Ledger {
        #[arg(
            short = 'p',
            long = "derivation-path",
            env = "DERIVATION_PATH",
            help = "BIP-44 derivation path of the wallet key"
        )]
        derivation_path: Option<String>,

        #[arg(long = "confirm-key", help = "Confirm the public key on the device first")]
        confirm_key: bool,

        #[arg(long = "dry-run", help = "List token accounts without closing anything")]
        dry_run: bool,
    },

    /// Sign with a local secret key (PRIVATE_KEY, or a keypair file)
    Keypair {
        #[arg(short = 'k', long = "keypair", help = "Path to a solana-keygen JSON keypair")]
        keypair_path: Option<PathBuf>,

        #[arg(long = "dry-run", help = "List token accounts without closing anything")]
        dry_run: bool,
    },

    /// Print the effective configuration
    Config {},
}

impl Commands {
    pub fn derivation_path_override(&self) -> Option<String> {
        match self {
            Commands::Ledger { derivation_path, .. } => derivation_path.clone(),
            _ => None,
        }
    }
}

pub struct Context {
    pub config: SweepConfig,
    closer: AccountCloser<RpcChainClient>,
}

impl Context {
    pub fn build(config: SweepConfig) -> Self {
        let client = RpcChainClient::new(
            config.solana.rpc_url.clone(),
            config.solana.commitment.to_commitment_config(),
            config.timeout(),
            config.solana.skip_preflight,
        );

        Self {
            closer: AccountCloser::new(client, CloserConfig::default()),
            config,
        }
    }

    pub fn closer(&self) -> &AccountCloser<RpcChainClient> {
        &self.closer
    }

    pub fn rpc_url(&self) -> String {
        self.closer.client().url()
    }
}
