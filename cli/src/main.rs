mod cli;
mod commands;
mod config;
mod keypair;
mod log;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands, Context};
use commands::{close, config as config_cmd};
use env_logger::{self, Env};

use crate::config::SweepConfig;

fn main() {
    let cli = Cli::parse();

    let config = match SweepConfig::load(&cli.config)
        .and_then(|config| config.with_overrides(cli.rpc_url.clone(), cli.command.derivation_path_override()))
    {
        Ok(config) => config,
        Err(e) => {
            log::print_error(&format!("Configuration error: {}", e));
            log::print_info("Please check your rentsweep.toml and environment, then try again.");
            std::process::exit(1);
        }
    };

    let client_level = if cli.verbose { "debug" } else { config.logging.log_level.as_filter() };
    env_logger::Builder::from_env(
        Env::default().default_filter_or(format!("rentsweep_client={client_level}")),
    )
    .init();

    if let Err(e) = run(cli, config) {
        log::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: SweepConfig) -> Result<()> {
    // One request at a time; no need for worker threads.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to start async runtime: {}", e))?;

    rt.block_on(run_rentsweep_cli(cli, config))
}

async fn run_rentsweep_cli(cli: Cli, config: SweepConfig) -> Result<()> {
    log::print_title(format!("SPL Token Account Closing Tool {}", env!("CARGO_PKG_VERSION")).as_str());
    log::print_divider();

    let context = Context::build(config);

    match &cli.command {
        Commands::Config {} => {
            config_cmd::handle_config_command(&context)?;
        }
        Commands::Ledger { .. } => {
            log::print_message(&format!("Connected to: {}", context.rpc_url()));
            log::print_info("Running using a ledger wallet...");
            close::handle_close_command(&cli, &context).await?;
        }
        Commands::Keypair { .. } => {
            log::print_message(&format!("Connected to: {}", context.rpc_url()));
            log::print_info("Running using a keypair wallet...");
            close::handle_close_command(&cli, &context).await?;
        }
    }

    Ok(())
}
