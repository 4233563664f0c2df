use anyhow::Result;

use crate::cli::Context;
use crate::log;

pub fn handle_config_command(context: &Context) -> Result<()> {
    let config = &context.config;

    log::print_section_header("Effective Configuration");
    log::print_message(&format!("RPC URL: {}", config.solana.rpc_url));
    log::print_message(&format!("Commitment: {}", config.solana.commitment));
    log::print_message(&format!("Skip Preflight: {}", config.solana.skip_preflight));
    log::print_message(&format!("Timeout: {}s", config.solana.timeout_secs));
    log::print_message(&format!("Keypair Path: {}", config.keypair_path().display()));
    log::print_message(&format!("Derivation Path: {}", config.identity.derivation_path));
    log::print_message(&format!("Log Level: {}", config.logging.log_level.as_filter()));
    log::print_divider();

    Ok(())
}
