use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use rentsweep_api::prelude::*;
use rentsweep_client::{explorer_tx_url, signer::Signer, ClosureOutcome};

use crate::cli::{Cli, Commands, Context};
use crate::keypair::{load_ledger_signer, load_local_signer};
use crate::log;

pub async fn handle_close_command(cli: &Cli, context: &Context) -> Result<()> {
    let (signer, dry_run) = match &cli.command {
        Commands::Ledger { confirm_key, dry_run, .. } => {
            if !cli.yes && !confirm("→ Is your Ledger unlocked with the Solana app open?")? {
                log::print_error("Cancelled");
                return Ok(());
            }
            let signer = load_ledger_signer(&context.config.identity.derivation_path, *confirm_key)?;
            (signer, *dry_run)
        }
        Commands::Keypair { keypair_path, dry_run } => {
            let signer = load_local_signer(keypair_path.as_ref(), context.config.keypair_path())?;
            (signer, *dry_run)
        }
        Commands::Config {} => return Ok(()),
    };

    let wallet = signer
        .try_pubkey()
        .map_err(|e| anyhow!("Failed to read wallet public key: {}", e))?;
    log::print_message(&format!("Checking wallet: {wallet}"));

    let needs_scan = dry_run || !cli.yes;
    if needs_scan {
        let records = context.closer().scan(&wallet).await?;
        print_accounts(&records, dry_run || cli.verbose);

        if dry_run {
            return Ok(());
        }

        let Some(target) = select_for_closure(&records) else {
            log::print_info("No SPL token accounts to close.");
            return Ok(());
        };

        let prompt = format!("→ Close SPL token account {} and reclaim its rent?", target.address);
        if !confirm(&prompt)? {
            log::print_error("Close cancelled");
            return Ok(());
        }
    }

    if signer.is_interactive() {
        log::print_info("Approve the transaction on your Ledger...");
    }

    let outcome = context
        .closer()
        .close_one_eligible_account(&wallet, signer.as_ref())
        .await?;

    match outcome {
        ClosureOutcome::Nothing => {
            log::print_info("No SPL token accounts to close.");
        }
        ClosureOutcome::Closed { account, signature } => {
            log::print_divider();
            log::print_success(&format!("Closed SPL token account: {account}"));
            log::print_message(&format!("Txn sent: {}", explorer_tx_url(&signature)));
            log::print_divider();
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow!("Failed to get user input: {}", e))
}

fn print_accounts(records: &[TokenAccountRecord], detailed: bool) {
    let candidates = closure_candidates(records);

    log::print_message(&format!("SPL token accounts found: {}", records.len()));
    log::print_message(&format!("Empty and closable: {}", candidates.len()));

    if !detailed {
        return;
    }

    log::print_section_header("Token Accounts");
    for record in records {
        let line = format!(
            "{}  mint {}  amount {}  {}",
            record.address,
            record.mint,
            record.amount,
            state_label(record.state)
        );
        if record.is_closable() {
            log::print_success(&format!("{line}  (closable)"));
        } else {
            log::print_message(&line);
        }
    }
    log::print_divider();
}
