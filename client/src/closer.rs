use log::{debug, info};
use rentsweep_api::prelude::*;
use solana_sdk::{pubkey::Pubkey, signature::Signature, signer::Signer};

use crate::chain::ChainClient;
use crate::error::CloseError;
use crate::utils::{build_close_tx, sign_close_tx};

/// Settings resolved by the caller before a run starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloserConfig {
    pub token_program: Pubkey,
}

impl Default for CloserConfig {
    fn default() -> Self {
        Self {
            token_program: TOKEN_PROGRAM_ID,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClosureOutcome {
    /// No empty, unfrozen token account was found. Nothing was sent.
    Nothing,
    Closed {
        account: Pubkey,
        signature: Signature,
    },
}

/// Finds an empty token account of a wallet and closes it, one per run.
pub struct AccountCloser<C> {
    client: C,
    config: CloserConfig,
}

impl<C: ChainClient> AccountCloser<C> {
    pub fn new(client: C, config: CloserConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetches and decodes every token account owned by `wallet`, in the
    /// order the chain returned them.
    pub async fn scan(&self, wallet: &Pubkey) -> Result<Vec<TokenAccountRecord>, CloseError> {
        let accounts = self
            .client
            .get_token_accounts_by_owner(wallet, &self.config.token_program)
            .await
            .map_err(CloseError::QueryFailure)?;

        debug!("Fetched {} token accounts for {}", accounts.len(), wallet);

        accounts
            .into_iter()
            .map(|raw| {
                TokenAccountRecord::decode(raw.address, &raw.data).map_err(|reason| {
                    CloseError::DecodeFailure {
                        address: raw.address,
                        reason,
                    }
                })
            })
            .collect()
    }

    /// Closes the first empty, unfrozen token account owned by `wallet`,
    /// sending its rent back to `wallet`. At most one transaction is
    /// submitted, and it is never retried.
    pub async fn close_one_eligible_account(
        &self,
        wallet: &Pubkey,
        signer: &dyn Signer,
    ) -> Result<ClosureOutcome, CloseError> {
        let records = self.scan(wallet).await?;
        info!("SPL token accounts found: {}", records.len());

        let Some(target) = select_for_closure(&records) else {
            info!("No SPL token accounts to close");
            return Ok(ClosureOutcome::Nothing);
        };
        let account = target.address;
        info!("Closing SPL token account {account}");

        // Fetched after selection so the signature window starts as late as possible.
        let blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .map_err(CloseError::QueryFailure)?;

        let mut transaction = build_close_tx(&self.config.token_program, &account, wallet, blockhash)?;
        sign_close_tx(&mut transaction, wallet, signer)?;

        let signature = self
            .client
            .submit_signed_transaction(&transaction)
            .await
            .map_err(CloseError::SubmissionFailure)?;

        info!("Transaction sent: {signature}");

        Ok(ClosureOutcome::Closed { account, signature })
    }
}
