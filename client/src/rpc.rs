use std::{str::FromStr, sync::Arc, time::Duration};

use async_trait::async_trait;
use log::debug;
use serde_json::json;
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcSendTransactionConfig, RpcTokenAccountsFilter},
    rpc_request::RpcRequest,
    rpc_response::{Response, RpcKeyedAccount},
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};

use crate::chain::{ChainClient, RawTokenAccount};
use crate::error::ChainError;

/// [`ChainClient`] backed by a Solana JSON-RPC node.
pub struct RpcChainClient {
    client: Arc<RpcClient>,
    skip_preflight: bool,
}

impl RpcChainClient {
    pub fn new(
        rpc_url: String,
        commitment: CommitmentConfig,
        timeout: Duration,
        skip_preflight: bool,
    ) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(rpc_url, timeout, commitment);
        Self::with_client(client, skip_preflight)
    }

    fn with_client(client: RpcClient, skip_preflight: bool) -> Self {
        Self {
            client: Arc::new(client),
            skip_preflight,
        }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

/// Keeps on-chain rejections (preflight failures included) typed, so they can
/// be told apart from transport errors.
fn submission_error(err: ClientError) -> ChainError {
    match err.get_transaction_error() {
        Some(tx_err) => ChainError::Transaction(tx_err),
        None => ChainError::from(err),
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<RawTokenAccount>, ChainError> {
        // The stock helper asks for jsonParsed; we need the raw layout.
        let config = RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: None,
            commitment: Some(self.client.commitment()),
            min_context_slot: None,
        };

        let response: Response<Vec<RpcKeyedAccount>> = self
            .client
            .send(
                RpcRequest::GetTokenAccountsByOwner,
                json!([
                    owner.to_string(),
                    RpcTokenAccountsFilter::ProgramId(program_id.to_string()),
                    config
                ]),
            )
            .await?;

        debug!(
            "getTokenAccountsByOwner returned {} accounts at slot {}",
            response.value.len(),
            response.context.slot
        );

        response
            .value
            .into_iter()
            .map(|keyed| {
                let address = Pubkey::from_str(&keyed.pubkey).map_err(|e| {
                    ChainError::InvalidResponse(format!("Invalid account address '{}': {}", keyed.pubkey, e))
                })?;
                let data = keyed.account.data.decode().ok_or_else(|| {
                    ChainError::InvalidResponse(format!("Undecodable data for account {address}"))
                })?;
                Ok(RawTokenAccount { address, data })
            })
            .collect()
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ChainError> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn submit_signed_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, ChainError> {
        let config = RpcSendTransactionConfig {
            skip_preflight: self.skip_preflight,
            preflight_commitment: Some(self.client.commitment().commitment),
            ..RpcSendTransactionConfig::default()
        };

        self.client
            .send_transaction_with_config(transaction, config)
            .await
            .map_err(submission_error)
    }
}
