use async_trait::async_trait;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};

use crate::error::ChainError;

/// A token account as returned by the chain, before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTokenAccount {
    pub address: Pubkey,
    pub data: Vec<u8>,
}

/// The three chain operations a closure run needs. Endpoint, commitment and
/// timeouts belong to the implementation.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<RawTokenAccount>, ChainError>;

    async fn get_latest_blockhash(&self) -> Result<Hash, ChainError>;

    async fn submit_signed_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, ChainError>;
}
