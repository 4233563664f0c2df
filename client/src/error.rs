use solana_client::client_error::ClientError;
use solana_sdk::{
    program_error::ProgramError,
    pubkey::Pubkey,
    signer::SignerError,
    transaction::TransactionError,
};
use thiserror::Error;

/// Failure reported by a [`ChainClient`](crate::ChainClient).
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("RPC error: {0}")]
    Rpc(#[from] Box<ClientError>),
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for ChainError {
    fn from(err: ClientError) -> Self {
        ChainError::Rpc(Box::new(err))
    }
}

/// Why a closure run did not complete. Nothing on chain has changed when
/// any of these is returned.
#[derive(Error, Debug)]
pub enum CloseError {
    #[error("Failed to query token accounts: {0}")]
    QueryFailure(#[source] ChainError),
    #[error("Token account {address} does not match the token account layout: {reason}")]
    DecodeFailure {
        address: Pubkey,
        #[source]
        reason: ProgramError,
    },
    #[error("Failed to build close instruction: {0}")]
    InstructionBuild(#[source] ProgramError),
    #[error("Failed to sign transaction: {0}")]
    SigningFailure(#[from] SignerError),
    #[error("Transaction was rejected: {0}")]
    SubmissionFailure(#[source] ChainError),
}
