#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use rentsweep_client::{ChainClient, ChainError, RawTokenAccount};
use solana_sdk::{
    hash::Hash,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::Signature,
    signer::{Signer, SignerError},
    transaction::{Transaction, TransactionError},
};
use spl_token::state::{Account, AccountState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    GetTokenAccounts,
    GetLatestBlockhash,
    Submit,
}

/// In-memory chain that records every call made against it.
pub struct MockChain {
    pub accounts: Vec<RawTokenAccount>,
    pub blockhash: Hash,
    pub fail_query: bool,
    pub reject_submission: Option<TransactionError>,
    pub calls: Mutex<Vec<Call>>,
    pub submitted: Mutex<Vec<Transaction>>,
}

impl MockChain {
    pub fn new(accounts: Vec<RawTokenAccount>) -> Self {
        Self {
            accounts,
            blockhash: Hash::new_unique(),
            fail_query: false,
            reject_submission: None,
            calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<Transaction> {
        self.submitted.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChainClient for MockChain {
    async fn get_token_accounts_by_owner(
        &self,
        _owner: &Pubkey,
        _program_id: &Pubkey,
    ) -> Result<Vec<RawTokenAccount>, ChainError> {
        self.record(Call::GetTokenAccounts);
        if self.fail_query {
            return Err(ChainError::InvalidResponse("connection refused".to_string()));
        }
        Ok(self.accounts.clone())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ChainError> {
        self.record(Call::GetLatestBlockhash);
        Ok(self.blockhash)
    }

    async fn submit_signed_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, ChainError> {
        self.record(Call::Submit);
        self.submitted.lock().unwrap().push(transaction.clone());
        if let Some(err) = &self.reject_submission {
            return Err(ChainError::Transaction(err.clone()));
        }
        Ok(transaction.signatures[0])
    }
}

/// Packs a token account owned by `owner` with the given balance and state.
pub fn token_account(owner: &Pubkey, amount: u64, state: AccountState) -> RawTokenAccount {
    let account = Account {
        mint: Pubkey::new_unique(),
        owner: *owner,
        amount,
        state,
        ..Account::default()
    };

    let mut data = vec![0u8; Account::LEN];
    Account::pack(account, &mut data).unwrap();

    RawTokenAccount {
        address: Pubkey::new_unique(),
        data,
    }
}

/// A device that always refuses to sign.
pub struct RefusingSigner(pub Pubkey);

impl Signer for RefusingSigner {
    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        Ok(self.0)
    }

    fn try_sign_message(&self, _message: &[u8]) -> Result<Signature, SignerError> {
        Err(SignerError::UserCancel("rejected on device".to_string()))
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
