use rentsweep_api::prelude::*;
use solana_sdk::{
    hash::Hash,
    message::Message,
    pubkey::Pubkey,
    signer::{Signer, SignerError},
    transaction::Transaction,
};

use crate::error::CloseError;

/// Builds an unsigned transaction holding a single close instruction for
/// `account`. `wallet` pays the fee, receives the rent and signs.
pub fn build_close_tx(
    token_program: &Pubkey,
    account: &Pubkey,
    wallet: &Pubkey,
    blockhash: Hash,
) -> Result<Transaction, CloseError> {
    let close_ix = build_close_ix(token_program, account, wallet)
        .map_err(CloseError::InstructionBuild)?;

    let message = Message::new_with_blockhash(&[close_ix], Some(wallet), &blockhash);
    Ok(Transaction::new_unsigned(message))
}

/// Signs the serialized message once and stores the signature in the fee
/// payer's slot.
pub fn sign_close_tx(
    transaction: &mut Transaction,
    wallet: &Pubkey,
    signer: &dyn Signer,
) -> Result<(), SignerError> {
    if signer.try_pubkey()? != *wallet {
        return Err(SignerError::KeypairPubkeyMismatch);
    }

    let fee_payer = transaction.message.account_keys.first();
    if fee_payer != Some(wallet) || transaction.signatures.is_empty() {
        return Err(SignerError::KeypairPubkeyMismatch);
    }

    let message_data = transaction.message_data();
    let signature = signer.try_sign_message(&message_data)?;
    transaction.signatures[0] = signature;

    Ok(())
}

pub fn explorer_tx_url(signature: &impl std::fmt::Display) -> String {
    format!("{EXPLORER_TX_URL}{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Keypair;

    #[test]
    fn test_close_tx_layout() {
        let wallet = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let blockhash = Hash::new_unique();

        let tx = build_close_tx(&TOKEN_PROGRAM_ID, &account, &wallet, blockhash).unwrap();

        assert_eq!(tx.message.account_keys[0], wallet);
        assert_eq!(tx.message.recent_blockhash, blockhash);
        assert_eq!(tx.message.header.num_required_signatures, 1);
        assert_eq!(tx.message.instructions.len(), 1);
        assert_eq!(tx.signatures.len(), 1);

        let ix = &tx.message.instructions[0];
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|i| tx.message.account_keys[*i as usize]).collect();
        assert_eq!(keys, vec![account, wallet, wallet]);
        assert_eq!(*ix.program_id(&tx.message.account_keys), TOKEN_PROGRAM_ID);
    }

    #[test]
    fn test_sign_close_tx() {
        let keypair = Keypair::new();
        let wallet = keypair.pubkey();
        let mut tx = build_close_tx(&TOKEN_PROGRAM_ID, &Pubkey::new_unique(), &wallet, Hash::new_unique()).unwrap();

        sign_close_tx(&mut tx, &wallet, &keypair).unwrap();
        assert!(tx.is_signed());
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn test_sign_close_tx_rejects_other_key() {
        let wallet = Pubkey::new_unique();
        let mut tx = build_close_tx(&TOKEN_PROGRAM_ID, &Pubkey::new_unique(), &wallet, Hash::new_unique()).unwrap();

        let res = sign_close_tx(&mut tx, &wallet, &Keypair::new());
        assert_eq!(res, Err(SignerError::KeypairPubkeyMismatch));
        assert!(!tx.is_signed());
    }
}
