use solana_program::{program_error::ProgramError, program_pack::Pack, pubkey::Pubkey};
use spl_token::state::Account;

pub use spl_token::state::AccountState;

/// One SPL token account owned by the wallet, as read from the chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenAccountRecord {
    pub address: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub state: AccountState,
}

impl TokenAccountRecord {
    /// Decodes the packed token account layout. Uninitialized accounts are
    /// decoded as-is; the length and the state byte are still checked.
    pub fn decode(address: Pubkey, data: &[u8]) -> Result<Self, ProgramError> {
        let account = Account::unpack_unchecked(data)?;

        Ok(Self {
            address,
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
            state: account.state,
        })
    }

    /// Empty and not frozen.
    pub fn is_closable(&self) -> bool {
        self.amount == 0 && self.state != AccountState::Frozen
    }
}

/// Accounts eligible for closure, in the order the chain returned them.
pub fn closure_candidates(records: &[TokenAccountRecord]) -> Vec<&TokenAccountRecord> {
    records.iter().filter(|r| r.is_closable()).collect()
}

/// Picks the single account to close this run: the first eligible one.
pub fn select_for_closure(records: &[TokenAccountRecord]) -> Option<&TokenAccountRecord> {
    records.iter().find(|r| r.is_closable())
}

pub fn state_label(state: AccountState) -> &'static str {
    match state {
        AccountState::Uninitialized => "uninitialized",
        AccountState::Initialized => "initialized",
        AccountState::Frozen => "frozen",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn raw_account(mint: &Pubkey, owner: &Pubkey, amount: u64, state: u8) -> Vec<u8> {
        let mut data = vec![0u8; TOKEN_ACCOUNT_LEN];
        data[MINT_OFFSET..MINT_OFFSET + 32].copy_from_slice(mint.as_ref());
        data[OWNER_OFFSET..OWNER_OFFSET + 32].copy_from_slice(owner.as_ref());
        data[AMOUNT_OFFSET..AMOUNT_OFFSET + 8].copy_from_slice(&amount.to_le_bytes());
        data[STATE_OFFSET] = state;
        data
    }

    fn record(amount: u64, state: AccountState) -> TokenAccountRecord {
        TokenAccountRecord {
            address: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount,
            state,
        }
    }

    fn state_strategy() -> impl Strategy<Value = AccountState> {
        prop_oneof![
            Just(AccountState::Uninitialized),
            Just(AccountState::Initialized),
            Just(AccountState::Frozen),
        ]
    }

    #[test]
    fn test_decode_fixed_layout() {
        let address = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let empty = TokenAccountRecord::decode(address, &raw_account(&mint, &owner, 0, 1)).unwrap();
        assert_eq!(empty.address, address);
        assert_eq!(empty.mint, mint);
        assert_eq!(empty.owner, owner);
        assert_eq!(empty.amount, 0);
        assert_eq!(empty.state, AccountState::Initialized);
        assert!(empty.is_closable());

        let funded = TokenAccountRecord::decode(address, &raw_account(&mint, &owner, 500, 1)).unwrap();
        assert_eq!(funded.amount, 500);
        assert!(!funded.is_closable());

        let frozen = TokenAccountRecord::decode(address, &raw_account(&mint, &owner, 0, 2)).unwrap();
        assert_eq!(frozen.state, AccountState::Frozen);
        assert!(!frozen.is_closable());
    }

    #[test]
    fn test_decode_keeps_full_u64_amount() {
        let data = raw_account(&Pubkey::new_unique(), &Pubkey::new_unique(), u64::MAX, 1);
        let record = TokenAccountRecord::decode(Pubkey::new_unique(), &data).unwrap();
        assert_eq!(record.amount, u64::MAX);
    }

    #[test]
    fn test_decode_rejects_bad_data() {
        let short = vec![0u8; TOKEN_ACCOUNT_LEN - 1];
        assert!(TokenAccountRecord::decode(Pubkey::new_unique(), &short).is_err());

        let bad_state = raw_account(&Pubkey::new_unique(), &Pubkey::new_unique(), 0, 7);
        assert!(TokenAccountRecord::decode(Pubkey::new_unique(), &bad_state).is_err());
    }

    #[test]
    fn test_select_first_candidate_in_query_order() {
        let records = vec![
            record(10, AccountState::Initialized),
            record(0, AccountState::Frozen),
            record(0, AccountState::Initialized),
            record(0, AccountState::Initialized),
        ];

        let selected = select_for_closure(&records).unwrap();
        assert_eq!(selected.address, records[2].address);

        let candidates = closure_candidates(&records);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].address, records[2].address);
        assert_eq!(candidates[1].address, records[3].address);
    }

    #[test]
    fn test_nothing_selected_without_candidates() {
        assert!(select_for_closure(&[]).is_none());

        let records = vec![record(1, AccountState::Initialized), record(0, AccountState::Frozen)];
        assert!(select_for_closure(&records).is_none());
    }

    proptest! {
        #[test]
        fn candidates_are_exactly_empty_unfrozen(
            accounts in prop::collection::vec((prop_oneof![Just(0u64), any::<u64>()], state_strategy()), 0..32)
        ) {
            let records: Vec<_> = accounts.iter().map(|(amount, state)| record(*amount, *state)).collect();
            let candidates = closure_candidates(&records);

            let expected: Vec<_> = records
                .iter()
                .filter(|r| r.amount == 0 && r.state != AccountState::Frozen)
                .map(|r| r.address)
                .collect();
            let actual: Vec<_> = candidates.iter().map(|r| r.address).collect();
            prop_assert_eq!(&actual, &expected);

            for r in &records {
                if r.amount != 0 || r.state == AccountState::Frozen {
                    prop_assert!(!actual.contains(&r.address));
                }
            }

            prop_assert_eq!(select_for_closure(&records).map(|r| r.address), expected.first().copied());
        }
    }
}
