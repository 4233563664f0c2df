use solana_program::{instruction::Instruction, program_error::ProgramError, pubkey::Pubkey};

/// Builds the `CloseAccount` instruction for `account`, with `wallet` as
/// both the rent destination and the closing authority.
pub fn build_close_ix(
    token_program: &Pubkey,
    account: &Pubkey,
    wallet: &Pubkey,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::close_account(token_program, account, wallet, wallet, &[])
}
