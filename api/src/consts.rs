use solana_program::{program_pack::Pack, pubkey::Pubkey};

// ====================================================================
// Token Program
// ====================================================================
/// Program that owns the token accounts we sweep
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;

/// Size of a packed SPL token account, in bytes
pub const TOKEN_ACCOUNT_LEN: usize = spl_token::state::Account::LEN;

// ====================================================================
// Token Account Layout Offsets
// ====================================================================
/// Byte offset of the mint pubkey
pub const MINT_OFFSET:   usize = 0;
/// Byte offset of the owner pubkey
pub const OWNER_OFFSET:  usize = 32;
/// Byte offset of the little-endian u64 amount
pub const AMOUNT_OFFSET: usize = 64;
/// Byte offset of the account state byte
pub const STATE_OFFSET:  usize = 108;

// ====================================================================
// Signing
// ====================================================================
/// BIP-44 path of the first Solana account on a hardware wallet
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/501'/0'/0'";

/// Locator of the first connected Ledger device
pub const DEFAULT_LEDGER_LOCATOR: &str = "usb://ledger";

// ====================================================================
// Cluster
// ====================================================================
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Explorer prefix used when reporting a submitted transaction
pub const EXPLORER_TX_URL: &str = "https://solscan.io/tx/";
