mod token_account;

pub use token_account::*;
