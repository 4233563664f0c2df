pub mod chain;
pub mod closer;
pub mod error;
pub mod rpc;
pub mod signer;
pub mod utils;

pub use chain::*;
pub use closer::*;
pub use error::*;
pub use rpc::*;
pub use utils::*;
