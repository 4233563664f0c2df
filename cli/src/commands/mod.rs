pub mod close;
pub mod config;
