//! Interfaces the ledger drives, and their on-chain adapters.

pub mod delegation;
pub mod value_store;

pub use delegation::*;
pub use value_store::*;
