pub mod vesting_ledger;

pub use vesting_ledger::*;
