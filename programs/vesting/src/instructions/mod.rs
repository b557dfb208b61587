pub mod initialize_ledger;
pub mod deposit;
pub mod claim;
pub mod currently_claimable;

pub use initialize_ledger::*;
pub use deposit::*;
pub use claim::*;
pub use currently_claimable::*;
