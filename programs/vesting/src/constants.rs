//! Program-wide constants.

/// Seed prefix of the ledger PDA: `["ledger", mint, beneficiary, depositor]`.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed prefix of the custody token account: `["vault", ledger]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Namespace under which the beneficiary is registered as delegate for the
/// ledger's holdings.
pub const DELEGATION_NAMESPACE: [u8; 32] = *b"linear-vesting.voting.delegation";
