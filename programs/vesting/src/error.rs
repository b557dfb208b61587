use anchor_lang::prelude::*;

/// Custom error codes for the linear vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Expected beneficiary does not match this ledger")]
    BeneficiaryMismatch,

    #[msg("Unauthorized: authorized depositor signature required")]
    UnauthorizedDepositor,

    #[msg("Vesting end may only move later")]
    VestingPeriodDecrease,

    #[msg("Token transfer failed")]
    TransferFailure,

    #[msg("Delegate registration failed")]
    DelegationFailure,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of host-independent ledger logic; converts into an Anchor error with `?`.
pub type VestingResult<T> = core::result::Result<T, VestingError>;
