use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Delegate must not be the default public key")]
    InvalidDelegate,

    #[msg("Already delegated to this identity")]
    AlreadyDelegated,

    #[msg("Unauthorized: delegator signature required")]
    UnauthorizedDelegator,
}

/// Result of record-level checks; converts into an Anchor error with `?`.
pub type RegistryResult<T> = core::result::Result<T, RegistryError>;
