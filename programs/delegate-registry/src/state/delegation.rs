use anchor_lang::prelude::*;

use crate::error::{RegistryError, RegistryResult};

/// Delegation record PDA, seeds `["delegation", delegator, namespace]`.
#[account]
pub struct Delegation {
    /// Token holder granting the voting right.
    pub delegator: Pubkey,
    /// Caller-chosen key scoping the delegation (e.g. one governance space).
    pub namespace: [u8; 32],
    /// Identity currently allowed to vote for `delegator` in `namespace`.
    pub delegate: Pubkey,
    pub bump: u8,
}

impl Delegation {
    pub const SEED_PREFIX: &'static [u8] = b"delegation";

    pub const SIZE: usize =
        32 + // delegator
        32 + // namespace
        32 + // delegate
        1;   // bump

    /// Point the record at `delegate`, returning the previous delegate if one
    /// was set. A freshly created record carries the default key.
    pub fn assign(
        &mut self,
        delegator: Pubkey,
        namespace: [u8; 32],
        delegate: Pubkey,
        bump: u8,
    ) -> RegistryResult<Option<Pubkey>> {
        if delegate == Pubkey::default() {
            return Err(RegistryError::InvalidDelegate);
        }
        if delegate == self.delegate {
            return Err(RegistryError::AlreadyDelegated);
        }
        let previous = (self.delegate != Pubkey::default()).then_some(self.delegate);

        self.delegator = delegator;
        self.namespace = namespace;
        self.delegate = delegate;
        self.bump = bump;
        Ok(previous)
    }
}
