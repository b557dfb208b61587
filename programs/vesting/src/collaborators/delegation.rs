use anchor_lang::prelude::*;
use delegate_registry::cpi::accounts::SetDelegate;

use crate::error::{VestingError, VestingResult};

/// Records who may vote with the funds a ledger holds.
pub trait DelegationRegistry {
    fn set_delegate(&mut self, namespace: [u8; 32], delegate: &Pubkey) -> VestingResult<()>;
}

/// `delegate-registry` program, with the ledger PDA signing as delegator.
pub struct RegistryCpi<'a, 'info> {
    pub registry_program: AccountInfo<'info>,
    pub delegation: AccountInfo<'info>,
    pub delegator: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl DelegationRegistry for RegistryCpi<'_, '_> {
    fn set_delegate(&mut self, namespace: [u8; 32], delegate: &Pubkey) -> VestingResult<()> {
        delegate_registry::cpi::set_delegate(
            CpiContext::new_with_signer(
                self.registry_program.clone(),
                SetDelegate {
                    delegation: self.delegation.clone(),
                    delegator: self.delegator.clone(),
                    payer: self.payer.clone(),
                    system_program: self.system_program.clone(),
                },
                self.signer_seeds,
            ),
            namespace,
            *delegate,
        )
        .map_err(|e| {
            msg!("delegate registration for {} failed: {}", delegate, e);
            VestingError::DelegationFailure
        })
    }
}
