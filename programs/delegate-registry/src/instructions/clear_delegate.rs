use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::state::Delegation;

pub fn clear_delegate(ctx: Context<ClearDelegate>, namespace: [u8; 32]) -> Result<()> {
    let rec = &ctx.accounts.delegation;
    emit!(DelegateCleared {
        delegator: rec.delegator,
        namespace,
        delegate: rec.delegate,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(namespace: [u8; 32])]
pub struct ClearDelegate<'info> {
    #[account(
        mut,
        seeds = [Delegation::SEED_PREFIX, delegator.key().as_ref(), namespace.as_ref()],
        bump = delegation.bump,
        has_one = delegator @ RegistryError::UnauthorizedDelegator,
        close = receiver
    )]
    pub delegation: Account<'info, Delegation>,

    pub delegator: Signer<'info>,

    /// CHECK: only receives the reclaimed rent.
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,
}

#[event]
pub struct DelegateCleared {
    pub delegator: Pubkey,
    pub namespace: [u8; 32],
    pub delegate: Pubkey,
}
