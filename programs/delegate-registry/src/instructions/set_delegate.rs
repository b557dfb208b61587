use anchor_lang::prelude::*;

use crate::state::Delegation;

pub fn set_delegate(ctx: Context<SetDelegate>, namespace: [u8; 32], delegate: Pubkey) -> Result<()> {
    let delegator = ctx.accounts.delegator.key();
    let rec = &mut ctx.accounts.delegation;
    let previous = rec.assign(delegator, namespace, delegate, ctx.bumps.delegation)?;

    emit!(DelegateSet {
        delegator,
        namespace,
        previous_delegate: previous.unwrap_or_default(),
        delegate,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(namespace: [u8; 32])]
pub struct SetDelegate<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Delegation::SIZE,
        seeds = [Delegation::SEED_PREFIX, delegator.key().as_ref(), namespace.as_ref()],
        bump
    )]
    pub delegation: Account<'info, Delegation>,

    pub delegator: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct DelegateSet {
    pub delegator: Pubkey,
    pub namespace: [u8; 32],
    /// Default key when no delegate was recorded before.
    pub previous_delegate: Pubkey,
    pub delegate: Pubkey,
}
