use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;

/// Read-only quote. The amount is returned through return data and also
/// emitted as an event for log-based clients.
pub fn currently_claimable(ctx: Context<CurrentlyClaimable>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = &ctx.accounts.ledger;
    let vault = &ctx.accounts.vault;
    let claimable = ledger.currently_claimable(vault, now)?;

    emit!(ClaimableQuote {
        ledger: ledger.key(),
        beneficiary: ledger.beneficiary,
        vault_balance: vault.amount,
        claimable,
        vesting_start: ledger.schedule.start,
        vesting_end: ledger.schedule.end,
        quoted_at: now,
    });

    Ok(claimable)
}

#[derive(Accounts)]
pub struct CurrentlyClaimable<'info> {
    #[account(
        seeds = [
            LEDGER_SEED,
            ledger.mint.as_ref(),
            ledger.beneficiary.as_ref(),
            ledger.authorized_depositor.as_ref()
        ],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct ClaimableQuote {
    pub ledger: Pubkey,
    pub beneficiary: Pubkey,
    pub vault_balance: u64,
    pub claimable: u64,
    pub vesting_start: Option<i64>,
    pub vesting_end: Option<i64>,
    pub quoted_at: i64,
}
