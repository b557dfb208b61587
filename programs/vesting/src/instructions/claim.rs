use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::collaborators::SplCustody;
use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;

/// Open to any signer: funds only ever move to the fixed beneficiary.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Capture the PDA signer before taking the mutable ledger borrow.
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let st = &ctx.accounts.ledger;
    let (mint, beneficiary, depositor) = (st.mint, st.beneficiary, st.authorized_depositor);
    let bump_seed = [st.bump];
    let seeds: &[&[u8]] = &[
        LEDGER_SEED,
        mint.as_ref(),
        beneficiary.as_ref(),
        depositor.as_ref(),
        &bump_seed,
    ];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let mut custody = SplCustody {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: &ctx.accounts.vault,
        counterparty: &ctx.accounts.beneficiary_token_account,
        authority: ledger_ai,
        signer_seeds,
    };
    let amount = ctx.accounts.ledger.claim(&mut custody, now)?;

    ctx.accounts.vault.reload()?;
    let ledger = &ctx.accounts.ledger;
    emit!(TokensClaimed {
        ledger: ledger.key(),
        caller: ctx.accounts.caller.key(),
        beneficiary,
        amount,
        vesting_start: ledger.schedule.start,
        vesting_end: ledger.schedule.end,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
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
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == ledger.beneficiary @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub ledger: Pubkey,
    pub caller: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub vesting_start: Option<i64>,
    pub vesting_end: Option<i64>,
    pub vault_balance: u64,
}
