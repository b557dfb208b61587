use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::collaborators::SplCustody;
use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;

pub fn deposit(
    ctx: Context<Deposit>,
    amount: u64,
    new_end: i64,
    expected_beneficiary: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let depositor = ctx.accounts.depositor.key();

    let mut custody = SplCustody {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: &ctx.accounts.vault,
        counterparty: &ctx.accounts.depositor_token_account,
        authority: ctx.accounts.depositor.to_account_info(),
        signer_seeds: &[],
    };
    ctx.accounts.ledger.deposit(
        &mut custody,
        &depositor,
        amount,
        new_end,
        &expected_beneficiary,
        now,
    )?;

    ctx.accounts.vault.reload()?;
    let ledger = &ctx.accounts.ledger;
    emit!(TokensDeposited {
        ledger: ledger.key(),
        depositor,
        amount,
        vesting_start: ledger.schedule.start,
        vesting_end: ledger.schedule.end,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
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
        constraint = depositor_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub ledger: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub vesting_start: Option<i64>,
    pub vesting_end: Option<i64>,
    pub vault_balance: u64,
}
