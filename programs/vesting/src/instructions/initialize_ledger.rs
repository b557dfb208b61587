use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use delegate_registry::program::DelegateRegistry;
use delegate_registry::state::Delegation;

use crate::collaborators::RegistryCpi;
use crate::constants::{DELEGATION_NAMESPACE, LEDGER_SEED, VAULT_SEED};
use crate::state::VestingLedger;

pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    beneficiary: Pubkey,
    authorized_depositor: Pubkey,
) -> Result<()> {
    let mint = ctx.accounts.mint.key();
    let bump = ctx.bumps.ledger;
    let vault_bump = ctx.bumps.vault;

    // The ledger PDA signs the registry CPI as delegator.
    let bump_seed = [bump];
    let seeds: &[&[u8]] = &[
        LEDGER_SEED,
        mint.as_ref(),
        beneficiary.as_ref(),
        authorized_depositor.as_ref(),
        &bump_seed,
    ];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let mut registry = RegistryCpi {
        registry_program: ctx.accounts.delegate_registry.to_account_info(),
        delegation: ctx.accounts.delegation.to_account_info(),
        delegator: ctx.accounts.ledger.to_account_info(),
        payer: ctx.accounts.payer.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds,
    };

    let ledger = &mut ctx.accounts.ledger;
    ledger.initialize(
        &mut registry,
        mint,
        beneficiary,
        authorized_depositor,
        bump,
        vault_bump,
    )?;

    emit!(LedgerInitialized {
        ledger: ledger.key(),
        mint,
        vault: ctx.accounts.vault.key(),
        beneficiary,
        authorized_depositor,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, authorized_depositor: Pubkey)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + VestingLedger::SIZE,
        seeds = [
            LEDGER_SEED,
            mint.key().as_ref(),
            beneficiary.as_ref(),
            authorized_depositor.as_ref()
        ],
        bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub delegate_registry: Program<'info, DelegateRegistry>,

    #[account(
        mut,
        seeds = [
            Delegation::SEED_PREFIX,
            ledger.key().as_ref(),
            DELEGATION_NAMESPACE.as_ref()
        ],
        bump,
        seeds::program = delegate_registry.key()
    )]
    /// CHECK: Created and written by the delegate-registry program during the CPI.
    pub delegation: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub beneficiary: Pubkey,
    pub authorized_depositor: Pubkey,
}
