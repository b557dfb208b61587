use anchor_lang::prelude::*;

pub mod collaborators;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("iK7wET3th9Rjsv4xqpq4rfj4Sha5mRv3WC11gwHPfkS");

/// Single-beneficiary linear vesting. Deposits extend the schedule, claims pay
/// out what has matured and restart the schedule for the remainder.
#[program]
pub mod linear_vesting {
    use super::*;

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        beneficiary: Pubkey,
        authorized_depositor: Pubkey,
    ) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx, beneficiary, authorized_depositor)
    }

    pub fn deposit(
        ctx: Context<Deposit>,
        amount: u64,
        new_end: i64,
        expected_beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::deposit::deposit(ctx, amount, new_end, expected_beneficiary)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn currently_claimable(ctx: Context<CurrentlyClaimable>) -> Result<u64> {
        instructions::currently_claimable::currently_claimable(ctx)
    }
}
