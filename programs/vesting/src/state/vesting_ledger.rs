use anchor_lang::prelude::*;

use crate::collaborators::{CustodyBalance, DelegationRegistry, ValueStore};
use crate::constants::DELEGATION_NAMESPACE;
use crate::error::{VestingError, VestingResult};
use crate::utils::linear::VestingSchedule;

/// Vesting ledger PDA for one (mint, beneficiary, depositor) triple.
///
/// The custody balance is not stored here; it is whatever the vault holds.
#[account]
pub struct VestingLedger {
    /// Vested token mint.
    pub mint: Pubkey,
    /// Receives every claim. Fixed at creation.
    pub beneficiary: Pubkey,
    /// Only identity allowed to deposit and extend. Fixed at creation.
    pub authorized_depositor: Pubkey,
    /// Linear schedule over the current custody balance.
    pub schedule: VestingSchedule,
    pub bump: u8,
    pub vault_bump: u8,
}

impl VestingLedger {
    pub const SIZE: usize =
        32 + // mint
        32 + // beneficiary
        32 + // authorized_depositor
        VestingSchedule::SIZE +
        1 +  // bump
        1;   // vault_bump

    /// One-time setup. Registers the beneficiary as voting delegate for the
    /// ledger's holdings before any field is written.
    pub fn initialize<R: DelegationRegistry>(
        &mut self,
        registry: &mut R,
        mint: Pubkey,
        beneficiary: Pubkey,
        authorized_depositor: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) -> VestingResult<()> {
        if beneficiary == Pubkey::default() || authorized_depositor == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        registry.set_delegate(DELEGATION_NAMESPACE, &beneficiary)?;

        self.mint = mint;
        self.beneficiary = beneficiary;
        self.authorized_depositor = authorized_depositor;
        self.schedule = VestingSchedule::default();
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    /// Pull `amount` from the depositor and move the schedule end to `new_end`.
    ///
    /// Checks run in a fixed order: beneficiary, depositor, end monotonicity.
    pub fn deposit<S: ValueStore>(
        &mut self,
        store: &mut S,
        caller: &Pubkey,
        amount: u64,
        new_end: i64,
        expected_beneficiary: &Pubkey,
        now: i64,
    ) -> VestingResult<()> {
        if *expected_beneficiary != self.beneficiary {
            return Err(VestingError::BeneficiaryMismatch);
        }
        if *caller != self.authorized_depositor {
            return Err(VestingError::UnauthorizedDepositor);
        }
        self.transact(|schedule| {
            schedule.extend(now, new_end)?;
            store.transfer_from(caller, amount)
        })
    }

    /// Pay out everything matured so far and re-anchor the remainder at `now`.
    /// Returns the amount sent to the beneficiary, possibly zero.
    ///
    /// An empty custody leaves the schedule as is; a claim that empties it
    /// drops the anchor so the next deposit starts its own schedule.
    pub fn claim<S: ValueStore>(&mut self, store: &mut S, now: i64) -> VestingResult<u64> {
        let balance = store.custody_balance();
        let amount = self.schedule.claimable(balance, now)?;
        let beneficiary = self.beneficiary;
        self.transact(|schedule| {
            if amount == balance {
                if balance > 0 {
                    schedule.drain();
                }
            } else {
                schedule.restart(now);
            }
            store.transfer(&beneficiary, amount)?;
            Ok(amount)
        })
    }

    pub fn currently_claimable<B: CustodyBalance>(&self, store: &B, now: i64) -> VestingResult<u64> {
        self.schedule.claimable(store.custody_balance(), now)
    }

    /// Apply `op` to the schedule; restore the prior schedule if it fails so a
    /// failed transfer never leaves a half-applied update behind.
    fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut VestingSchedule) -> VestingResult<T>,
    ) -> VestingResult<T> {
        let snapshot = self.schedule;
        match op(&mut self.schedule) {
            Ok(v) => Ok(v),
            Err(e) => {
                self.schedule = snapshot;
                Err(e)
            }
        }
    }
}
