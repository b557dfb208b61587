use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::error::{VestingError, VestingResult};

/// Read side of the custody: the amount currently held for the ledger.
pub trait CustodyBalance {
    fn custody_balance(&self) -> u64;
}

/// Holds and moves the vested asset on behalf of a single ledger.
pub trait ValueStore: CustodyBalance {
    /// Move `amount` from `owner` into custody.
    fn transfer_from(&mut self, owner: &Pubkey, amount: u64) -> VestingResult<()>;

    /// Move `amount` out of custody to `to`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> VestingResult<()>;
}

/// SPL Token custody: the ledger's vault plus the token account on the other
/// side of the transfer.
pub struct SplCustody<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub counterparty: &'a Account<'info, TokenAccount>,
    /// Depositor for inbound transfers, ledger PDA for outbound ones.
    pub authority: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'info> SplCustody<'_, 'info> {
    fn invoke_transfer(
        &self,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        amount: u64,
    ) -> VestingResult<()> {
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from,
                    to,
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
        .map_err(|e| {
            msg!("custody transfer of {} failed: {}", amount, e);
            VestingError::TransferFailure
        })
    }
}

/// The token account on the far side of a transfer must belong to the
/// identity the ledger is moving funds from or to.
fn check_counterparty(account_owner: &Pubkey, identity: &Pubkey) -> VestingResult<()> {
    if account_owner != identity {
        msg!("token account owner {} is not {}", account_owner, identity);
        return Err(VestingError::InvalidTokenAccount);
    }
    Ok(())
}

impl CustodyBalance for Account<'_, TokenAccount> {
    fn custody_balance(&self) -> u64 {
        self.amount
    }
}

impl CustodyBalance for SplCustody<'_, '_> {
    fn custody_balance(&self) -> u64 {
        self.vault.amount
    }
}

impl ValueStore for SplCustody<'_, '_> {
    fn transfer_from(&mut self, owner: &Pubkey, amount: u64) -> VestingResult<()> {
        check_counterparty(&self.counterparty.owner, owner)?;
        self.invoke_transfer(
            self.counterparty.to_account_info(),
            self.vault.to_account_info(),
            amount,
        )
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> VestingResult<()> {
        check_counterparty(&self.counterparty.owner, to)?;
        self.invoke_transfer(
            self.vault.to_account_info(),
            self.counterparty.to_account_info(),
            amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterparty_owned_by_identity_passes() {
        let owner = Pubkey::new_unique();
        assert!(check_counterparty(&owner, &owner).is_ok());
    }

    #[test]
    fn counterparty_owned_by_someone_else_is_rejected() {
        let res = check_counterparty(&Pubkey::new_unique(), &Pubkey::new_unique());
        assert!(matches!(res, Err(VestingError::InvalidTokenAccount)));
    }
}
