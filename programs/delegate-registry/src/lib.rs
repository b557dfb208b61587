use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;

pub use instructions::*;

declare_id!("5uZx6i495t9gFarGr862SdTQoq2MTRoLWLDBH3gxvzM7");

/// Records which identity may exercise voting rights on behalf of a token
/// holder, one record per (delegator, namespace) pair.
#[program]
pub mod delegate_registry {
    use super::*;

    pub fn set_delegate(
        ctx: Context<SetDelegate>,
        namespace: [u8; 32],
        delegate: Pubkey,
    ) -> Result<()> {
        instructions::set_delegate::set_delegate(ctx, namespace, delegate)
    }

    pub fn clear_delegate(ctx: Context<ClearDelegate>, namespace: [u8; 32]) -> Result<()> {
        instructions::clear_delegate::clear_delegate(ctx, namespace)
    }
}
