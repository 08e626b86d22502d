use anchor_lang::prelude::*;

use crate::{state::OwnershipTransferred, TransferOwnership};

/// Hands registry ownership to `new_owner`. Only the current owner may call.
pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let previous_owner = ctx.accounts.registry.owner;

    ctx.accounts
        .registry
        .transfer_ownership(ctx.accounts.owner.key(), new_owner)?;

    msg!("Registry ownership transferred to {}", new_owner);
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}
