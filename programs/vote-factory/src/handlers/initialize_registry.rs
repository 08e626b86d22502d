use anchor_lang::prelude::*;

use crate::{state::Registry, InitializeRegistry};

/// One-off job that creates the registry PDA.
///
/// The caller becomes the registry owner. Runs once per deployment: the PDA
/// cannot be initialized a second time.
pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let owner = ctx.accounts.payer.key();
    msg!("Initializing registry owned by {}", owner);

    ctx.accounts
        .registry
        .set_inner(Registry::new(owner, ctx.bumps.registry));

    Ok(())
}
