use anchor_lang::prelude::*;

use crate::{state::ResultsRevealed, ReadQuestion};

/// Tallies a stopped question.
///
/// Returns the text of the answer with strictly the most votes, or the fixed
/// undecidable message when two or more answers share the highest count.
/// Anyone may call; nothing is written.
pub fn results(ctx: Context<ReadQuestion>, id: u64) -> Result<String> {
    let result = ctx.accounts.question.results()?;

    msg!("Results for question {}: {}", id, result);
    emit!(ResultsRevealed {
        id,
        result: result.clone(),
    });

    Ok(result)
}
