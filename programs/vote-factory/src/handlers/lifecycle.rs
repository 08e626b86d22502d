use anchor_lang::prelude::*;

use crate::{
    state::{QuestionStarted, QuestionStopped},
    ManageQuestion,
};

/// Opens the question for voting.
///
/// Only the creator can start a question, and only once it has at least two
/// answers. Answers are frozen from this point on.
pub fn start_question(ctx: Context<ManageQuestion>, id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts.question.start(caller)?;

    msg!("Question {} started", id);
    emit!(QuestionStarted {
        id,
        answers: ctx.accounts.question.answer_count(),
    });

    Ok(())
}

/// Closes voting. The recorded ballots are final and results become readable.
pub fn stop_question(ctx: Context<ManageQuestion>, id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts.question.stop(caller)?;

    msg!("Question {} stopped", id);
    emit!(QuestionStopped {
        id,
        voters: ctx.accounts.question.voter_count,
    });

    Ok(())
}
