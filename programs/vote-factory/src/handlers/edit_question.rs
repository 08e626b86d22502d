use anchor_lang::prelude::*;

use crate::ManageQuestion;

// Question text and answers can only be edited by the creator while the
// question is still in the `Initial` state.

pub fn set_question(ctx: Context<ManageQuestion>, id: u64, question: String) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts.question.set_question(caller, question)?;

    msg!("Question {} text updated", id);
    Ok(())
}

/// Appends an answer. The new answer id is the previous number of answers.
pub fn add_answer(ctx: Context<ManageQuestion>, id: u64, answer: String) -> Result<u16> {
    let caller = ctx.accounts.caller.key();
    let answer_id = ctx.accounts.question.add_answer(caller, answer)?;

    msg!("Question {} answer {} added", id, answer_id);
    Ok(answer_id)
}

pub fn set_answer(
    ctx: Context<ManageQuestion>,
    id: u64,
    answer_id: u16,
    answer: String,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts.question.set_answer(caller, answer_id, answer)?;

    msg!("Question {} answer {} updated", id, answer_id);
    Ok(())
}
