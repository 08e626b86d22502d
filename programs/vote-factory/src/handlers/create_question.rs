use anchor_lang::prelude::*;

use crate::{
    state::{Question, QuestionCreated},
    CreateQuestion,
};

/// Creates a new question in the `Initial` state and returns its id.
///
/// The caller becomes the question's creator. Ids are handed out by the
/// registry in sequence starting at 0; the question account is derived from
/// that id so clients can find it without scanning.
///
/// # Arguments
/// * `question` - The question text voters will respond to
pub fn create_question(ctx: Context<CreateQuestion>, question: String) -> Result<u64> {
    let creator = ctx.accounts.creator.key();
    let id = ctx.accounts.registry.next_question_id()?;

    msg!("Creating question {}", id);

    ctx.accounts
        .question
        .set_inner(Question::new(id, creator, question, ctx.bumps.question)?);

    emit!(QuestionCreated { id, creator });

    Ok(id)
}
