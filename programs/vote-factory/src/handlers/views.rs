use anchor_lang::prelude::*;

use crate::{
    state::{load_initialized, Ballot, QuestionState, VoterSlot},
    ReadBallot, ReadQuestion, ReadRegistry, ReadVoter,
};

// Read-only accessors. Values reach the client through the instruction's
// return data, typically via a simulated transaction.

pub fn registry_owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.owner)
}

pub fn question_count(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.question_count)
}

pub fn question_text(ctx: Context<ReadQuestion>) -> Result<String> {
    Ok(ctx.accounts.question.question.clone())
}

pub fn current_state(ctx: Context<ReadQuestion>) -> Result<QuestionState> {
    Ok(ctx.accounts.question.state)
}

pub fn answer_count(ctx: Context<ReadQuestion>) -> Result<u16> {
    Ok(ctx.accounts.question.answer_count())
}

pub fn answer_text(ctx: Context<ReadQuestion>, answer_id: u16) -> Result<String> {
    ctx.accounts
        .question
        .answer(answer_id)
        .map(ToString::to_string)
}

pub fn voter_count(ctx: Context<ReadQuestion>) -> Result<u64> {
    Ok(ctx.accounts.question.voter_count)
}

pub fn voter_at(ctx: Context<ReadVoter>, rank: u64) -> Result<Pubkey> {
    let info = ctx.accounts.voter_slot.to_account_info();
    let slot = load_initialized::<VoterSlot>(info.owner, &info.try_borrow_data()?)?;
    ctx.accounts.question.voter_at(rank, slot.as_ref())
}

/// Answer id recorded for the voter the ballot address was derived from, or
/// `None` when that voter has not cast on this question.
pub fn voter_choice(ctx: Context<ReadBallot>) -> Result<Option<u16>> {
    let info = ctx.accounts.ballot.to_account_info();
    let ballot = load_initialized::<Ballot>(info.owner, &info.try_borrow_data()?)?;
    Ok(ballot.map(|ballot| ballot.answer_id))
}
