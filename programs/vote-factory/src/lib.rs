// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;
pub mod tally;

use constants::*;
pub use error::ErrorCode;
pub use state::{Ballot, Question, QuestionState, Registry, VoterSlot};

declare_id!("DEbNVLfVptoLTQp8De3gv3kVrDBWaNTTPF5U8vZZPDew");

#[program]
pub mod vote_factory {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        handlers::initialize_registry::initialize_registry(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handlers::transfer_ownership::transfer_ownership(ctx, new_owner)
    }

    pub fn create_question(ctx: Context<CreateQuestion>, question: String) -> Result<u64> {
        handlers::create_question::create_question(ctx, question)
    }

    pub fn set_question(ctx: Context<ManageQuestion>, id: u64, question: String) -> Result<()> {
        handlers::edit_question::set_question(ctx, id, question)
    }

    pub fn add_answer(ctx: Context<ManageQuestion>, id: u64, answer: String) -> Result<u16> {
        handlers::edit_question::add_answer(ctx, id, answer)
    }

    pub fn set_answer(
        ctx: Context<ManageQuestion>,
        id: u64,
        answer_id: u16,
        answer: String,
    ) -> Result<()> {
        handlers::edit_question::set_answer(ctx, id, answer_id, answer)
    }

    pub fn start_question(ctx: Context<ManageQuestion>, id: u64) -> Result<()> {
        handlers::lifecycle::start_question(ctx, id)
    }

    pub fn stop_question(ctx: Context<ManageQuestion>, id: u64) -> Result<()> {
        handlers::lifecycle::stop_question(ctx, id)
    }

    pub fn cast(ctx: Context<Cast>, id: u64, answer_id: u16) -> Result<()> {
        handlers::cast::cast(ctx, id, answer_id)
    }

    pub fn results(ctx: Context<ReadQuestion>, id: u64) -> Result<String> {
        handlers::results::results(ctx, id)
    }

    pub fn registry_owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
        handlers::views::registry_owner(ctx)
    }

    pub fn question_count(ctx: Context<ReadRegistry>) -> Result<u64> {
        handlers::views::question_count(ctx)
    }

    // The `id` arguments of the accessors below are only read by the
    // account constraints (PDA derivation), hence the allow.

    #[allow(unused_variables)]
    pub fn question_text(ctx: Context<ReadQuestion>, id: u64) -> Result<String> {
        handlers::views::question_text(ctx)
    }

    #[allow(unused_variables)]
    pub fn current_state(ctx: Context<ReadQuestion>, id: u64) -> Result<QuestionState> {
        handlers::views::current_state(ctx)
    }

    #[allow(unused_variables)]
    pub fn answer_count(ctx: Context<ReadQuestion>, id: u64) -> Result<u16> {
        handlers::views::answer_count(ctx)
    }

    #[allow(unused_variables)]
    pub fn answer_text(ctx: Context<ReadQuestion>, id: u64, answer_id: u16) -> Result<String> {
        handlers::views::answer_text(ctx, answer_id)
    }

    #[allow(unused_variables)]
    pub fn voter_count(ctx: Context<ReadQuestion>, id: u64) -> Result<u64> {
        handlers::views::voter_count(ctx)
    }

    #[allow(unused_variables)]
    pub fn voter_at(ctx: Context<ReadVoter>, id: u64, rank: u64) -> Result<Pubkey> {
        handlers::views::voter_at(ctx, rank)
    }

    #[allow(unused_variables)]
    pub fn voter_choice(
        ctx: Context<ReadBallot>,
        id: u64,
        voter: Pubkey,
    ) -> Result<Option<u16>> {
        handlers::views::voter_choice(ctx)
    }
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// Must match `registry.owner`, checked in the handler
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
pub struct CreateQuestion<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = creator,
        space = 8 + Question::INIT_SPACE,
        seeds = [QUESTION_SEED, registry.question_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub question: Account<'info, Question>,

    pub system_program: Program<'info, System>,
}

/// Shared by every creator-only instruction. The caller is compared against
/// `question.creator` by the state methods so that a rejected call reports
/// `Unauthorized` rather than a constraint violation.
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ManageQuestion<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [QUESTION_SEED, id.to_le_bytes().as_ref()],
        bump = question.bump,
    )]
    pub question: Account<'info, Question>,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct Cast<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [QUESTION_SEED, id.to_le_bytes().as_ref()],
        bump = question.bump,
    )]
    pub question: Account<'info, Question>,

    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + Ballot::INIT_SPACE,
        seeds = [BALLOT_SEED, question.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub ballot: Account<'info, Ballot>,

    /// CHECK: next voter-roll entry, at rank `question.voter_count`. Created by
    /// the handler on a first cast only, so a repeated cast leaves it untouched.
    #[account(
        mut,
        seeds = [
            VOTER_SEED,
            question.key().as_ref(),
            question.voter_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub voter_slot: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ReadQuestion<'info> {
    #[account(
        seeds = [QUESTION_SEED, id.to_le_bytes().as_ref()],
        bump = question.bump,
    )]
    pub question: Account<'info, Question>,
}

#[derive(Accounts)]
#[instruction(id: u64, voter: Pubkey)]
pub struct ReadBallot<'info> {
    #[account(
        seeds = [QUESTION_SEED, id.to_le_bytes().as_ref()],
        bump = question.bump,
    )]
    pub question: Account<'info, Question>,

    /// CHECK: address fixed by the seeds; stays uninitialized until the voter casts
    #[account(
        seeds = [BALLOT_SEED, question.key().as_ref(), voter.as_ref()],
        bump,
    )]
    pub ballot: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(id: u64, rank: u64)]
pub struct ReadVoter<'info> {
    #[account(
        seeds = [QUESTION_SEED, id.to_le_bytes().as_ref()],
        bump = question.bump,
    )]
    pub question: Account<'info, Question>,

    /// CHECK: address fixed by the seeds; uninitialized for ranks past the roll
    #[account(
        seeds = [VOTER_SEED, question.key().as_ref(), rank.to_le_bytes().as_ref()],
        bump,
    )]
    pub voter_slot: UncheckedAccount<'info>,
}
