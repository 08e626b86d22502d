use anchor_lang::prelude::*;

/// Entry of a question's voter roll, derived from `[VOTER_SEED, question, rank]`.
///
/// One slot is created per first cast, so the roll never makes the question
/// account itself grow.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VoterSlot {
    /// PDA bump seed
    pub bump: u8,
    pub question_id: u64,
    /// Position in the roll, counted from the first voter
    pub rank: u64,
    pub voter: Pubkey,
}
