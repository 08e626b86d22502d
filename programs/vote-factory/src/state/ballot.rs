use anchor_lang::prelude::*;

/// One voter's recorded choice on one question.
///
/// Derived from `[BALLOT_SEED, question, voter]`, so each identity holds at
/// most one ballot per question. The first cast fills it in and later casts
/// leave it untouched.
#[account]
#[derive(InitSpace, Default)]
pub struct Ballot {
    /// PDA bump seed
    pub bump: u8,
    /// Id of the question this ballot belongs to
    pub question_id: u64,
    /// Identity that cast the ballot; default until the first cast
    pub voter: Pubkey,
    /// Chosen answer id
    pub answer_id: u16,
    /// Position of the voter in the question's voter roll
    pub rank: u64,
}

impl Ballot {
    pub fn is_cast(&self) -> bool {
        self.voter != Pubkey::default()
    }
}
