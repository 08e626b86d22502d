use anchor_lang::prelude::*;

#[event]
pub struct QuestionCreated {
    pub id: u64,
    pub creator: Pubkey,
}

#[event]
pub struct QuestionStarted {
    pub id: u64,
    pub answers: u16,
}

#[event]
pub struct QuestionStopped {
    pub id: u64,
    pub voters: u64,
}

#[event]
pub struct VoteCast {
    pub id: u64,
    pub voter: Pubkey,
    pub answer_id: u16,
}

#[event]
pub struct ResultsRevealed {
    pub id: u64,
    /// Winning answer text, or the undecidable-tie message
    pub result: String,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
