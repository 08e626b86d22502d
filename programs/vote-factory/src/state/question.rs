use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::ErrorCode,
    state::{Ballot, VoterSlot},
    tally::{tally, Outcome},
};

/// Lifecycle of a question. Only ever advances Initial -> Started -> Stopped.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionState {
    /// Creator edits the question and its answers
    Initial,
    /// Open for casting
    Started,
    /// Closed; results can be read
    Stopped,
}

/// A single poll: question text, ordered answers and recorded votes.
///
/// Every mutation goes through one of the methods below. Each method checks
/// its guards (caller, state, structural preconditions) before touching any
/// field, so a rejected call leaves the question exactly as it was.
#[account]
#[derive(InitSpace, Debug)]
pub struct Question {
    /// PDA bump seed
    pub bump: u8,
    /// Sequential id assigned by the registry
    pub id: u64,
    /// Identity that created the question; the only one allowed to edit it
    pub creator: Pubkey,
    pub state: QuestionState,
    #[max_len(MAX_QUESTION_LEN)]
    pub question: String,
    /// Answer texts; the index is the answer id
    #[max_len(MAX_ANSWERS, MAX_ANSWER_LEN)]
    pub answers: Vec<String>,
    /// Vote count per answer id, kept in step with `answers`
    #[max_len(MAX_ANSWERS)]
    pub votes: Vec<u64>,
    /// Number of distinct voters; the roll itself lives in `VoterSlot` accounts
    pub voter_count: u64,
}

impl Question {
    pub fn new(id: u64, creator: Pubkey, question: String, bump: u8) -> Result<Self> {
        require!(question.len() <= MAX_QUESTION_LEN, ErrorCode::QuestionTooLong);

        Ok(Self {
            bump,
            id,
            creator,
            state: QuestionState::Initial,
            question,
            answers: Vec::new(),
            votes: Vec::new(),
            voter_count: 0,
        })
    }

    pub fn set_question(&mut self, caller: Pubkey, question: String) -> Result<()> {
        self.only_creator(caller)?;
        self.only_in(QuestionState::Initial)?;
        require!(question.len() <= MAX_QUESTION_LEN, ErrorCode::QuestionTooLong);

        self.question = question;
        Ok(())
    }

    /// Appends an answer and returns its id.
    pub fn add_answer(&mut self, caller: Pubkey, answer: String) -> Result<u16> {
        self.only_creator(caller)?;
        self.only_in(QuestionState::Initial)?;
        require!(self.answers.len() < MAX_ANSWERS, ErrorCode::TooManyAnswers);
        require!(answer.len() <= MAX_ANSWER_LEN, ErrorCode::AnswerTooLong);

        let answer_id = self.answers.len() as u16;
        self.answers.push(answer);
        self.votes.push(0);
        Ok(answer_id)
    }

    pub fn set_answer(&mut self, caller: Pubkey, answer_id: u16, answer: String) -> Result<()> {
        self.only_creator(caller)?;
        self.only_in(QuestionState::Initial)?;
        let index = self.answer_index(answer_id)?;
        require!(answer.len() <= MAX_ANSWER_LEN, ErrorCode::AnswerTooLong);

        self.answers[index] = answer;
        Ok(())
    }

    pub fn start(&mut self, caller: Pubkey) -> Result<()> {
        self.only_creator(caller)?;
        self.only_in(QuestionState::Initial)?;
        require!(self.answers.len() >= MIN_ANSWERS_TO_START, ErrorCode::NotEnoughAnswers);

        self.state = QuestionState::Started;
        Ok(())
    }

    pub fn stop(&mut self, caller: Pubkey) -> Result<()> {
        self.only_creator(caller)?;
        self.only_in(QuestionState::Started)?;

        self.state = QuestionState::Stopped;
        Ok(())
    }

    /// Records `voter`'s choice into `ballot` unless the voter already has one.
    ///
    /// Open to any identity, the creator included. A repeated cast is accepted
    /// but keeps the first choice and returns `None`. A new ballot returns the
    /// voter-roll entry to store at rank `voter_count - 1`; its bump is left
    /// for the caller to fill in.
    pub fn cast(
        &mut self,
        voter: Pubkey,
        answer_id: u16,
        ballot: &mut Ballot,
    ) -> Result<Option<VoterSlot>> {
        self.only_in(QuestionState::Started)?;
        let index = self.answer_index(answer_id)?;

        if ballot.is_cast() {
            return Ok(None);
        }

        let votes = self.votes[index].checked_add(1).ok_or(ErrorCode::Overflow)?;
        let rank = self.voter_count;
        let voter_count = rank.checked_add(1).ok_or(ErrorCode::Overflow)?;

        self.votes[index] = votes;
        self.voter_count = voter_count;
        ballot.question_id = self.id;
        ballot.voter = voter;
        ballot.answer_id = answer_id;
        ballot.rank = rank;

        Ok(Some(VoterSlot {
            bump: 0,
            question_id: self.id,
            rank,
            voter,
        }))
    }

    /// Winning answer text, or [`UNDECIDABLE_RESULT`] on a tie for first place.
    pub fn results(&self) -> Result<String> {
        self.only_in(QuestionState::Stopped)?;

        Ok(match tally(&self.votes) {
            Outcome::Winner(index) => self.answers[index].clone(),
            Outcome::Undecidable => UNDECIDABLE_RESULT.to_string(),
        })
    }

    pub fn answer(&self, answer_id: u16) -> Result<&str> {
        let index = self.answer_index(answer_id)?;
        Ok(&self.answers[index])
    }

    pub fn answer_count(&self) -> u16 {
        self.answers.len() as u16
    }

    /// Voter at `rank`, read from the roll entry stored for that rank.
    pub fn voter_at(&self, rank: u64, slot: Option<&VoterSlot>) -> Result<Pubkey> {
        require!(rank < self.voter_count, ErrorCode::VoterNotFound);

        slot.filter(|slot| slot.question_id == self.id && slot.rank == rank)
            .map(|slot| slot.voter)
            .ok_or_else(|| error!(ErrorCode::VoterNotFound))
    }

    fn only_creator(&self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.creator, ErrorCode::Unauthorized);
        Ok(())
    }

    fn only_in(&self, state: QuestionState) -> Result<()> {
        require!(self.state == state, ErrorCode::InvalidState);
        Ok(())
    }

    fn answer_index(&self, answer_id: u16) -> Result<usize> {
        let index = usize::from(answer_id);
        require!(index < self.answers.len(), ErrorCode::AnswerNotFound);
        Ok(index)
    }
}
