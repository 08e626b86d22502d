use std::collections::HashMap;

use anchor_lang::prelude::{AccountSerialize, Pubkey};
use vote_factory::{
    constants::UNDECIDABLE_RESULT, state::load_initialized, Ballot, ErrorCode, Question,
    QuestionState, Registry, VoterSlot,
};

fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

fn err(code: ErrorCode) -> anchor_lang::error::Error {
    code.into()
}

fn serialized<T: AccountSerialize>(account: &T) -> Vec<u8> {
    let mut data = Vec::new();
    account.try_serialize(&mut data).unwrap();
    data
}

const OWNER: u8 = 1;
const CREATOR: u8 = 2;
const USER: u8 = 3;

/// Stand-in for the on-chain account set: the registry, the question
/// accounts addressed by id, and the raw data of the ballot and voter-roll
/// PDAs. Addresses with no entry are accounts that were never created.
struct Deployment {
    registry: Registry,
    questions: Vec<Question>,
    ballots: HashMap<(u64, Pubkey), Vec<u8>>,
    roll: HashMap<(u64, u64), Vec<u8>>,
}

impl Deployment {
    fn new() -> Self {
        Self {
            registry: Registry::new(key(OWNER), 255),
            questions: Vec::new(),
            ballots: HashMap::new(),
            roll: HashMap::new(),
        }
    }

    fn create(&mut self, creator: u8, text: &str) -> u64 {
        let id = self.registry.next_question_id().unwrap();
        self.questions
            .push(Question::new(id, key(creator), text.to_string(), 254).unwrap());
        id
    }

    fn question(&mut self, id: u64) -> &mut Question {
        &mut self.questions[id as usize]
    }

    fn open(&mut self, creator: u8, answers: &[&str]) -> u64 {
        let id = self.create(creator, "Question 0");
        for answer in answers {
            self.question(id)
                .add_answer(key(creator), answer.to_string())
                .unwrap();
        }
        self.question(id).start(key(creator)).unwrap();
        id
    }

    /// Mirrors the `cast` instruction: the ballot is created on demand and
    /// reused afterwards, and a roll entry is written for new voters only.
    fn cast(&mut self, id: u64, voter: u8, answer_id: u16) -> anchor_lang::Result<bool> {
        let voter = key(voter);
        let mut ballot = self.load_ballot(id, voter).unwrap_or_default();

        let slot = self.questions[id as usize].cast(voter, answer_id, &mut ballot)?;
        let Some(slot) = slot else {
            return Ok(false);
        };

        self.ballots.insert((id, voter), serialized(&ballot));
        self.roll.insert((id, slot.rank), serialized(&slot));
        Ok(true)
    }

    fn load_ballot(&self, id: u64, voter: Pubkey) -> Option<Ballot> {
        let data = self.ballots.get(&(id, voter)).cloned().unwrap_or_default();
        load_initialized(&vote_factory::ID, &data).unwrap()
    }

    /// Mirrors the `voter_choice` accessor.
    fn choice(&self, id: u64, voter: u8) -> Option<u16> {
        self.load_ballot(id, key(voter)).map(|ballot| ballot.answer_id)
    }

    /// Mirrors the `voter_at` accessor.
    fn voter_at(&self, id: u64, rank: u64) -> anchor_lang::Result<Pubkey> {
        let data = self.roll.get(&(id, rank)).cloned().unwrap_or_default();
        let slot = load_initialized::<VoterSlot>(&vote_factory::ID, &data)?;
        self.questions[id as usize].voter_at(rank, slot.as_ref())
    }
}

#[test]
fn vote_created() {
    let mut deployment = Deployment::new();
    let id = deployment.create(CREATOR, "Question 0");
    assert_eq!(id, 0);
    assert_eq!(deployment.question(0).question, "Question 0");
    assert_eq!(deployment.question(0).creator, key(CREATOR));
}

#[test]
fn answer_added_by_creator() {
    let mut deployment = Deployment::new();
    let id = deployment.create(CREATOR, "Question 0");
    let question = deployment.question(id);

    assert_eq!(question.add_answer(key(CREATOR), "Answer 0".into()).unwrap(), 0);
    assert_eq!(question.answer(0).unwrap(), "Answer 0");
}

#[test]
fn answer_added_by_user_is_rejected() {
    let mut deployment = Deployment::new();
    let id = deployment.create(CREATOR, "Question 0");
    let question = deployment.question(id);

    assert_eq!(
        question.add_answer(key(USER), "Answer 0".into()).unwrap_err(),
        err(ErrorCode::Unauthorized)
    );
    assert!(question.answers.is_empty());
}

#[test]
fn vote_initial_started_stopped() {
    let mut deployment = Deployment::new();
    let id = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);
    assert_eq!(deployment.question(id).state, QuestionState::Started);

    deployment.question(id).stop(key(CREATOR)).unwrap();
    assert_eq!(deployment.question(id).state, QuestionState::Stopped);
}

#[test]
fn vote_not_started_with_fewer_than_two_answers() {
    let mut deployment = Deployment::new();
    let id = deployment.create(CREATOR, "Question 0");
    let question = deployment.question(id);
    question.add_answer(key(CREATOR), "Answer 0".into()).unwrap();

    assert_eq!(
        question.start(key(CREATOR)).unwrap_err(),
        err(ErrorCode::NotEnoughAnswers)
    );
    assert_eq!(question.state, QuestionState::Initial);
}

#[test]
fn vote_not_stopped_unless_started() {
    let mut deployment = Deployment::new();
    let id = deployment.create(CREATOR, "Question 0");

    assert_eq!(
        deployment.question(id).stop(key(CREATOR)).unwrap_err(),
        err(ErrorCode::InvalidState)
    );
    assert_eq!(deployment.question(id).state, QuestionState::Initial);
}

#[test]
fn answer_not_added_once_started() {
    let mut deployment = Deployment::new();
    let id = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);

    assert_eq!(
        deployment
            .question(id)
            .add_answer(key(CREATOR), "Answer 2".into())
            .unwrap_err(),
        err(ErrorCode::InvalidState)
    );
    assert_eq!(deployment.question(id).answers.len(), 2);
}

#[test]
fn repeated_cast_keeps_first_choice() {
    let mut deployment = Deployment::new();
    let id = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);

    assert!(deployment.cast(id, USER, 1).unwrap());
    assert!(!deployment.cast(id, USER, 0).unwrap());
    assert_eq!(deployment.choice(id, USER), Some(1));
    assert_eq!(deployment.question(id).votes, vec![0, 1]);
    assert_eq!(deployment.question(id).voter_count, 1);
    assert_eq!(deployment.voter_at(id, 0).unwrap(), key(USER));
}

#[test]
fn choice_of_non_voter_is_none() {
    let mut deployment = Deployment::new();
    let id = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);
    assert_eq!(deployment.choice(id, USER), None);

    deployment.cast(id, USER, 0).unwrap();
    assert_eq!(deployment.choice(id, USER), Some(0));
    assert_eq!(deployment.choice(id, CREATOR), None);
}

#[test]
fn roll_lists_voters_in_cast_order() {
    let mut deployment = Deployment::new();
    let id = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);

    deployment.cast(id, 12, 0).unwrap();
    deployment.cast(id, 10, 1).unwrap();
    deployment.cast(id, 12, 1).unwrap();
    deployment.cast(id, CREATOR, 1).unwrap();
    deployment.question(id).stop(key(CREATOR)).unwrap();

    assert_eq!(deployment.question(id).voter_count, 3);
    assert_eq!(deployment.voter_at(id, 0).unwrap(), key(12));
    assert_eq!(deployment.voter_at(id, 1).unwrap(), key(10));
    assert_eq!(deployment.voter_at(id, 2).unwrap(), key(CREATOR));
    assert_eq!(
        deployment.voter_at(id, 3).unwrap_err(),
        err(ErrorCode::VoterNotFound)
    );
    assert_eq!(deployment.question(id).answer_count(), 2);
}

#[test]
fn plurality_wins() {
    let mut deployment = Deployment::new();
    let id = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);

    deployment.cast(id, 10, 0).unwrap();
    deployment.cast(id, 11, 0).unwrap();
    deployment.cast(id, 12, 1).unwrap();

    assert_eq!(
        deployment.question(id).results().unwrap_err(),
        err(ErrorCode::InvalidState)
    );
    deployment.question(id).stop(key(CREATOR)).unwrap();
    assert_eq!(deployment.question(id).results().unwrap(), "Answer 0");
}

#[test]
fn tied_leaders_are_undecidable() {
    let mut deployment = Deployment::new();
    let id = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);

    deployment.cast(id, 10, 0).unwrap();
    deployment.cast(id, 11, 1).unwrap();
    // a change of mind does not break the tie
    deployment.cast(id, 11, 0).unwrap();

    deployment.question(id).stop(key(CREATOR)).unwrap();
    assert_eq!(deployment.question(id).results().unwrap(), UNDECIDABLE_RESULT);
}

#[test]
fn transfer_ownership() {
    let mut deployment = Deployment::new();

    assert_eq!(
        deployment
            .registry
            .transfer_ownership(key(USER), key(USER))
            .unwrap_err(),
        err(ErrorCode::Unauthorized)
    );

    deployment
        .registry
        .transfer_ownership(key(OWNER), key(USER))
        .unwrap();
    assert_eq!(deployment.registry.owner, key(USER));
    assert!(deployment
        .registry
        .transfer_ownership(key(OWNER), key(OWNER))
        .is_err());
}

#[test]
fn registry_owner_has_no_say_over_questions() {
    let mut deployment = Deployment::new();
    let id = deployment.create(CREATOR, "Question 0");

    assert_eq!(
        deployment
            .question(id)
            .set_question(key(OWNER), "hijacked".into())
            .unwrap_err(),
        err(ErrorCode::Unauthorized)
    );
}

#[test]
fn questions_are_independent() {
    let mut deployment = Deployment::new();
    let first = deployment.open(CREATOR, &["Answer 0", "Answer 1"]);
    let second = deployment.create(USER, "Question 1");
    assert_eq!((first, second), (0, 1));

    deployment.cast(first, 10, 1).unwrap();
    deployment
        .question(second)
        .add_answer(key(USER), "Other 0".into())
        .unwrap();

    assert_eq!(deployment.choice(first, 10), Some(1));
    assert_eq!(deployment.choice(second, 10), None);
    assert_eq!(deployment.question(second).state, QuestionState::Initial);
    assert_eq!(deployment.question(first).answers.len(), 2);
    assert_eq!(deployment.question(second).answers.len(), 1);
    assert_eq!(deployment.question(second).voter_count, 0);

    // the first question's creator has no authority over the second
    assert_eq!(
        deployment.question(second).start(key(CREATOR)).unwrap_err(),
        err(ErrorCode::Unauthorized)
    );
}

#[test]
fn replay_reproduces_results() {
    let run = || {
        let mut deployment = Deployment::new();
        let id = deployment.open(CREATOR, &["Answer 0", "Answer 1", "Answer 2"]);
        for (voter, answer_id) in [(10, 2), (11, 1), (12, 2), (11, 2), (13, 0)] {
            deployment.cast(id, voter, answer_id).unwrap();
        }
        deployment.question(id).stop(key(CREATOR)).unwrap();
        (
            deployment.question(id).votes.clone(),
            (0..4)
                .map(|rank| deployment.voter_at(id, rank).unwrap())
                .collect::<Vec<_>>(),
            deployment.question(id).results().unwrap(),
        )
    };

    let (votes, voters, result) = run();
    assert_eq!(votes, vec![1, 1, 2]);
    assert_eq!(voters, vec![key(10), key(11), key(12), key(13)]);
    assert_eq!(result, "Answer 2");
    assert_eq!(run(), (votes, voters, result));
}
