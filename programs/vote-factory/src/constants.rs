// PDA seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const QUESTION_SEED: &[u8] = b"question";
pub const BALLOT_SEED: &[u8] = b"ballot";
pub const VOTER_SEED: &[u8] = b"voter";

// Account size limits, in bytes for text
pub const MAX_QUESTION_LEN: usize = 200;
pub const MAX_ANSWER_LEN: usize = 64;
pub const MAX_ANSWERS: usize = 16;

/// A question cannot be opened for voting with fewer answers than this.
pub const MIN_ANSWERS_TO_START: usize = 2;

/// Reported by `results` when two or more answers share the highest tally.
pub const UNDECIDABLE_RESULT: &str =
    "It is impossible to determine, because multiple voting leaders";
