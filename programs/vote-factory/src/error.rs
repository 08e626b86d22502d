use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not allowed to perform this operation")]
    Unauthorized,
    #[msg("Operation is not allowed in the current question state")]
    InvalidState,
    #[msg("At least two answers are required to start a question")]
    NotEnoughAnswers,
    #[msg("The question already holds the maximum number of answers")]
    TooManyAnswers,
    #[msg("Question text is too long")]
    QuestionTooLong,
    #[msg("Answer text is too long")]
    AnswerTooLong,
    #[msg("Answer does not exist")]
    AnswerNotFound,
    #[msg("No voter at this rank")]
    VoterNotFound,
    #[msg("Arithmetic overflow")]
    Overflow,
}
