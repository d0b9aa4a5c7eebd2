//! Session error types.

use thiserror::Error;

/// Misuse of a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A round must ask at least one question.
    #[error("a round needs at least one question")]
    EmptyRound,

    /// An answer was given while no question was on screen.
    #[error("no question is currently presented")]
    NoQuestion,

    /// The round already received its last answer.
    #[error("the round is already finished")]
    RoundFinished,

    /// Statistics were requested before the last answer.
    #[error("the round is not finished yet")]
    RoundInProgress,
}
