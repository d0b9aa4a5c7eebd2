//! One round of questions.

use moviequiz_questions::domain::question::Question;
use tracing::debug;

use super::error::SessionError;
use super::statistics::StatisticsSink;

/// Default number of questions in a round.
pub const DEFAULT_QUESTIONS_AMOUNT: u32 = 10;

/// Result of answering the presented question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the answer matched the question.
    pub correct: bool,
    /// Whether that was the last question of the round.
    pub finished: bool,
}

/// Progress through a round.
#[derive(Debug, Clone)]
pub struct QuizRound {
    questions_amount: u32,
    answered: u32,
    correct_answers: u32,
    current: Option<Question>,
}

impl QuizRound {
    /// Starts a round of `questions_amount` questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyRound` if `questions_amount` is zero.
    pub fn new(questions_amount: u32) -> Result<Self, SessionError> {
        if questions_amount == 0 {
            return Err(SessionError::EmptyRound);
        }
        Ok(Self {
            questions_amount,
            answered: 0,
            correct_answers: 0,
            current: None,
        })
    }

    /// Shows `question`, replacing whatever was shown before.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundFinished` once every question is answered.
    pub fn present(&mut self, question: Question) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::RoundFinished);
        }
        self.current = Some(question);
        Ok(())
    }

    /// Returns the question awaiting an answer.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Scores `answer_yes` against the presented question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundFinished` after the last answer and
    /// `SessionError::NoQuestion` if nothing is presented.
    pub fn answer(&mut self, answer_yes: bool) -> Result<AnswerOutcome, SessionError> {
        if self.is_finished() {
            return Err(SessionError::RoundFinished);
        }
        let question = self.current.take().ok_or(SessionError::NoQuestion)?;

        let correct = question.is_answer_yes() == answer_yes;
        if correct {
            self.correct_answers += 1;
        }
        self.answered += 1;
        debug!(
            correct,
            answered = self.answered,
            total = self.questions_amount,
            "answer scored"
        );

        Ok(AnswerOutcome {
            correct,
            finished: self.is_finished(),
        })
    }

    /// Returns `"n/total"` for the question being shown or about to be.
    #[must_use]
    pub fn progress_label(&self) -> String {
        let position = (self.answered + 1).min(self.questions_amount);
        format!("{position}/{}", self.questions_amount)
    }

    /// Returns `true` once every question is answered.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.answered >= self.questions_amount
    }

    /// Returns the number of correct answers so far.
    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    /// Returns the round length.
    #[must_use]
    pub fn questions_amount(&self) -> u32 {
        self.questions_amount
    }

    /// Resets the round to its first question.
    pub fn restart(&mut self) {
        self.answered = 0;
        self.correct_answers = 0;
        self.current = None;
    }

    /// Hands the finished round's score to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundInProgress` if answers are still missing.
    pub fn complete<S>(&self, sink: &mut S) -> Result<(), SessionError>
    where
        S: StatisticsSink + ?Sized,
    {
        if !self.is_finished() {
            return Err(SessionError::RoundInProgress);
        }
        sink.record(self.correct_answers, self.questions_amount);
        Ok(())
    }
}
