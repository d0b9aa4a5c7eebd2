//! Running statistics across finished rounds.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use moviequiz_core::clock::Clock;
use tracing::info;

/// Receives the score of every finished round.
pub trait StatisticsSink: Send {
    /// Records a round with `correct` right answers out of `total`.
    fn record(&mut self, correct: u32, total: u32);
}

/// A sink that can also summarize what it has recorded.
pub trait StatisticsService: StatisticsSink {
    /// Renders the end-of-round summary for a round scored
    /// `correct`/`total`.
    fn results_message(&self, correct: u32, total: u32) -> String;
}

/// Score of one finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// Correct answers.
    pub correct: u32,
    /// Questions asked.
    pub total: u32,
    /// When the round finished.
    pub date: DateTime<Utc>,
}

impl GameRecord {
    /// A record beats another by having more correct answers.
    #[must_use]
    pub fn is_better_than(&self, other: &GameRecord) -> bool {
        self.correct > other.correct
    }
}

/// Process-lifetime statistics. Nothing is persisted.
pub struct InMemoryStatistics {
    clock: Arc<dyn Clock>,
    games_count: u32,
    best_game: Option<GameRecord>,
    total_correct: u64,
    total_questions: u64,
}

impl InMemoryStatistics {
    /// Creates empty statistics dated by `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            games_count: 0,
            best_game: None,
            total_correct: 0,
            total_questions: 0,
        }
    }

    /// Number of finished rounds.
    #[must_use]
    pub fn games_count(&self) -> u32 {
        self.games_count
    }

    /// Best round so far; ties keep the earlier one.
    #[must_use]
    pub fn best_game(&self) -> Option<&GameRecord> {
        self.best_game.as_ref()
    }

    /// Percentage of all answers that were correct, `0.0` before any round.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.total_correct as f64 / self.total_questions as f64 * 100.0
    }
}

impl std::fmt::Debug for InMemoryStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStatistics")
            .field("games_count", &self.games_count)
            .field("best_game", &self.best_game)
            .field("total_correct", &self.total_correct)
            .field("total_questions", &self.total_questions)
            .finish_non_exhaustive()
    }
}

impl StatisticsSink for InMemoryStatistics {
    fn record(&mut self, correct: u32, total: u32) {
        let game = GameRecord {
            correct,
            total,
            date: self.clock.now(),
        };
        self.games_count += 1;
        self.total_correct += u64::from(correct);
        self.total_questions += u64::from(total);
        if self
            .best_game
            .as_ref()
            .is_none_or(|best| game.is_better_than(best))
        {
            self.best_game = Some(game);
        }
        info!(correct, total, games = self.games_count, "round recorded");
    }
}

impl StatisticsService for InMemoryStatistics {
    fn results_message(&self, correct: u32, total: u32) -> String {
        let record = match &self.best_game {
            Some(best) => format!(
                "{}/{} ({})",
                best.correct,
                best.total,
                best.date.format("%d.%m.%y %H:%M")
            ),
            None => "none yet".to_owned(),
        };
        format!(
            "Your result: {correct}/{total}\n\
             Quizzes played: {}\n\
             Record: {record}\n\
             Average accuracy: {:.2}%",
            self.games_count,
            self.total_accuracy()
        )
    }
}
