//! Terminal observer that plays the quiz.

use async_trait::async_trait;
use moviequiz_core::error::QuizError;
use moviequiz_questions::application::observer::{Mailbox, QuizObserver};
use moviequiz_questions::application::service::QuestionService;
use moviequiz_questions::domain::question::Question;
use moviequiz_session::domain::round::QuizRound;
use moviequiz_session::domain::statistics::StatisticsService;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::error::AppError;

/// Plays rounds over a line-based terminal.
///
/// Every callback runs on the task that drives the mailbox, so prompts and
/// answers never interleave.
pub struct TerminalGame<R, W> {
    service: QuestionService,
    round: QuizRound,
    statistics: Box<dyn StatisticsService>,
    input: R,
    output: W,
    over: bool,
    error: Option<AppError>,
}

impl<R, W> TerminalGame<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a game reading answers from `input` and writing to `output`.
    #[must_use]
    pub fn new(
        service: QuestionService,
        round: QuizRound,
        statistics: Box<dyn StatisticsService>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            service,
            round,
            statistics,
            input,
            output,
            over: false,
            error: None,
        }
    }

    /// Announces the game and starts loading the catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the banner cannot be written.
    pub async fn start(&mut self) -> Result<(), AppError> {
        self.say("MovieQuiz: loading movies...").await?;
        self.service.load();
        Ok(())
    }

    /// Dispatches notifications until the player quits or the mailbox closes.
    ///
    /// # Errors
    ///
    /// Returns the first terminal or session error hit along the way.
    pub async fn run(&mut self, mailbox: &mut Mailbox) -> Result<(), AppError> {
        while !self.over && mailbox.dispatch_next(&mut *self).await {}
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    async fn say(&mut self, text: &str) -> Result<(), AppError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Asks a yes/no question until it gets one. `None` means end of input.
    async fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>, AppError> {
        loop {
            self.say(&format!("{prompt} [y/n]")).await?;
            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Ok(None);
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                other => debug!(input = other, "unrecognized answer"),
            }
        }
    }

    async fn handle_failure(&mut self, cause: &QuizError) -> Result<(), AppError> {
        self.say(&format!("Error: {cause}")).await?;
        match self.ask_yes_no("Failed to load data. Try again?").await? {
            Some(true) if self.service.is_loaded() => self.service.request_next_question(),
            Some(true) => self.service.load(),
            _ => self.over = true,
        }
        Ok(())
    }

    async fn handle_question(&mut self, question: Question) -> Result<(), AppError> {
        let prompt = format!(
            "Question {}: {} (poster: {} bytes)",
            self.round.progress_label(),
            question.prompt_text(),
            question.image_data().len()
        );
        self.round.present(question)?;

        let Some(answer) = self.ask_yes_no(&prompt).await? else {
            self.over = true;
            return Ok(());
        };
        let outcome = self.round.answer(answer)?;
        self.say(if outcome.correct { "Correct!" } else { "Wrong!" })
            .await?;

        if !outcome.finished {
            self.service.request_next_question();
            return Ok(());
        }

        self.round.complete(self.statistics.as_mut())?;
        let summary = self
            .statistics
            .results_message(self.round.correct_answers(), self.round.questions_amount());
        self.say("This round is over!").await?;
        self.say(&summary).await?;

        if self.ask_yes_no("Play again?").await? == Some(true) {
            self.round.restart();
            self.service.request_next_question();
        } else {
            self.over = true;
        }
        Ok(())
    }

    fn record(&mut self, result: Result<(), AppError>) {
        if let Err(err) = result {
            warn!(error = %err, "stopping game");
            self.error = Some(err);
            self.over = true;
        }
    }
}

#[async_trait]
impl<R, W> QuizObserver for TerminalGame<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn on_data_ready(&mut self) {
        let result = self.say("Movies loaded.").await;
        self.service.request_next_question();
        self.record(result);
    }

    async fn on_data_failed(&mut self, cause: QuizError) {
        let result = self.handle_failure(&cause).await;
        self.record(result);
    }

    async fn on_question_ready(&mut self, question: Question) {
        if self.over || self.round.is_finished() {
            debug!("question arrived after the round ended; dropping it");
            return;
        }
        let result = self.handle_question(question).await;
        self.record(result);
    }
}
