//! Observer registration and notification delivery.
//!
//! The service never holds the observer itself. It holds a [`Notifier`], the
//! sending half of a channel; the observer's owner keeps the [`Mailbox`] and
//! drains it on its own task, so callbacks run one at a time and only where
//! the owner chose to run them.

use async_trait::async_trait;
use moviequiz_core::error::QuizError;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::question::Question;

/// A lifecycle notification produced by the question service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// The catalog loaded and questions can be requested.
    DataReady,
    /// A catalog load or question request failed.
    DataFailed(QuizError),
    /// A question is ready to be shown.
    QuestionReady(Question),
}

/// Consumer of question service notifications.
#[async_trait]
pub trait QuizObserver: Send {
    /// The catalog loaded successfully.
    async fn on_data_ready(&mut self);

    /// A load or a question request failed.
    async fn on_data_failed(&mut self, cause: QuizError);

    /// A new question replaces the current one.
    async fn on_question_ready(&mut self, question: Question);
}

/// Creates a connected notifier/mailbox pair.
#[must_use]
pub fn channel() -> (Notifier, Mailbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, Mailbox { rx })
}

/// Sending half handed to the question service.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<QuizEvent>,
}

impl Notifier {
    /// Queues `event` for the observer. Dropped silently once the mailbox is
    /// gone.
    pub fn notify(&self, event: QuizEvent) {
        if self.tx.send(event).is_err() {
            debug!("observer mailbox closed; notification discarded");
        }
    }
}

/// Receiving half owned by the observer's side.
#[derive(Debug)]
pub struct Mailbox {
    rx: mpsc::UnboundedReceiver<QuizEvent>,
}

impl Mailbox {
    /// Waits for the next notification. Returns `None` once every notifier
    /// has been dropped.
    pub async fn recv(&mut self) -> Option<QuizEvent> {
        self.rx.recv().await
    }

    /// Returns a queued notification without waiting.
    pub fn try_recv(&mut self) -> Option<QuizEvent> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next notification and hands it to `observer`.
    ///
    /// Returns `false` once the channel is closed and nothing is left.
    pub async fn dispatch_next<O>(&mut self, observer: &mut O) -> bool
    where
        O: QuizObserver + ?Sized,
    {
        let Some(event) = self.rx.recv().await else {
            return false;
        };
        match event {
            QuizEvent::DataReady => observer.on_data_ready().await,
            QuizEvent::DataFailed(cause) => observer.on_data_failed(cause).await,
            QuizEvent::QuestionReady(question) => observer.on_question_ready(question).await,
        }
        true
    }
}
