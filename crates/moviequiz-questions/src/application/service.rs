//! The question service.
//!
//! `load` and `request_next_question` return immediately; the work runs on
//! spawned tokio tasks and every outcome reaches the observer as exactly one
//! [`QuizEvent`].

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use moviequiz_catalog::application::loader::CatalogLoading;
use moviequiz_catalog::domain::items::Catalog;
use moviequiz_core::error::QuizError;
use moviequiz_core::network::NetworkClient;
use moviequiz_core::rng::DeterministicRng;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::application::observer::{Notifier, QuizEvent};
use crate::domain::question::{Question, THRESHOLD_MAX, THRESHOLD_MIN};

/// Generates questions from a lazily loaded catalog.
///
/// Cloning is cheap; clones share the catalog and the observer.
#[derive(Clone)]
pub struct QuestionService {
    shared: Arc<Shared>,
}

struct Shared {
    loader: Arc<dyn CatalogLoading>,
    network: Arc<dyn NetworkClient>,
    rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// `None` until the first successful load. Replaced wholesale.
    catalog: RwLock<Option<Arc<Catalog>>>,
    notifier: Notifier,
}

impl QuestionService {
    /// Creates a service that reports to the mailbox paired with `notifier`.
    #[must_use]
    pub fn new(
        loader: Arc<dyn CatalogLoading>,
        network: Arc<dyn NetworkClient>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        notifier: Notifier,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                loader,
                network,
                rng,
                catalog: RwLock::new(None),
                notifier,
            }),
        }
    }

    /// Returns `true` once a catalog has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.shared.current_catalog().is_some()
    }

    /// Loads the catalog in the background.
    ///
    /// Sends `DataReady` on success and `DataFailed` otherwise. A failed
    /// reload keeps the previously loaded catalog.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn load(&self) {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move { shared.load().await });
    }

    /// Builds one question in the background.
    ///
    /// Sends exactly one `QuestionReady` or `DataFailed`. Does nothing if no
    /// catalog has been loaded yet.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn request_next_question(&self) {
        let shared = Arc::clone(&self.shared);
        let request_id = Uuid::new_v4();
        tokio::spawn(async move { shared.next_question(request_id).await });
    }
}

impl std::fmt::Debug for QuestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionService")
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

impl Shared {
    fn current_catalog(&self) -> Option<Arc<Catalog>> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[instrument(skip(self))]
    async fn load(&self) {
        match self.loader.load().await {
            Ok(catalog) => {
                info!(items = catalog.len(), "catalog ready");
                *self.catalog.write().unwrap_or_else(PoisonError::into_inner) =
                    Some(Arc::new(catalog));
                self.notifier.notify(QuizEvent::DataReady);
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                self.notifier.notify(QuizEvent::DataFailed(e.into()));
            }
        }
    }

    #[instrument(skip_all, fields(request_id = %request_id))]
    async fn next_question(&self, request_id: Uuid) {
        let Some(catalog) = self.current_catalog() else {
            warn!("question requested before the catalog loaded; ignoring");
            return;
        };

        // One lock for both draws: a request's index and threshold are
        // consecutive values.
        let (item, threshold) = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            let item = catalog.pick(&mut *rng).clone();
            let threshold = rng.next_u32_range(THRESHOLD_MIN, THRESHOLD_MAX);
            (item, threshold)
        };
        debug!(item_id = item.id(), threshold, "item drawn");

        let image_url = item.resized_image_url();
        let image_data = match self.network.fetch(&image_url).await {
            Ok(bytes) => bytes,
            Err(cause) => {
                warn!(error = %cause, url = %image_url, "image fetch failed");
                self.notifier.notify(QuizEvent::DataFailed(QuizError::ImageFetch {
                    url: image_url,
                    cause,
                }));
                return;
            }
        };

        let question = Question::about(&item, threshold, image_data);
        debug!(answer = question.is_answer_yes(), "question ready");
        self.notifier.notify(QuizEvent::QuestionReady(question));
    }
}
