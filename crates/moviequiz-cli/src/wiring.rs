//! Assembly of the question pipeline.

use std::sync::{Arc, Mutex};

use moviequiz_catalog::application::loader::CatalogLoader;
use moviequiz_core::network::NetworkClient;
use moviequiz_core::rng::{DeterministicRng, SeededRng};
use moviequiz_questions::application::observer::{Mailbox, channel};
use moviequiz_questions::application::service::QuestionService;
use tracing::info;

use crate::config::Config;

/// Builds the question service on top of `network` and returns it with the
/// mailbox its notifications arrive in.
#[must_use]
pub fn build_question_service(
    config: &Config,
    network: Arc<dyn NetworkClient>,
) -> (QuestionService, Mailbox) {
    let loader = CatalogLoader::new(Arc::clone(&network), config.catalog_url.clone());

    let rng = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed RNG seed");
            SeededRng::from_seed(seed)
        }
        None => SeededRng::from_entropy(),
    };
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));

    let (notifier, mailbox) = channel();
    let service = QuestionService::new(Arc::new(loader), network, rng, notifier);
    (service, mailbox)
}
