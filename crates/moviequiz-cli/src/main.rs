//! MovieQuiz terminal entry point.

use std::error::Error;
use std::sync::Arc;

use moviequiz_cli::config::Config;
use moviequiz_cli::game::TerminalGame;
use moviequiz_cli::wiring::build_question_service;
use moviequiz_core::clock::SystemClock;
use moviequiz_core::network::NetworkClient;
use moviequiz_session::domain::round::QuizRound;
use moviequiz_session::domain::statistics::InMemoryStatistics;
use moviequiz_transport::ReqwestNetworkClient;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        catalog_url = %config.catalog_url,
        timeout_secs = config.timeout.as_secs(),
        questions = config.questions_per_round,
        "starting MovieQuiz"
    );

    let network: Arc<dyn NetworkClient> = Arc::new(ReqwestNetworkClient::new(config.timeout)?);
    let (service, mut mailbox) = build_question_service(&config, network);

    let round = QuizRound::new(config.questions_per_round)?;
    let statistics = InMemoryStatistics::new(Arc::new(SystemClock));

    let mut game = TerminalGame::new(
        service,
        round,
        Box::new(statistics),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    game.start().await?;
    game.run(&mut mailbox).await?;

    tracing::info!("MovieQuiz finished");
    Ok(())
}
