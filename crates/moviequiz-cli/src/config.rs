//! Configuration read from the environment.

use std::time::Duration;

use moviequiz_catalog::application::loader::most_popular_movies_url;
use moviequiz_session::domain::round::DEFAULT_QUESTIONS_AMOUNT;

use crate::error::AppError;

/// Full catalog URL; overrides the key-based default.
pub const CATALOG_URL_VAR: &str = "MOVIEQUIZ_CATALOG_URL";
/// IMDb API key used to build the default catalog URL.
pub const API_KEY_VAR: &str = "MOVIEQUIZ_API_KEY";
/// Per-request timeout in seconds.
pub const TIMEOUT_VAR: &str = "MOVIEQUIZ_TIMEOUT_SECS";
/// Questions per round.
pub const ROUNDS_VAR: &str = "MOVIEQUIZ_ROUNDS";
/// RNG seed for reproducible games.
pub const SEED_VAR: &str = "MOVIEQUIZ_SEED";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog endpoint.
    pub catalog_url: String,
    /// Transport timeout for every request.
    pub timeout: Duration,
    /// Questions per round.
    pub questions_per_round: u32,
    /// Fixed RNG seed, or `None` for OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is missing or malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if neither a catalog URL nor an API key is
    /// set, or a numeric value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let catalog_url = match (lookup(CATALOG_URL_VAR), lookup(API_KEY_VAR)) {
            (Some(url), _) if !url.trim().is_empty() => url.trim().to_owned(),
            (_, Some(key)) if !key.trim().is_empty() => most_popular_movies_url(key.trim()),
            _ => {
                return Err(AppError::Config(format!(
                    "{API_KEY_VAR} or {CATALOG_URL_VAR} must be set"
                )));
            }
        };

        let timeout_secs: u64 = parse_or(&lookup, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::Config(format!("{TIMEOUT_VAR} must be positive")));
        }

        let questions_per_round: u32 = parse_or(&lookup, ROUNDS_VAR, DEFAULT_QUESTIONS_AMOUNT)?;
        if questions_per_round == 0 {
            return Err(AppError::Config(format!("{ROUNDS_VAR} must be positive")));
        }

        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::Config(format!("{SEED_VAR} must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            catalog_url,
            timeout: Duration::from_secs(timeout_secs),
            questions_per_round,
            seed,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_api_key_builds_default_url_with_defaults() {
        let config = config_from(&[(API_KEY_VAR, "k_abc123")]).unwrap();

        assert_eq!(
            config,
            Config {
                catalog_url: "https://imdb-api.com/en/API/MostPopularMovies/k_abc123".to_owned(),
                timeout: Duration::from_secs(10),
                questions_per_round: 10,
                seed: None,
            }
        );
    }

    #[test]
    fn test_catalog_url_overrides_api_key() {
        let config = config_from(&[
            (API_KEY_VAR, "k_abc123"),
            (CATALOG_URL_VAR, "http://localhost:8080/movies"),
        ])
        .unwrap();

        assert_eq!(config.catalog_url, "http://localhost:8080/movies");
    }

    #[test]
    fn test_missing_endpoint_is_config_error() {
        assert!(matches!(config_from(&[]), Err(AppError::Config(_))));
        assert!(matches!(
            config_from(&[(API_KEY_VAR, "  ")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_numeric_overrides() {
        let config = config_from(&[
            (API_KEY_VAR, "k"),
            (TIMEOUT_VAR, "3"),
            (ROUNDS_VAR, "5"),
            (SEED_VAR, "42"),
        ])
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.questions_per_round, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        for (key, value) in [
            (TIMEOUT_VAR, "soon"),
            (TIMEOUT_VAR, "0"),
            (ROUNDS_VAR, "-1"),
            (ROUNDS_VAR, "0"),
            (SEED_VAR, "lucky"),
        ] {
            let result = config_from(&[(API_KEY_VAR, "k"), (key, value)]);
            assert!(matches!(result, Err(AppError::Config(_))), "{key}={value}");
        }
    }
}
