//! Remote trivia question import.
//!
//! Fetches a batch of multiple-choice questions from the Open Trivia
//! Database and wraps each as a vocabulary card.

use std::time::Duration;

use flashcard_core::Card;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://opentdb.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Number of questions requested per import.
pub const BATCH_SIZE: usize = 5;

/// Import errors.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("quiz service returned status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the trivia question endpoint.
pub struct TriviaImporter {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl TriviaImporter {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the importer at a different host.
    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Fetch `amount` multiple-choice questions as vocabulary cards.
    pub fn import_batch(&self, amount: usize) -> Result<Vec<Card>, ImportError> {
        let url = format!("{}/api.php?amount={amount}&type=multiple", self.base_url);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let decoded: TriviaResponse = serde_json::from_str(&body)?;
        debug!(results = decoded.results.len(), "decoded trivia batch");

        Ok(to_cards(decoded))
    }
}

impl Default for TriviaImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    results: Vec<TriviaItem>,
}

#[derive(Debug, Deserialize)]
struct TriviaItem {
    question: String,
    correct_answer: String,
}

/// Convert decoded items into cards, unescaping HTML entities in both
/// text fields.
fn to_cards(response: TriviaResponse) -> Vec<Card> {
    response
        .results
        .into_iter()
        .map(|item| {
            Card::vocabulary(
                html_escape::decode_html_entities(&item.question).into_owned(),
                html_escape::decode_html_entities(&item.correct_answer).into_owned(),
            )
        })
        .collect()
}
