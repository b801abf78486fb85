use std::fmt;

use synonym_api::{add_synonyms, search_synonyms};

mod synonym_api;

#[derive(Debug)]
pub enum SynonymError {
    Fetch(reqwest::Error),
    Deserialize(reqwest::Error),
    Status { status: u16, message: Option<String> },
}

impl fmt::Display for SynonymError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynonymError::Fetch(error) => write!(f, "request failed: {error}"),
            SynonymError::Deserialize(error) => write!(f, "invalid response body: {error}"),
            SynonymError::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP {status}: {message}"),
            SynonymError::Status {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
        }
    }
}

impl std::error::Error for SynonymError {}

/// Client for the synonym backend. The base URL is injected here once;
/// nothing in this crate reads the environment.
pub struct SynonymClient {
    client: reqwest::Client,
    base_url: String,
}

impl SynonymClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn add_synonyms(&self, word: &str, synonyms: &[String]) -> Result<(), SynonymError> {
        add_synonyms(&self.client, &self.base_url, word, synonyms).await
    }

    pub async fn search_synonyms(&self, word: &str) -> Result<Vec<String>, SynonymError> {
        search_synonyms(&self.client, &self.base_url, word).await
    }
}
