//! Blocking client for the API Ninjas animals endpoint.
//!
//! One GET per lookup: the animal name is lower-cased into the `name` query
//! parameter and the key travels in the `X-Api-Key` header. No retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::dataset::AnimalRecord;
use crate::error::{MenagerieError, Result};

/// Production endpoint for animal lookups.
pub const DEFAULT_API_URL: &str = "https://api.api-ninjas.com/v1/animals";

/// Fetches animal records by name.
pub struct AnimalsClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl AnimalsClient {
    /// Create a client against the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiKeyMissing` when the key is empty; a request with a blank
    /// key would only produce a confusing 401 later.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_api_url(api_key, DEFAULT_API_URL)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MenagerieError::ApiKeyMissing);
        }

        Ok(Self {
            client: Client::builder()
                .user_agent("menagerie")
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_url: api_url.into(),
            api_key,
        })
    }

    /// Get the configured endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the records matching an animal name.
    ///
    /// # Errors
    ///
    /// Returns `ApiStatusError` for non-2xx responses and `ApiRequestError`
    /// for network failures or bodies that are not a JSON record array.
    pub fn fetch(&self, name: &str) -> Result<Vec<AnimalRecord>> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("name", name.to_lowercase())])
            .header("X-Api-Key", &self.api_key)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenagerieError::ApiStatusError {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let records: Vec<AnimalRecord> = response.json()?;
        tracing::debug!(name, count = records.len(), "fetched records");
        Ok(records)
    }
}
