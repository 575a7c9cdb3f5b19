use std::sync::OnceLock;
use std::time::Duration;

use glossa_core::dictionary::{DefinitionSource, LookupError, SourceMetadata};
use reqwest::StatusCode;
use reqwest::blocking::Client;

/// Definitions from a free dictionary web API (`GET {api_url}/{word}`)
pub struct HttpDictionary {
    // Built on first lookup so it is never created inside an async context
    client: OnceLock<Client>,
    api_url: String,
    timeout: Duration,
}

impl HttpDictionary {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: OnceLock::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn client(&self) -> Result<&Client, LookupError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LookupError::Unavailable(format!("HTTP client: {}", e)))?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl DefinitionSource for HttpDictionary {
    fn define(&self, word: &str) -> Result<Option<String>, LookupError> {
        let url = format!("{}/{}", self.api_url, word);
        let response = self
            .client()?
            .get(&url)
            .send()
            .map_err(|e| LookupError::Unavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            return Err(LookupError::Unavailable(format!("HTTP {}", status)));
        }
        if !status.is_success() {
            return Err(LookupError::InvalidResponse(format!("HTTP {}", status)));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| LookupError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(first_definition(&json))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: self.api_url.clone(),
            language: "en".to_string(),
            entry_count: None,
        }
    }
}

/// First definition of the first meaning of the first entry
fn first_definition(json: &serde_json::Value) -> Option<String> {
    json.get(0)?["meanings"]
        .as_array()?
        .iter()
        .filter_map(|meaning| meaning["definitions"].get(0)?["definition"].as_str())
        .map(str::trim)
        .find(|d| !d.is_empty())
        .map(str::to_string)
}
