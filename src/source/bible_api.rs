//! bible-api.com backend (`GET /{reference}?translation=..`, JSON body)

use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::source::PassageSource;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://bible-api.com/";

#[derive(Debug, Deserialize)]
struct PassageResponse {
    text: String,
}

pub struct BibleApi {
    client: Client,
    base_url: Url,
    translation: String,
    timeout_ms: u64,
}

impl BibleApi {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_ms)
    }

    pub fn with_base_url(base_url: &str, timeout_ms: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid passage source URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::ConfigError(format!("Passage source URL {} cannot be a base", base_url)));
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url,
            translation: "web".into(),
            timeout_ms,
        })
    }

    fn passage_url(&self, reference: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(reference);
        }
        url.query_pairs_mut().append_pair("translation", &self.translation);
        url
    }
}

impl PassageSource for BibleApi {
    fn fetch_passage(&self, reference: &str) -> Result<String> {
        let url = self.passage_url(reference);
        info!("Fetching {} from {}", reference, self.base_url);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::fetch(e, self.timeout_ms))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::FetchError(format!("bible-api returned {} for {}", status, reference)));
        }

        let body: PassageResponse = resp
            .json()
            .map_err(|e| Error::FetchError(format!("Malformed passage response: {}", e)))?;
        Ok(body.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_a_single_encoded_segment() {
        let api = BibleApi::with_base_url("http://localhost:9/", 1000).unwrap();
        let url = api.passage_url("Proverbs 3:5-6");
        assert_eq!(url.as_str(), "http://localhost:9/Proverbs%203:5-6?translation=web");
    }

    #[test]
    fn base_without_trailing_slash() {
        let api = BibleApi::with_base_url("http://localhost:9/v1", 1000).unwrap();
        assert_eq!(api.passage_url("John 3:16").path(), "/v1/John%203:16");
    }

    #[test]
    fn rejects_bad_base() {
        assert!(matches!(BibleApi::with_base_url("not a url", 1000), Err(Error::ConfigError(_))));
    }
}
