//! NLT API backend (`GET /api/passages?key=..&ref=..&version=..`, HTML body)

use std::time::Duration;

use log::info;
use reqwest::blocking::Client;

use crate::source::PassageSource;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.nlt.to/api/passages";

pub struct NltApi {
    client: Client,
    base_url: String,
    api_key: String,
    version: String,
    timeout_ms: u64,
}

impl NltApi {
    pub fn new(api_key: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, timeout_ms)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::ConfigError("NLT API key is empty".into()));
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            version: "NLT".into(),
            timeout_ms,
        })
    }
}

impl PassageSource for NltApi {
    fn fetch_passage(&self, reference: &str) -> Result<String> {
        info!("Fetching {} from NLT API", reference);
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("ref", reference),
                ("version", self.version.as_str()),
            ])
            .send()
            .map_err(|e| Error::fetch(e, self.timeout_ms))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::FetchError(format!("NLT API returned {} for {}", status, reference)));
        }

        resp.text()
            .map_err(|e| Error::FetchError(format!("Failed to read response body: {}", e)))
    }
}
