//! Publishing the finished card to a chat webhook.

use std::time::Duration;

use log::info;
use reqwest::blocking::{multipart, Client};
use serde::Serialize;
use url::Url;

use crate::rendering::layout::reference_label;
use crate::{Error, Result};

/// File name the image is uploaded under.
pub const IMAGE_FILE_NAME: &str = "verse.png";

/// Caption posted alongside the card.
pub fn caption(reference: &str, translation_code: &str) -> String {
    format!(
        "\u{1F4D6} **Scripture of the Day** \u{2014} **{}**\nWhat word/phrase stands out today? Drop your takeaway or an **Amen**. \u{1F64F}",
        reference_label(reference, translation_code)
    )
}

/// Capability to deliver a caption plus PNG image
pub trait Publisher {
    fn publish(&self, caption: &str, png: &[u8]) -> Result<()>;
}

impl<T: Publisher + ?Sized> Publisher for &T {
    fn publish(&self, caption: &str, png: &[u8]) -> Result<()> {
        (**self).publish(caption, png)
    }
}

impl<T: Publisher + ?Sized> Publisher for Box<T> {
    fn publish(&self, caption: &str, png: &[u8]) -> Result<()> {
        (**self).publish(caption, png)
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Discord-style webhook: multipart POST with `payload_json` and `file` fields
pub struct Webhook {
    client: Client,
    url: Url,
    timeout_ms: u64,
}

impl Webhook {
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::ConfigError("webhook URL is empty".into()));
        }
        let url = Url::parse(url.trim())
            .map_err(|e| Error::ConfigError(format!("Invalid webhook URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::ConfigError(format!("Webhook URL must be http(s), got {}", url.scheme())));
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url, timeout_ms })
    }
}

impl Publisher for Webhook {
    fn publish(&self, caption: &str, png: &[u8]) -> Result<()> {
        let payload = serde_json::to_string(&WebhookPayload { content: caption })
            .map_err(|e| Error::PublishError(format!("Failed to encode payload: {}", e)))?;
        let file = multipart::Part::bytes(png.to_vec())
            .file_name(IMAGE_FILE_NAME)
            .mime_str("image/png")
            .map_err(|e| Error::PublishError(e.to_string()))?;
        let form = multipart::Form::new().text("payload_json", payload).part("file", file);

        let resp = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .map_err(|e| Error::publish(e, self.timeout_ms))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::PublishError(format!("webhook returned {}", status)));
        }
        info!("Posted {} ({} bytes) to webhook", IMAGE_FILE_NAME, png.len());
        Ok(())
    }
}

/// Logs what would be posted and succeeds without any network call
#[derive(Debug, Default)]
pub struct DryRun;

impl Publisher for DryRun {
    fn publish(&self, caption: &str, png: &[u8]) -> Result<()> {
        info!("Dry run: skipping post of {} bytes with caption {:?}", png.len(), caption);
        Ok(())
    }
}
