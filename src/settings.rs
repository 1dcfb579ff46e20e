//! Secrets and run mode.
//!
//! Secrets come from the process environment through a lookup function so
//! tests can supply them without touching the real environment. They are
//! validated eagerly, before any file or network I/O.

use crate::source::SourceKind;
use crate::{Error, Result};

pub const API_KEY_VAR: &str = "NLT_API_KEY";
pub const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";

/// Whether the card is posted or only rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Publish,
    /// Render and write the image, skip the webhook.
    DryRun,
}

/// Secret values needed by a run
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    pub api_key: Option<String>,
    pub webhook_url: Option<String>,
}

// Never print secret values.
impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl Secrets {
    /// Read secrets from the process environment.
    pub fn from_env(source: SourceKind, mode: RunMode) -> Result<Self> {
        Self::from_lookup(source, mode, |key| std::env::var(key).ok())
    }

    /// Read secrets through `lookup` and check that everything `source` and
    /// `mode` need is present. Blank values count as missing.
    pub fn from_lookup<F>(source: SourceKind, mode: RunMode, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let secrets = Self {
            api_key: read(API_KEY_VAR),
            webhook_url: read(WEBHOOK_URL_VAR),
        };
        secrets.check(source, mode)?;
        Ok(secrets)
    }

    /// Fail with a configuration error naming the first missing secret.
    pub fn check(&self, source: SourceKind, mode: RunMode) -> Result<()> {
        if source.needs_api_key() {
            self.api_key()?;
        }
        if mode == RunMode::Publish {
            self.webhook_url()?;
        }
        Ok(())
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::ConfigError(format!("Missing {}", API_KEY_VAR)))
    }

    pub fn webhook_url(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| Error::ConfigError(format!("Missing {}", WEBHOOK_URL_VAR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn nlt_requires_both_secrets() {
        let err = Secrets::from_lookup(SourceKind::Nlt, RunMode::Publish, env(&[(WEBHOOK_URL_VAR, "http://hook")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: Missing NLT_API_KEY");

        let err = Secrets::from_lookup(SourceKind::Nlt, RunMode::Publish, env(&[(API_KEY_VAR, "k")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: Missing DISCORD_WEBHOOK_URL");

        let ok = Secrets::from_lookup(
            SourceKind::Nlt,
            RunMode::Publish,
            env(&[(API_KEY_VAR, " k \n"), (WEBHOOK_URL_VAR, "http://hook")]),
        )
        .unwrap();
        assert_eq!(ok.api_key().unwrap(), "k");
    }

    #[test]
    fn blank_values_are_missing() {
        let r = Secrets::from_lookup(SourceKind::Nlt, RunMode::DryRun, env(&[(API_KEY_VAR, "   ")]));
        assert!(matches!(r, Err(Error::ConfigError(_))));
    }

    #[test]
    fn dry_run_and_keyless_source_need_nothing() {
        assert!(Secrets::from_lookup(SourceKind::BibleApi, RunMode::DryRun, env(&[])).is_ok());
    }

    #[test]
    fn debug_hides_values() {
        let s = Secrets { api_key: Some("hunter2".into()), webhook_url: None };
        let dbg = format!("{:?}", s);
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<set>"));
    }
}
