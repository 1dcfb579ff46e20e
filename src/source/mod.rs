//! Passage sources.
//!
//! A `PassageSource` turns a reference into raw passage text. Output is
//! untrusted and must go through `normalize` before display. Sources never
//! retry: transport failures and non-success statuses propagate as errors.

pub mod bible_api;
pub mod nlt;

pub use bible_api::BibleApi;
pub use nlt::NltApi;

use crate::normalize::{NormalizeOptions, WhitespacePolicy};
use crate::Result;

/// Capability to fetch raw passage text for a reference
pub trait PassageSource {
    /// Fetch the passage for `reference`.
    fn fetch_passage(&self, reference: &str) -> Result<String>;
}

impl<T: PassageSource + ?Sized> PassageSource for &T {
    fn fetch_passage(&self, reference: &str) -> Result<String> {
        (**self).fetch_passage(reference)
    }
}

impl<T: PassageSource + ?Sized> PassageSource for Box<T> {
    fn fetch_passage(&self, reference: &str) -> Result<String> {
        (**self).fetch_passage(reference)
    }
}

/// Which passage source a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// NLT API: HTML passages, requires an API key.
    Nlt,
    /// bible-api.com: JSON passages, no key.
    BibleApi,
}

/// Per-source translation label, attribution and text cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProfile {
    /// Short code shown next to the reference, e.g. `NLT`.
    pub translation_code: String,
    /// Copyright/attribution line drawn in the footer.
    pub attribution: String,
    pub normalize: NormalizeOptions,
}

impl SourceKind {
    pub fn profile(self) -> SourceProfile {
        match self {
            SourceKind::Nlt => SourceProfile {
                translation_code: "NLT".into(),
                attribution: "Scripture taken from the Holy Bible, New Living Translation (NLT), \u{a9} Tyndale House Foundation.".into(),
                normalize: NormalizeOptions {
                    whitespace: WhitespacePolicy::ParagraphBreaks,
                    max_chars: None,
                },
            },
            SourceKind::BibleApi => SourceProfile {
                translation_code: "WEB".into(),
                attribution: "Scripture quotations from the World English Bible (public domain).".into(),
                normalize: NormalizeOptions {
                    whitespace: WhitespacePolicy::CollapseRuns,
                    max_chars: Some(600),
                },
            },
        }
    }

    /// Whether this source needs the passage API key.
    pub fn needs_api_key(self) -> bool {
        matches!(self, SourceKind::Nlt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_differ_by_variant() {
        let nlt = SourceKind::Nlt.profile();
        assert_eq!(nlt.translation_code, "NLT");
        assert!(nlt.attribution.contains("Tyndale"));
        assert_eq!(nlt.normalize.max_chars, None);

        let web = SourceKind::BibleApi.profile();
        assert_eq!(web.normalize.whitespace, WhitespacePolicy::CollapseRuns);
        assert_eq!(web.normalize.max_chars, Some(600));
        assert!(!SourceKind::BibleApi.needs_api_key());
    }
}
