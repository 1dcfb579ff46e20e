//! Verseday
//!
//! Builds a daily "verse of the day" card: picks a reference from a fixed
//! rotation, fetches the passage, strips it to plain prose, draws it onto a
//! background image and posts the result to a chat webhook.
//!
//! # Pipeline
//!
//! - **Selector** (`selector`): day-indexed pick from a fixed list
//! - **Source** (`source`): fetches raw passage text (NLT API or bible-api.com)
//! - **Normalizer** (`normalize`): tag stripping and whitespace cleanup
//! - **Layout engine** (`rendering`): wrapping, centering, drop shadows, PNG
//! - **Publisher** (`publish`): multipart webhook upload
//!
//! # Example
//!
//! ```no_run
//! use verseday::{PipelineConfig, RunMode, Secrets, SourceKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let kind = SourceKind::Nlt;
//! let secrets = Secrets::from_env(kind, RunMode::Publish)?;
//! let today = chrono::Local::now().date_naive();
//! let report = verseday::run(PipelineConfig::for_source(kind), kind, RunMode::Publish, &secrets, today)?;
//! println!("Posted {}", report.reference);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use chrono::NaiveDate;

pub mod error;
pub use error::{Error, Result};

pub mod normalize;
pub mod pipeline;
pub mod publish;
pub mod rendering;
pub mod selector;
pub mod settings;
pub mod source;

pub use pipeline::{Pipeline, RunReport};
pub use publish::Publisher;
pub use settings::{RunMode, Secrets};
pub use source::{PassageSource, SourceKind};

use normalize::NormalizeOptions;
use rendering::font::{default_font_candidates, FontSizes};
use rendering::layout::LayoutConfig;

/// Slogan drawn above the footer.
pub const DEFAULT_SLOGAN: &str = "Faith. Focus. Finish.";

/// Configuration for one run
///
/// Holds everything that used to be a module-level constant so a run can
/// be built deterministically in tests. `Default` matches the NLT variant:
/// - background `backgrounds/smoke.png`, output `verse.png`
/// - DejaVu Sans at 54/38/22 px, falling back to the built-in face
/// - 30 second HTTP timeout
///
/// # Examples
///
/// ```
/// let cfg = verseday::PipelineConfig::default();
/// assert_eq!(cfg.translation_code, "NLT");
/// assert_eq!(cfg.references.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Ordered reference rotation (must not be empty)
    pub references: Vec<String>,
    /// Background image the card is drawn on
    pub background_path: PathBuf,
    /// Where the finished PNG is written (overwritten every run)
    pub output_path: PathBuf,
    /// Font files tried in order
    pub font_candidates: Vec<PathBuf>,
    pub font_sizes: FontSizes,
    pub layout: LayoutConfig,
    /// Short translation code shown after the reference
    pub translation_code: String,
    /// Footer attribution line
    pub attribution: String,
    pub slogan: String,
    pub normalize: NormalizeOptions,
    /// Timeout for each HTTP call in milliseconds
    pub timeout_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_source(SourceKind::Nlt)
    }
}

impl PipelineConfig {
    /// Defaults with the translation, footer and normalization of `kind`.
    pub fn for_source(kind: SourceKind) -> Self {
        let profile = kind.profile();
        Self {
            references: selector::DEFAULT_REFERENCES.iter().map(|s| s.to_string()).collect(),
            background_path: PathBuf::from("backgrounds/smoke.png"),
            output_path: PathBuf::from("verse.png"),
            font_candidates: default_font_candidates(),
            font_sizes: FontSizes::default(),
            layout: LayoutConfig::default(),
            translation_code: profile.translation_code,
            attribution: profile.attribution,
            slogan: DEFAULT_SLOGAN.to_string(),
            normalize: profile.normalize,
            timeout_ms: 30000,
        }
    }
}

/// Build the HTTP collaborators for `kind`/`mode` and run the pipeline for `date`.
///
/// Secrets are checked before anything else, so a missing secret fails the
/// run without touching the network or the output file.
pub fn run(
    config: PipelineConfig,
    kind: SourceKind,
    mode: RunMode,
    secrets: &Secrets,
    date: NaiveDate,
) -> Result<RunReport> {
    secrets.check(kind, mode)?;

    let source: Box<dyn PassageSource> = match kind {
        SourceKind::Nlt => Box::new(source::NltApi::new(secrets.api_key()?, config.timeout_ms)?),
        SourceKind::BibleApi => Box::new(source::BibleApi::new(config.timeout_ms)?),
    };
    let publisher: Box<dyn Publisher> = match mode {
        RunMode::Publish => Box::new(publish::Webhook::new(secrets.webhook_url()?, config.timeout_ms)?),
        RunMode::DryRun => Box::new(publish::DryRun),
    };

    Pipeline::new(config, source, publisher)?.run(date)
}
