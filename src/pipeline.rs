//! The linear run: select → fetch → normalize → render → publish.
//!
//! Each stage completes before the next starts and the first error ends the
//! run. An image already written to disk is left in place.

use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;

use crate::normalize::normalize;
use crate::publish::{caption, Publisher};
use crate::rendering::font::FontSet;
use crate::rendering::layout::{reference_label, CardText};
use crate::rendering::{self, RenderedImage};
use crate::selector::Rotation;
use crate::source::PassageSource;
use crate::{PipelineConfig, Result};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub reference: String,
    pub verse: String,
    pub output_path: PathBuf,
    pub bytes: usize,
    pub digest: String,
    pub caption: String,
}

pub struct Pipeline<S, P> {
    config: PipelineConfig,
    rotation: Rotation,
    source: S,
    publisher: P,
}

impl<S: PassageSource, P: Publisher> Pipeline<S, P> {
    pub fn new(config: PipelineConfig, source: S, publisher: P) -> Result<Self> {
        let rotation = Rotation::new(config.references.iter().cloned())?;
        Ok(Self {
            config,
            rotation,
            source,
            publisher,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Render the card for `reference` and `verse` without fetching or publishing.
    pub fn render(&self, reference: &str, verse: &str) -> Result<RenderedImage> {
        let cfg = &self.config;
        let canvas = rendering::load_background(&cfg.background_path)?;
        let fonts = FontSet::load(&cfg.font_candidates, cfg.font_sizes);
        let label = reference_label(reference, &cfg.translation_code);
        let card = CardText {
            verse,
            reference_label: &label,
            slogan: &cfg.slogan,
            footer: &cfg.attribution,
        };
        let (_, rendered) = rendering::render_card(canvas, &card, &fonts, &cfg.layout)?;
        Ok(rendered)
    }

    /// Run every stage for `date`.
    pub fn run(&self, date: NaiveDate) -> Result<RunReport> {
        let reference = self.rotation.pick(date).to_string();
        info!("Verse for {}: {}", date, reference);

        let raw = self.source.fetch_passage(&reference)?;
        let verse = normalize(&raw, &self.config.normalize);
        info!("Normalized passage: {} chars", verse.chars().count());

        let rendered = self.render(&reference, &verse)?;
        rendering::write_output(&rendered, &self.config.output_path)?;
        info!("Wrote {}", self.config.output_path.display());

        let caption = caption(&reference, &self.config.translation_code);
        self.publisher.publish(&caption, &rendered.png_data)?;

        Ok(RunReport {
            digest: rendered.sha256_hex(),
            bytes: rendered.png_data.len(),
            reference,
            verse,
            output_path: self.config.output_path.clone(),
            caption,
        })
    }
}
