use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use verseday::{PipelineConfig, RunMode, Secrets, SourceKind};

#[derive(Parser, Debug)]
#[command(name = "verseday", version, about = "Render and post the verse of the day")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Source::Nlt, help = "Passage source")]
    source: Source,
    #[arg(long, help = "Background image (default: backgrounds/smoke.png)")]
    background: Option<PathBuf>,
    #[arg(long, help = "Output PNG path (default: verse.png)")]
    output: Option<PathBuf>,
    #[arg(long = "font", help = "Font file to try; repeatable, replaces the built-in search list")]
    fonts: Vec<PathBuf>,
    #[arg(long, help = "Pick the verse for this day (YYYY-MM-DD) instead of today")]
    date: Option<NaiveDate>,
    #[arg(long, default_value_t = false, help = "Render and write the image but do not post it")]
    dry_run: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    Nlt,
    BibleApi,
}

impl From<Source> for SourceKind {
    fn from(s: Source) -> Self {
        match s {
            Source::Nlt => SourceKind::Nlt,
            Source::BibleApi => SourceKind::BibleApi,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let kind = SourceKind::from(cli.source);
    let mode = if cli.dry_run { RunMode::DryRun } else { RunMode::Publish };

    let secrets = Secrets::from_env(kind, mode).context("configuration check failed")?;

    let mut config = PipelineConfig::for_source(kind);
    if let Some(bg) = cli.background {
        config.background_path = bg;
    }
    if let Some(out) = cli.output {
        config.output_path = out;
    }
    if !cli.fonts.is_empty() {
        config.font_candidates = cli.fonts;
    }

    let date = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let report = verseday::run(config, kind, mode, &secrets, date)
        .with_context(|| format!("verse of the day run for {} failed", date))?;

    println!(
        "{} -> {} ({} bytes, sha256 {})",
        report.reference,
        report.output_path.display(),
        report.bytes,
        report.digest
    );
    Ok(())
}
