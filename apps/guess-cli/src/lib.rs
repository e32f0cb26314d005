//! Command-line guess checker.
//!
//! Prints the verdict as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use guess_core::{judge_guess_any, CharUnit, MatchSettings, NormalizationLevel, QuestionOverrides, Verdict};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(version, about = "Check a blind-test guess against the accepted answers")]
pub struct Cli {
    /// JSON settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Skip removal of trailing annotations
    #[arg(long, default_value_t = false)]
    pub light: bool,
    /// Unit for distances and lengths
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,
    /// Added on top of the length-derived tolerance
    #[arg(long)]
    pub extra_tolerance: Option<usize>,
    /// The typed guess
    pub guess: String,
    /// Accepted answers
    #[arg(required = true)]
    pub references: Vec<String>,
}

/// Command-line spelling of [`CharUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    /// UTF-16 code units, as in the web client
    Utf16,
    /// Unicode scalar values
    Char,
}

impl From<UnitArg> for CharUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Utf16 => CharUnit::Utf16,
            UnitArg::Char => CharUnit::Char,
        }
    }
}

impl Cli {
    /// Settings from the file (or defaults) with command-line overrides applied.
    pub fn settings(&self) -> anyhow::Result<MatchSettings> {
        let global = match &self.settings {
            Some(path) => MatchSettings::from_path(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => MatchSettings::default(),
        };

        let overrides = QuestionOverrides {
            normalization: self.light.then_some(NormalizationLevel::Light),
            unit: self.unit.map(CharUnit::from),
            extra_tolerance: self.extra_tolerance,
        };

        Ok(MatchSettings::merge(&global, Some(&overrides)))
    }
}

/// Judge the guess described by `cli`.
pub fn evaluate(cli: &Cli) -> anyhow::Result<Verdict> {
    let settings = cli.settings()?;
    tracing::debug!(
        normalization = settings.normalization.as_str(),
        unit = settings.unit.as_str(),
        extra_tolerance = settings.extra_tolerance,
        "effective settings"
    );

    judge_guess_any(&cli.guess, &cli.references, &settings).context("no reference answers given")
}

/// Parse arguments, print the verdict, and report whether it was accepted.
pub fn run() -> anyhow::Result<bool> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let verdict = evaluate(&cli)?;

    tracing::info!(
        accepted = verdict.accepted,
        distance = verdict.distance,
        tolerance = verdict.tolerance,
        "guess checked"
    );

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(verdict.accepted)
}
