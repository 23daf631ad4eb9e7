use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use moodscope_core::{
    parse_entry_date, today_jst, DailyEntry, EmotionLabel, PersonalityResult, QuizAnswers,
};
use moodscope_dynamics::{AssessmentConfig, PersonalityAssessor};

mod cli;

use cli::{Cli, Commands, OutputFormat};

fn main() -> Result<()> {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            entries,
            config,
            pretty,
        } => {
            let config = match config {
                Some(path) => AssessmentConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => AssessmentConfig::from_env().context("loading config from environment")?,
            };
            let assessor = PersonalityAssessor::new(config);

            let entries = read_entries(&entries)?;
            let result = assessor.try_assess(&entries).with_context(|| {
                format!(
                    "personality assessment needs at least {} daily entries",
                    assessor.min_entries()
                )
            })?;

            match cli.format {
                OutputFormat::Json => print_json(&result, pretty)?,
                OutputFormat::Text => print_result(&result),
            }
        }
        Commands::Checkin { answers, date } => {
            let date = match date {
                Some(date) => {
                    parse_entry_date(&date)?;
                    date
                }
                None => today_jst(),
            };

            let raw = std::fs::read_to_string(&answers)
                .with_context(|| format!("reading {}", answers.display()))?;
            let answers: QuizAnswers =
                serde_json::from_str(&raw).context("parsing questionnaire answers")?;
            let entry = answers.into_entry(date);

            match cli.format {
                OutputFormat::Json => print_json(&entry, true)?,
                OutputFormat::Text => println!(
                    "{}  valence {:+.2}  arousal {:+.2}  {}  [{}]",
                    entry.date,
                    entry.valence,
                    entry.arousal,
                    EmotionLabel::classify(entry.valence, entry.arousal).label(),
                    entry.activities.join(", ")
                ),
            }
        }
        Commands::Label { valence, arousal } => {
            let label = EmotionLabel::classify(valence, arousal);
            match cli.format {
                OutputFormat::Json => print_json(&label, false)?,
                OutputFormat::Text => println!("{}", label.label()),
            }
        }
    }

    Ok(())
}

fn read_entries(path: &Path) -> Result<Vec<DailyEntry>> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let entries: Vec<DailyEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing daily entries from {}", path.display()))?;

    for entry in &entries {
        if let Err(e) = entry.validate() {
            tracing::warn!("Suspicious entry: {}", e);
        }
    }

    tracing::debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn print_result(result: &PersonalityResult) {
    println!("{}", result.summary());
    for detail in &result.traits {
        println!(
            "{:<18} {:>3}  {}",
            format!("{} ({})", detail.label_en, detail.label),
            detail.score,
            detail.description
        );
    }
}
