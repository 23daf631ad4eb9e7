use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "moodscope")]
#[command(about = "Moodscope: daily mood entries to a Big Five estimate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate Big Five traits from a JSON array of daily entries
    Assess {
        /// Path to the entries file
        entries: PathBuf,

        /// Assessment configuration file (json, toml or yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Turn questionnaire answers (keyed by question id) into a daily entry
    Checkin {
        /// Path to the answers file
        answers: PathBuf,

        /// Entry date, YYYY-MM-DD (defaults to today in Asia/Tokyo)
        #[arg(long)]
        date: Option<String>,
    },

    /// Name the circumplex region of a valence/arousal point
    Label {
        /// Valence in [-1, 1]
        #[arg(allow_hyphen_values = true)]
        valence: f64,

        /// Arousal in [-1, 1]
        #[arg(allow_hyphen_values = true)]
        arousal: f64,
    },
}
