use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::ExportFormat;

/// PromptPath - find the AI prompts that fit how you work
#[derive(Parser)]
#[command(name = "promptpath")]
#[command(about = "A survey wizard that recommends curated AI prompts")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file or http(s) URL (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,

    /// Log filter, e.g. `debug` or `promptpath=trace` (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive survey (default)
    Survey {
        /// Write logs to this file instead of the configured one
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Compute recommendations without the interactive survey
    Recommend {
        /// Respondent name
        #[arg(long, default_value = "")]
        name: String,
        /// Respondent email
        #[arg(long, default_value = "")]
        email: String,
        /// Respondent level, matched exactly against `Recommended Level`
        #[arg(short, long)]
        level: String,
        /// Organizational offering
        #[arg(short, long)]
        offering: Option<String>,
        /// Task label (repeatable)
        #[arg(short, long = "task")]
        tasks: Vec<String>,
        /// AI familiarity: High, Medium or Low
        #[arg(short, long)]
        familiarity: Option<String>,
        /// Favorite prompts, sent to the submission endpoint if configured
        #[arg(long)]
        favorites: Option<String>,
        /// Write an export file into this directory
        #[arg(long)]
        export_dir: Option<PathBuf>,
        /// Export format (text, doc, list)
        #[arg(long)]
        format: Option<ExportFormat>,
    },
    /// Load a dataset and print a summary of its contents
    Check,
    /// Write a configuration file with default values
    Init {
        /// Where to write the configuration
        #[arg(default_value = "promptpath.json")]
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
