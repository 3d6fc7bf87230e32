//! PromptPath - Main entry point
//!
//! Interactive survey by default; `recommend`, `check` and `init` run
//! without the terminal UI.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

use promptpath::app::App;
use promptpath::cli::{Cli, Commands};
use promptpath::export::{render, write_export};
use promptpath::logging::{default_log_file, init_tracing};
use promptpath::submission::{submit_favorites, FavoritesSink};
use promptpath::{
    recommend, ExportFormat, Familiarity, PromptDataset, SurveyAnswers, SurveyConfig,
    WizardSession,
};

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = load_config(&cli)?;

    match cli.command {
        None | Some(Commands::Survey { log_file: None }) => {
            let log_file = config.log_file.clone().unwrap_or_else(default_log_file);
            init_tracing(&config.log_level, Some(&log_file))?;
            run_survey(&config)
        }
        Some(Commands::Survey {
            log_file: Some(log_file),
        }) => {
            init_tracing(&config.log_level, Some(&log_file))?;
            run_survey(&config)
        }
        Some(Commands::Recommend {
            name,
            email,
            level,
            offering,
            tasks,
            familiarity,
            favorites,
            export_dir,
            format,
        }) => {
            init_tracing(&config.log_level, None)?;
            let answers = SurveyAnswers {
                name,
                email,
                level,
                offering,
                tasks,
                familiarity,
                favorites,
            };
            run_recommend(&config, answers, export_dir, format)
        }
        Some(Commands::Check) => {
            init_tracing(&config.log_level, None)?;
            run_check(&config)
        }
        Some(Commands::Init { path }) => {
            init_tracing(&config.log_level, None)?;
            run_init(&path)
        }
    }
}

/// Load the configuration file (if any) and apply CLI overrides
fn load_config(cli: &Cli) -> Result<SurveyConfig> {
    let mut config = match &cli.config {
        Some(path) => SurveyConfig::load_from_file(path)?,
        None => SurveyConfig::default(),
    };

    if let Some(dataset) = &cli.dataset {
        config.dataset = dataset.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Run the interactive survey
fn run_survey(config: &SurveyConfig) -> Result<()> {
    info!("PromptPath survey starting up");

    // Load before the wizard starts so a submit can never race the fetch
    let dataset = PromptDataset::load(&config.dataset_source());
    let options = config.survey_options(&dataset);
    let mut session = WizardSession::new(dataset, options);
    if let Some(endpoint) = config.endpoint() {
        debug!("Favorites will be posted to {}", endpoint.url());
        session = session.with_sink(Arc::new(endpoint));
    }

    let mut app = App::new(session, config.export_dir.clone(), config.export_format);

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| app.run(&mut terminal).map_err(Into::into));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Some(handle) = app.take_pending_submission() {
        wait_for_submission(handle);
    }

    result
}

/// Compute and print recommendations without the terminal UI
fn run_recommend(
    config: &SurveyConfig,
    answers: SurveyAnswers,
    export_dir: Option<PathBuf>,
    format: Option<ExportFormat>,
) -> Result<()> {
    if let Some(familiarity) = answers.familiarity.as_deref() {
        if Familiarity::from_str(familiarity).is_err() {
            warn!("Unknown familiarity {:?}; using Basic prompts", familiarity);
        }
    }

    let dataset = PromptDataset::load(&config.dataset_source());
    let recommendation = recommend(&answers, &dataset);

    print!("{}", render(ExportFormat::Text, &recommendation));
    println!();

    if export_dir.is_some() || format.is_some() {
        let dir = export_dir.unwrap_or_else(|| config.export_dir.clone());
        let format = format.unwrap_or(config.export_format);
        let path = write_export(&dir, format, &recommendation)?;
        println!("Saved {}", path.display());
    }

    let endpoint = config.endpoint();
    let sink = endpoint.as_ref().map(|e| e as &dyn FavoritesSink);
    if let Some(handle) = submit_favorites(&answers, sink) {
        wait_for_submission(handle);
    }

    Ok(())
}

/// Let an in-flight favorites post finish before the process exits.
///
/// The post is bounded by the endpoint timeout.
fn wait_for_submission(handle: JoinHandle<()>) {
    if !handle.is_finished() {
        info!("Waiting for favorites submission");
        eprintln!("Sending favorites...");
    }
    if handle.join().is_err() {
        warn!("Favorites submission thread panicked");
    }
}

/// Load the dataset strictly and print a summary
fn run_check(config: &SurveyConfig) -> Result<()> {
    let source = config.dataset_source();
    let dataset = PromptDataset::try_load(&source)
        .with_context(|| format!("Failed to load dataset from {}", source))?;

    println!("Dataset: {}", source);
    println!("Records: {} ({} skipped)", dataset.len(), dataset.skipped());
    println!("Offerings: {}", dataset.offerings().join(", "));
    println!("Levels: {}", dataset.levels().join(", "));
    println!("Task categories: {}", dataset.task_categories().join(", "));
    Ok(())
}

/// Write a default configuration file
fn run_init(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Refusing to overwrite existing file {:?}", path);
    }
    SurveyConfig::default().save_to_file(path)?;
    info!("Wrote default configuration to {:?}", path);
    println!("Wrote {}", path.display());
    Ok(())
}
