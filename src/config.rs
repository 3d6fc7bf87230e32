//! Survey configuration file handling.
//!
//! Configuration is an optional JSON file. Every key has a default, so an
//! empty object (or no file at all) is a valid configuration. CLI flags are
//! applied on top of whatever the file provides.
//!
//! ```json
//! {
//!   "dataset": "https://intranet.example.com/prompts.json",
//!   "submission_endpoint": "https://forms.example.com/f/abc123",
//!   "export_dir": ".",
//!   "export_format": "doc",
//!   "log_level": "info",
//!   "tasks": ["Brainstorming new ideas", "Drafting emails", "Research"]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::{DatasetSource, PromptDataset};
use crate::submission::FormEndpoint;
use crate::types::ExportFormat;
use crate::wizard::SurveyOptions;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET: &str = "prompts.json";

/// Survey configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Dataset file path or `http(s)://` URL
    pub dataset: String,
    /// Form endpoint receiving favorites; disabled when unset
    pub submission_endpoint: Option<String>,
    /// Directory export files are written into
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
    /// Default tracing filter; `RUST_LOG` takes precedence
    pub log_level: String,
    /// Log destination for the interactive survey
    pub log_file: Option<PathBuf>,
    /// Level choices; derived from the dataset when unset
    pub levels: Option<Vec<String>>,
    /// Offering choices; derived from the dataset when unset
    pub offerings: Option<Vec<String>>,
    /// Task labels; derived from the dataset when unset
    pub tasks: Option<Vec<String>>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            submission_endpoint: None,
            export_dir: PathBuf::from("."),
            export_format: ExportFormat::default(),
            log_level: "info".to_string(),
            log_file: None,
            levels: None,
            offerings: None,
            tasks: None,
        }
    }
}

impl SurveyConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dataset.trim().is_empty() {
            anyhow::bail!("Dataset location must be specified");
        }

        if let Some(endpoint) = &self.submission_endpoint {
            let endpoint = endpoint.trim();
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                anyhow::bail!("Submission endpoint must be an http(s) URL: {}", endpoint);
            }
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("Log level must not be empty");
        }

        for (name, list) in [
            ("levels", &self.levels),
            ("offerings", &self.offerings),
            ("tasks", &self.tasks),
        ] {
            if let Some(values) = list {
                if values.is_empty() {
                    anyhow::bail!("Option list `{}` must not be empty when set", name);
                }
                if values.iter().any(|v| v.trim().is_empty()) {
                    anyhow::bail!("Option list `{}` contains a blank entry", name);
                }
            }
        }

        Ok(())
    }

    pub fn dataset_source(&self) -> DatasetSource {
        DatasetSource::parse(&self.dataset)
    }

    pub fn endpoint(&self) -> Option<FormEndpoint> {
        self.submission_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(FormEndpoint::new)
    }

    /// Choice lists for the survey, falling back to dataset values.
    pub fn survey_options(&self, dataset: &PromptDataset) -> SurveyOptions {
        SurveyOptions {
            levels: self.levels.clone().unwrap_or_else(|| dataset.levels()),
            offerings: self.offerings.clone().unwrap_or_else(|| dataset.offerings()),
            tasks: self.tasks.clone().unwrap_or_else(|| dataset.task_categories()),
        }
    }
}
