//! Prompt dataset loading
//!
//! The dataset is a JSON array of prompt records fetched once per session,
//! either from a local file or over HTTP. Loading fails soft: a dataset that
//! cannot be read is treated as empty so the survey stays usable.
//!
//! # Record Format
//!
//! ```json
//! {
//!   "S&T Offering": "Consulting",
//!   "Task Category": "Brainstorm",
//!   "Prompt Level": "Basic",
//!   "Recommended Level": "Manager",
//!   "Prompt": "List ten ideas for ..."
//! }
//! ```

use crate::error::{Result, SurveyError};
use crate::types::PromptLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// A single curated prompt and the audience it is meant for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    #[serde(rename = "S&T Offering")]
    pub offering: String,
    #[serde(rename = "Task Category")]
    pub task_category: String,
    #[serde(rename = "Prompt Level")]
    pub prompt_level: PromptLevel,
    #[serde(rename = "Recommended Level")]
    pub recommended_level: String,
    #[serde(rename = "Prompt")]
    pub prompt: String,
}

/// Record as it appears on the wire, before level parsing.
///
/// Every field is optional so one malformed entry does not reject the
/// whole array.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "S&T Offering")]
    offering: Option<String>,
    #[serde(rename = "Task Category")]
    task_category: Option<String>,
    #[serde(rename = "Prompt Level")]
    prompt_level: Option<String>,
    #[serde(rename = "Recommended Level")]
    recommended_level: Option<String>,
    #[serde(rename = "Prompt")]
    prompt: Option<String>,
}

impl RawRecord {
    fn into_record(self) -> std::result::Result<PromptRecord, String> {
        let missing = |name: &str| format!("missing field `{}`", name);
        let level = self.prompt_level.ok_or_else(|| missing("Prompt Level"))?;
        let prompt_level = PromptLevel::from_str(&level)
            .map_err(|_| format!("unknown prompt level `{}`", level))?;

        Ok(PromptRecord {
            offering: self.offering.ok_or_else(|| missing("S&T Offering"))?,
            task_category: self.task_category.ok_or_else(|| missing("Task Category"))?,
            prompt_level,
            recommended_level: self
                .recommended_level
                .ok_or_else(|| missing("Recommended Level"))?,
            prompt: self.prompt.ok_or_else(|| missing("Prompt"))?,
        })
    }
}

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Local JSON file
    File(PathBuf),
    /// Remote JSON resource (`http://` or `https://`)
    Url(String),
}

impl DatasetSource {
    /// Interpret a configured location as a URL or a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    fn read_to_string(&self) -> Result<String> {
        match self {
            Self::File(path) => Ok(fs::read_to_string(path)?),
            Self::Url(url) => {
                let response = reqwest::blocking::get(url)?.error_for_status()?;
                Ok(response.text()?)
            }
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// The read-only collection of prompt records for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDataset {
    records: Vec<PromptRecord>,
    /// Entries that were present in the source but could not be used
    skipped: usize,
}

impl PromptDataset {
    /// An empty dataset; every survey against it yields no matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dataset from already-parsed records.
    pub fn from_records(records: Vec<PromptRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    /// Parse a dataset from JSON text.
    ///
    /// The text must be a JSON array. Entries with missing fields or an
    /// unknown prompt level are skipped with a warning.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        let mut records = Vec::with_capacity(raw.len());
        let mut skipped = 0;

        for (index, entry) in raw.into_iter().enumerate() {
            match entry.into_record() {
                Ok(record) => records.push(record),
                Err(reason) => {
                    warn!("Skipping dataset entry {}: {}", index, reason);
                    skipped += 1;
                }
            }
        }

        Ok(Self { records, skipped })
    }

    /// Load the dataset, returning any error to the caller.
    pub fn try_load(source: &DatasetSource) -> Result<Self> {
        info!("Loading prompt dataset from {}", source);
        let text = source.read_to_string()?;
        let dataset = Self::from_json_str(&text)?;
        if dataset.records.is_empty() && dataset.skipped > 0 {
            return Err(SurveyError::dataset(format!(
                "all {} entries in {} are malformed",
                dataset.skipped, source
            )));
        }
        info!(
            "Loaded {} prompt records ({} skipped)",
            dataset.records.len(),
            dataset.skipped
        );
        Ok(dataset)
    }

    /// Load the dataset, falling back to an empty one on any failure.
    pub fn load(source: &DatasetSource) -> Self {
        match Self::try_load(source) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!("Error loading prompts from {}: {}", source, e);
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of source entries that were dropped while parsing
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Distinct offerings, sorted
    pub fn offerings(&self) -> Vec<String> {
        self.distinct(|r| &r.offering)
    }

    /// Distinct recommended levels, sorted
    pub fn levels(&self) -> Vec<String> {
        self.distinct(|r| &r.recommended_level)
    }

    /// Distinct task categories, sorted
    pub fn task_categories(&self) -> Vec<String> {
        self.distinct(|r| &r.task_category)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&PromptRecord) -> &String,
    {
        let values: BTreeSet<&String> = self
            .records
            .iter()
            .map(field)
            .filter(|v| !v.trim().is_empty())
            .collect();
        debug!("Derived {} distinct values from dataset", values.len());
        values.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"S&T Offering": "Consulting", "Task Category": "Brainstorm", "Prompt Level": "Basic",
         "Recommended Level": "Manager", "Prompt": "List ideas"},
        {"S&T Offering": "Audit", "Task Category": "Research", "Prompt Level": "Advanced",
         "Recommended Level": "Senior", "Prompt": "Summarize findings"}
    ]"#;

    #[test]
    fn test_parse_records() {
        let dataset = PromptDataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped(), 0);
        let first = &dataset.records()[0];
        assert_eq!(first.offering, "Consulting");
        assert_eq!(first.task_category, "Brainstorm");
        assert_eq!(first.prompt_level, PromptLevel::Basic);
        assert_eq!(first.recommended_level, "Manager");
        assert_eq!(first.prompt, "List ideas");
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"[
            {"S&T Offering": "A", "Task Category": "B", "Prompt Level": "Expert",
             "Recommended Level": "C", "Prompt": "D"},
            {"S&T Offering": "A", "Task Category": "B", "Prompt Level": "Basic",
             "Recommended Level": "C"},
            {"S&T Offering": "A", "Task Category": "B", "Prompt Level": "Enhanced",
             "Recommended Level": "C", "Prompt": "kept"}
        ]"#;
        let dataset = PromptDataset::from_json_str(json).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.skipped(), 2);
        assert_eq!(dataset.records()[0].prompt, "kept");
    }

    #[test]
    fn test_non_array_is_an_error() {
        assert!(PromptDataset::from_json_str(r#"{"Prompt": "x"}"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let source = DatasetSource::parse("/nonexistent/prompts.json");
        assert!(PromptDataset::try_load(&source).is_err());
        assert!(PromptDataset::load(&source).is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let source = DatasetSource::File(file.path().to_path_buf());
        let dataset = PromptDataset::load(&source);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_all_malformed_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"Prompt": "orphan"}]"#).unwrap();
        let source = DatasetSource::File(file.path().to_path_buf());
        assert!(matches!(
            PromptDataset::try_load(&source),
            Err(SurveyError::Dataset(_))
        ));
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            DatasetSource::parse("https://example.com/prompts.json"),
            DatasetSource::Url("https://example.com/prompts.json".to_string())
        );
        assert_eq!(
            DatasetSource::parse("data/prompts.json"),
            DatasetSource::File(PathBuf::from("data/prompts.json"))
        );
    }

    #[test]
    fn test_distinct_values_sorted() {
        let dataset = PromptDataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.offerings(), vec!["Audit", "Consulting"]);
        assert_eq!(dataset.levels(), vec!["Manager", "Senior"]);
        assert_eq!(dataset.task_categories(), vec!["Brainstorm", "Research"]);
    }
}
