//! Type-safe survey and dataset types for PromptPath
//!
//! Categorical values that the dataset and survey agree on are modelled as
//! enums so matching is exhaustive. Free-form values (offerings, levels,
//! task categories) stay strings because they come from the dataset.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Intrinsic sophistication tag of a prompt in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum PromptLevel {
    #[default]
    #[strum(serialize = "Basic")]
    Basic,
    #[strum(serialize = "Enhanced")]
    Enhanced,
    #[strum(serialize = "Advanced")]
    Advanced,
}

/// Respondent's self-rated familiarity with AI tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Familiarity {
    #[strum(serialize = "High")]
    High,
    #[strum(serialize = "Medium")]
    Medium,
    #[strum(serialize = "Low")]
    Low,
}

impl Familiarity {
    /// Prompt level recommended for this familiarity
    pub const fn prompt_level(self) -> PromptLevel {
        match self {
            Self::High => PromptLevel::Advanced,
            Self::Medium => PromptLevel::Enhanced,
            Self::Low => PromptLevel::Basic,
        }
    }
}

/// Export file format for the recommendation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text with answers, summary and grouped prompts
    #[default]
    Text,
    /// HTML document with word-processor markup, saved as `.doc`
    Doc,
    /// Bare newline-separated list of recommended prompts
    List,
}

impl ExportFormat {
    /// File name the export is written under
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Text | Self::List => "recommended_prompts.txt",
            Self::Doc => "recommended_prompts.doc",
        }
    }
}
