//! Recommendation engine: turns survey answers into grouped prompts.
//!
//! The engine is pure. It takes the respondent's answers and the loaded
//! dataset and produces a [`Recommendation`]; rendering and export live in
//! `report` and `export`.
//!
//! # Modules
//!
//! - `matching` — task normalization, familiarity mapping, record filter
//! - `grouping` — category grouping with prompt deduplication

pub mod grouping;
pub mod matching;

pub use grouping::ResultGrouping;
pub use matching::{normalize_task, prompt_level_for, MatchCriteria};

use crate::dataset::PromptDataset;
use crate::types::PromptLevel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Answers collected by the survey, exactly as the respondent gave them.
///
/// Offering is single-select; an unanswered offering is `None` and matches
/// no record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub name: String,
    pub email: String,
    pub level: String,
    pub offering: Option<String>,
    pub tasks: Vec<String>,
    pub familiarity: Option<String>,
    pub favorites: Option<String>,
}

impl SurveyAnswers {
    /// Offering as a set of zero or one values
    pub fn offerings(&self) -> impl Iterator<Item = &str> {
        self.offering.as_deref().into_iter()
    }

    /// Favorites text, if the respondent wrote anything
    pub fn favorites_text(&self) -> Option<&str> {
        self.favorites
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Filter criteria derived from these answers
    pub fn criteria(&self) -> MatchCriteria {
        MatchCriteria::new(
            self.offerings(),
            self.tasks.iter().map(String::as_str),
            self.familiarity.as_deref(),
            &self.level,
        )
    }
}

/// Result of one recommendation computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub answers: SurveyAnswers,
    pub prompt_level: PromptLevel,
    pub grouping: ResultGrouping,
}

impl Recommendation {
    pub fn has_matches(&self) -> bool {
        !self.grouping.is_empty()
    }
}

/// Filter the dataset against the answers and group the matches.
///
/// An empty result is a normal outcome, not an error.
pub fn recommend(answers: &SurveyAnswers, dataset: &PromptDataset) -> Recommendation {
    let criteria = answers.criteria();
    debug!(?criteria, "Filtering {} prompt records", dataset.len());

    let grouping: ResultGrouping = dataset
        .records()
        .iter()
        .filter(|record| criteria.matches(record))
        .collect();

    info!(
        "Recommended {} prompts across {} categories",
        grouping.prompt_count(),
        grouping.category_count()
    );

    Recommendation {
        answers: answers.clone(),
        prompt_level: criteria.prompt_level,
        grouping,
    }
}
