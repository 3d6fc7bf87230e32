//! Answer normalization and the four-predicate record filter.
//!
//! # Predicates
//!
//! | Respondent answer | Record field        | Rule                          |
//! |-------------------|---------------------|-------------------------------|
//! | offering          | `S&T Offering`      | member of selected offerings  |
//! | tasks             | `Task Category`     | member of normalized tasks    |
//! | familiarity       | `Prompt Level`      | equals mapped level           |
//! | level             | `Recommended Level` | exact string equality         |
//!
//! A record is recommended only when all four hold. The predicates are
//! independent of each other.

use crate::dataset::PromptRecord;
use crate::types::{Familiarity, PromptLevel};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Canonical category for brainstorming-style task labels
pub const BRAINSTORM_CATEGORY: &str = "Brainstorm";

/// Canonical category for drafting-style task labels
pub const DRAFTING_CATEGORY: &str = "Drafting & Writing";

/// Map a survey task label onto the dataset's category name.
///
/// Labels beginning with "brainstorm" or "drafting" (ignoring case and
/// surrounding whitespace) collapse to their canonical category. Any other
/// label is returned unchanged.
pub fn normalize_task(task: &str) -> String {
    let key = task.trim().to_lowercase();
    if key.starts_with("brainstorm") {
        BRAINSTORM_CATEGORY.to_string()
    } else if key.starts_with("drafting") {
        DRAFTING_CATEGORY.to_string()
    } else {
        task.to_string()
    }
}

/// Prompt level for a familiarity answer.
///
/// Total over all inputs: anything other than "High", "Medium" or "Low"
/// (including an empty answer) maps to [`PromptLevel::Basic`].
pub fn prompt_level_for(familiarity: &str) -> PromptLevel {
    Familiarity::from_str(familiarity)
        .map(Familiarity::prompt_level)
        .unwrap_or_default()
}

/// Resolved filter built from one set of survey answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    pub offerings: BTreeSet<String>,
    pub tasks: BTreeSet<String>,
    pub prompt_level: PromptLevel,
    pub recommended_level: String,
}

impl MatchCriteria {
    /// Build criteria from raw answers, applying task normalization and the
    /// familiarity mapping.
    pub fn new<'a, O, T>(
        offerings: O,
        tasks: T,
        familiarity: Option<&str>,
        level: &str,
    ) -> Self
    where
        O: IntoIterator<Item = &'a str>,
        T: IntoIterator<Item = &'a str>,
    {
        Self {
            offerings: offerings.into_iter().map(str::to_string).collect(),
            tasks: tasks.into_iter().map(normalize_task).collect(),
            prompt_level: prompt_level_for(familiarity.unwrap_or_default()),
            recommended_level: level.to_string(),
        }
    }

    pub fn offering_matches(&self, record: &PromptRecord) -> bool {
        self.offerings.contains(&record.offering)
    }

    pub fn task_matches(&self, record: &PromptRecord) -> bool {
        self.tasks.contains(&record.task_category)
    }

    pub fn prompt_level_matches(&self, record: &PromptRecord) -> bool {
        record.prompt_level == self.prompt_level
    }

    pub fn recommended_level_matches(&self, record: &PromptRecord) -> bool {
        record.recommended_level == self.recommended_level
    }

    /// True when the record satisfies all four predicates.
    pub fn matches(&self, record: &PromptRecord) -> bool {
        self.offering_matches(record)
            && self.task_matches(record)
            && self.prompt_level_matches(record)
            && self.recommended_level_matches(record)
    }
}
