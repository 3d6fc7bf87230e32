//! Group matching prompts by task category.

use crate::dataset::PromptRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Matching prompts keyed by task category.
///
/// Both levels are ordered collections: iteration yields categories in
/// ascending order and, within a category, unique prompts in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultGrouping {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl ResultGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record's prompt under its category. Duplicates collapse.
    pub fn insert(&mut self, record: &PromptRecord) {
        self.groups
            .entry(record.task_category.clone())
            .or_default()
            .insert(record.prompt.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of categories with at least one prompt
    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of unique prompts across all categories
    pub fn prompt_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// Categories and their prompts, both ascending
    pub fn iter(&self) -> impl Iterator<Item = (&str, impl Iterator<Item = &str>)> {
        self.groups
            .iter()
            .map(|(category, prompts)| (category.as_str(), prompts.iter().map(String::as_str)))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn prompts_in(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(category)
    }

    /// Every unique prompt regardless of category, ascending.
    ///
    /// A prompt listed under two categories appears once.
    pub fn all_prompts(&self) -> Vec<&str> {
        let unique: BTreeSet<&str> = self
            .groups
            .values()
            .flat_map(|prompts| prompts.iter().map(String::as_str))
            .collect();
        unique.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a PromptRecord> for ResultGrouping {
    fn from_iter<I: IntoIterator<Item = &'a PromptRecord>>(iter: I) -> Self {
        let mut grouping = Self::new();
        for record in iter {
            grouping.insert(record);
        }
        grouping
    }
}
