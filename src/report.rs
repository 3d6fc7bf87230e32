//! Display model for a recommendation.
//!
//! Builds the ordered sequence shown on the results screen: the answer
//! echo, the summary sentence, then either the no-matches message or one
//! list per category. The terminal UI and the exporters both read from it.

use crate::engine::Recommendation;

/// Shown on screen when nothing matched
pub const NO_MATCHES_MESSAGE: &str =
    "No prompts matched your selections. Try broadening your options.";

/// Written to the export file when nothing matched
pub const NO_MATCHES_EXPORT: &str = "No prompts matched your selections.";

/// One element of the rendered results, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Echo of a survey answer
    Answer { label: &'static str, value: String },
    /// Fixed-template sentence naming level and offering
    Summary(String),
    /// Nothing matched
    NoMatches,
    /// Task category header
    Category(String),
    /// One prompt under the preceding category
    Prompt(String),
}

/// Results view over a [`Recommendation`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    recommendation: &'a Recommendation,
}

impl<'a> Report<'a> {
    pub fn new(recommendation: &'a Recommendation) -> Self {
        Self { recommendation }
    }

    pub fn recommendation(&self) -> &'a Recommendation {
        self.recommendation
    }

    /// Answers in echo order, including selections that matched nothing.
    pub fn answer_lines(&self) -> Vec<(&'static str, String)> {
        let answers = &self.recommendation.answers;
        vec![
            ("Name", answers.name.clone()),
            ("Email", answers.email.clone()),
            ("S&T Offering", answers.offering.clone().unwrap_or_default()),
            ("Level", answers.level.clone()),
            ("AI Familiarity", answers.familiarity.clone().unwrap_or_default()),
            ("Tasks", answers.tasks.join(", ")),
        ]
    }

    pub fn summary(&self) -> String {
        let answers = &self.recommendation.answers;
        format!(
            "Respondents who are at {} Level from {} Offering benefit from the following prompts:",
            answers.level,
            answers.offering.as_deref().unwrap_or_default()
        )
    }

    /// Full results sequence in display order
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines: Vec<ReportLine> = self
            .answer_lines()
            .into_iter()
            .map(|(label, value)| ReportLine::Answer { label, value })
            .collect();

        lines.push(ReportLine::Summary(self.summary()));

        let grouping = &self.recommendation.grouping;
        if grouping.is_empty() {
            lines.push(ReportLine::NoMatches);
        } else {
            for (category, prompts) in grouping.iter() {
                lines.push(ReportLine::Category(category.to_string()));
                lines.extend(prompts.map(|p| ReportLine::Prompt(p.to_string())));
            }
        }

        lines
    }
}
