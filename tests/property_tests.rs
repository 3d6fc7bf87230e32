//! Property-Based Tests for PromptPath
//!
//! These tests verify:
//! - Task normalization is idempotent and ignores case and surrounding whitespace
//! - The familiarity mapping is total
//! - Every recommended prompt satisfies all four filter predicates
//! - Enum string round-trips

use proptest::prelude::*;
use promptpath::{
    normalize_task, prompt_level_for, recommend, ExportFormat, PromptDataset, PromptLevel,
    PromptRecord, SurveyAnswers,
};

// =============================================================================
// Task Normalization Properties
// =============================================================================

/// Randomize the case of each character
fn mixed_case(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
        .collect()
}

proptest! {
    /// Normalizing twice gives the same answer as normalizing once
    #[test]
    fn normalize_is_idempotent(task in "\\PC{0,24}") {
        let once = normalize_task(&task);
        prop_assert_eq!(normalize_task(&once), once);
    }

    /// Brainstorm prefix survives any case and padding
    #[test]
    fn brainstorm_prefix_insensitive(
        mask in prop::collection::vec(any::<bool>(), 1..12),
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t]{0,3}",
        suffix in "[a-z ]{0,10}",
    ) {
        let task = format!("{}{}{}{}", pad_left, mixed_case("brainstorm", &mask), suffix, pad_right);
        prop_assert_eq!(normalize_task(&task), "Brainstorm");
    }

    /// Drafting prefix survives any case and padding
    #[test]
    fn drafting_prefix_insensitive(
        mask in prop::collection::vec(any::<bool>(), 1..12),
        pad_left in "[ \t]{0,3}",
        suffix in "[a-z ]{0,10}",
    ) {
        let task = format!("{}{}{}", pad_left, mixed_case("drafting", &mask), suffix);
        prop_assert_eq!(normalize_task(&task), "Drafting & Writing");
    }

    /// Labels without a canonical prefix come back untouched
    #[test]
    fn other_labels_unchanged(task in "[c-z][a-z ]{0,16}") {
        prop_assume!(!task.starts_with("drafting"));
        prop_assert_eq!(normalize_task(&task), task);
    }
}

// =============================================================================
// Familiarity Mapping Properties
// =============================================================================

proptest! {
    /// Every string maps to some level; unknown strings map to Basic
    #[test]
    fn familiarity_mapping_is_total(answer in "\\PC{0,12}") {
        let level = prompt_level_for(&answer);
        let expected = match answer.as_str() {
            "High" => PromptLevel::Advanced,
            "Medium" => PromptLevel::Enhanced,
            _ => PromptLevel::Basic,
        };
        prop_assert_eq!(level, expected);
    }
}

// =============================================================================
// Filter Invariant
// =============================================================================

fn level_strategy() -> impl Strategy<Value = PromptLevel> {
    prop_oneof![
        Just(PromptLevel::Basic),
        Just(PromptLevel::Enhanced),
        Just(PromptLevel::Advanced),
    ]
}

fn record_strategy() -> impl Strategy<Value = PromptRecord> {
    (
        prop::sample::select(vec!["Digital", "Tax", "Audit"]),
        prop::sample::select(vec!["Brainstorm", "Drafting & Writing", "Research"]),
        level_strategy(),
        prop::sample::select(vec!["Analyst", "Manager", "Partner"]),
        prop::sample::select(vec!["p1", "p2", "p3", "p4"]),
    )
        .prop_map(|(offering, category, level, rec, prompt)| PromptRecord {
            offering: offering.to_string(),
            task_category: category.to_string(),
            prompt_level: level,
            recommended_level: rec.to_string(),
            prompt: prompt.to_string(),
        })
}

fn answers_strategy() -> impl Strategy<Value = SurveyAnswers> {
    (
        prop::sample::select(vec!["Analyst", "Manager", "Partner"]),
        prop::option::of(prop::sample::select(vec!["Digital", "Tax", "Audit"])),
        prop::sample::subsequence(vec!["brainstorming", "Drafting notes", "Research"], 0..=3),
        prop::option::of(prop::sample::select(vec!["High", "Medium", "Low", "Unsure"])),
    )
        .prop_map(|(level, offering, tasks, familiarity)| SurveyAnswers {
            name: "n".to_string(),
            email: "n@example.com".to_string(),
            level: level.to_string(),
            offering: offering.map(str::to_string),
            tasks: tasks.into_iter().map(str::to_string).collect(),
            familiarity: familiarity.map(str::to_string),
            favorites: None,
        })
}

proptest! {
    /// Each grouped prompt comes from a record passing all four predicates,
    /// and every such record is represented
    #[test]
    fn grouping_matches_filter(
        records in prop::collection::vec(record_strategy(), 0..40),
        answers in answers_strategy(),
    ) {
        let dataset = PromptDataset::from_records(records.clone());
        let rec = recommend(&answers, &dataset);
        let criteria = answers.criteria();

        for (category, prompts) in rec.grouping.iter() {
            for prompt in prompts {
                prop_assert!(records.iter().any(|r| {
                    r.task_category == category && r.prompt == prompt && criteria.matches(r)
                }), "grouped prompt not backed by a matching record");
            }
        }

        for r in records.iter().filter(|r| criteria.matches(r)) {
            let prompts = rec.grouping.prompts_in(&r.task_category);
            prop_assert!(prompts.is_some_and(|p| p.contains(&r.prompt)));
        }
    }

    /// Results are never larger than the distinct matching pairs
    #[test]
    fn grouping_is_deduplicated(
        records in prop::collection::vec(record_strategy(), 0..40),
        answers in answers_strategy(),
    ) {
        let dataset = PromptDataset::from_records(records.clone());
        let rec = recommend(&answers, &dataset);
        let criteria = answers.criteria();

        let mut pairs: Vec<(&str, &str)> = records
            .iter()
            .filter(|r| criteria.matches(r))
            .map(|r| (r.task_category.as_str(), r.prompt.as_str()))
            .collect();
        pairs.sort();
        pairs.dedup();
        prop_assert_eq!(rec.grouping.prompt_count(), pairs.len());
    }
}

// =============================================================================
// Enum Round-trip Properties
// =============================================================================

fn export_format_strategy() -> impl Strategy<Value = ExportFormat> {
    prop_oneof![
        Just(ExportFormat::Text),
        Just(ExportFormat::Doc),
        Just(ExportFormat::List),
    ]
}

proptest! {
    /// PromptLevel: to_string -> parse round-trip is identity
    #[test]
    fn prompt_level_roundtrip(level in level_strategy()) {
        let parsed: PromptLevel = level.to_string().parse().expect("Should parse");
        prop_assert_eq!(level, parsed);
    }

    /// ExportFormat: Display output is non-empty lowercase and parses back
    #[test]
    fn export_format_display_is_valid(format in export_format_strategy()) {
        let s = format.to_string();
        prop_assert!(!s.is_empty());
        prop_assert_eq!(s.clone(), s.to_lowercase());
        let parsed: ExportFormat = s.parse().expect("Should parse");
        prop_assert_eq!(format, parsed);
    }
}
