//! PromptPath Library
//!
//! Core functionality for the prompt recommendation survey: the wizard
//! state machine, dataset loading, the recommendation engine, and result
//! rendering and export.

pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod report;
pub mod submission;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use config::SurveyConfig;
pub use dataset::{DatasetSource, PromptDataset, PromptRecord};
pub use engine::{
    normalize_task, prompt_level_for, recommend, MatchCriteria, Recommendation, ResultGrouping,
    SurveyAnswers,
};
pub use error::SurveyError;
pub use report::{Report, ReportLine};
pub use submission::{FavoritesSink, FavoritesSubmission, FormEndpoint};
pub use types::{ExportFormat, Familiarity, PromptLevel};
pub use wizard::{FieldId, StepView, SurveyForm, SurveyOptions, Transition, WizardSession, WizardStep};
