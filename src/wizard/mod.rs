//! Survey wizard state machine.
//!
//! The wizard shows exactly one step at a time and moves linearly through
//! the survey. Advancement is gated on the required fields of the current
//! step; the last question step submits the form and jumps straight to the
//! results step.
//!
//! # State Transitions
//!
//! ```text
//! Welcome -> Identity -> Level -> Offering -> Tasks -> Familiarity -> Favorites -> Results
//! ```
//!
//! # Invariants
//!
//! - `Results` is reachable only through a successful submit from `Favorites`
//! - `Results` is terminal: no navigation leaves it
//! - A blocked transition leaves the session unchanged

pub mod fields;

pub use fields::{ChoiceList, FieldId, FieldKind, SurveyForm, SurveyOptions};

use crate::dataset::PromptDataset;
use crate::engine::{recommend, Recommendation};
use crate::submission::{submit_favorites, FavoritesSink};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, info};

/// Steps of the survey, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Introduction, no inputs.
    #[default]
    Welcome,
    /// Name and email.
    Identity,
    /// Job level.
    Level,
    /// Organizational offering (single choice).
    Offering,
    /// Task categories (multiple choice).
    Tasks,
    /// Self-rated AI familiarity.
    Familiarity,
    /// Optional favorite prompts. Advancing from here submits the survey.
    Favorites,
    /// Recommendations. Terminal.
    Results,
}

impl WizardStep {
    /// All steps in display order.
    pub const ALL: [Self; 8] = [
        Self::Welcome,
        Self::Identity,
        Self::Level,
        Self::Offering,
        Self::Tasks,
        Self::Familiarity,
        Self::Favorites,
        Self::Results,
    ];

    /// Total number of steps.
    pub const TOTAL_STEPS: usize = Self::ALL.len();

    /// Zero-based position of this step.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the next state in the wizard sequence.
    ///
    /// Returns `None` if at the final state.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Get the previous state in the wizard sequence.
    ///
    /// Returns `None` at the first step and at the terminal results step.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome | Self::Results => None,
            _ => Self::from_index(self.index() - 1),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Results
    }

    /// The last question step, whose advance control submits the survey.
    pub fn is_submit_step(self) -> bool {
        self.index() + 2 == Self::TOTAL_STEPS
    }

    /// Get the display title for this state.
    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Find Your Prompts",
            Self::Identity => "About You",
            Self::Level => "Your Level",
            Self::Offering => "Your Offering",
            Self::Tasks => "Your Tasks",
            Self::Familiarity => "AI Familiarity",
            Self::Favorites => "Your Favorites",
            Self::Results => "Recommended Prompts",
        }
    }

    /// Input fields shown on this step
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Self::Welcome | Self::Results => &[],
            Self::Identity => &[FieldId::Name, FieldId::Email],
            Self::Level => &[FieldId::Level],
            Self::Offering => &[FieldId::Offering],
            Self::Tasks => &[FieldId::Tasks],
            Self::Familiarity => &[FieldId::Familiarity],
            Self::Favorites => &[FieldId::Favorites],
        }
    }
}

/// What the host should display for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepView {
    pub step: WizardStep,
    pub index: usize,
    /// Progress through the survey, 0 to 100
    pub progress_percent: u16,
    /// Back control visible
    pub show_back: bool,
    /// Navigation bar visible at all
    pub show_navigation: bool,
    /// Label of the advance control
    pub advance_label: &'static str,
}

impl StepView {
    /// Display state for the step at `index`.
    pub fn for_index(index: usize) -> Self {
        let last = WizardStep::TOTAL_STEPS - 1;
        let index = index.min(last);
        let step = WizardStep::ALL[index];
        let progress_percent = (index * 100 / last).min(100) as u16;

        Self {
            step,
            index,
            progress_percent,
            show_back: index > 0,
            show_navigation: index != last,
            advance_label: if step.is_submit_step() { "Submit" } else { "Next" },
        }
    }
}

/// Outcome of an advance or retreat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved to another question step
    Moved { from: WizardStep, to: WizardStep },
    /// A required field is invalid; nothing changed
    Blocked { field: FieldId, message: &'static str },
    /// The survey was submitted and results are shown
    Completed,
    /// No transition available from here
    Stayed,
}

/// One respondent's pass through the survey.
pub struct WizardSession {
    current: usize,
    form: SurveyForm,
    dataset: PromptDataset,
    outcome: Option<Recommendation>,
    sink: Option<Arc<dyn FavoritesSink>>,
    pending_submission: Option<JoinHandle<()>>,
}

impl WizardSession {
    /// Start a session at the first step.
    pub fn new(dataset: PromptDataset, options: SurveyOptions) -> Self {
        Self {
            current: 0,
            form: SurveyForm::new(options),
            dataset,
            outcome: None,
            sink: None,
            pending_submission: None,
        }
    }

    /// Route favorites through `sink` when the survey is submitted.
    pub fn with_sink(mut self, sink: Arc<dyn FavoritesSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.current]
    }

    /// Display state for the current step.
    pub fn view(&self) -> StepView {
        StepView::for_index(self.current)
    }

    pub fn form(&self) -> &SurveyForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SurveyForm {
        &mut self.form
    }

    pub fn dataset(&self) -> &PromptDataset {
        &self.dataset
    }

    /// Results of the last submission, once the survey is complete.
    pub fn outcome(&self) -> Option<&Recommendation> {
        self.outcome.as_ref()
    }

    /// Handle of the in-flight favorites submission, if one was started.
    pub fn take_pending_submission(&mut self) -> Option<JoinHandle<()>> {
        self.pending_submission.take()
    }

    /// Move forward one step, or submit from the last question step.
    pub fn advance(&mut self) -> Transition {
        let step = self.current_step();
        if step.is_terminal() {
            return Transition::Stayed;
        }

        if step.is_submit_step() {
            // Submission checks the whole form, not just this step.
            if let Some((field, message)) = self.form.first_invalid(FieldId::all()) {
                debug!(?field, "Submit blocked: {}", message);
                return Transition::Blocked { field, message };
            }
            self.submit();
            return Transition::Completed;
        }

        if let Some((field, message)) = self.form.first_invalid(step.fields()) {
            debug!(?field, "Advance blocked: {}", message);
            return Transition::Blocked { field, message };
        }

        let Some(to) = step.next() else {
            return Transition::Stayed;
        };
        self.current = to.index();
        debug!("Wizard moved {:?} -> {:?}", step, to);
        Transition::Moved { from: step, to }
    }

    /// Move back one step. No-op on the first and terminal steps.
    pub fn retreat(&mut self) -> Transition {
        let step = self.current_step();
        match step.previous() {
            Some(to) => {
                self.current -= 1;
                debug!("Wizard moved {:?} -> {:?}", step, to);
                Transition::Moved { from: step, to }
            }
            None => Transition::Stayed,
        }
    }

    fn submit(&mut self) {
        let answers = self.form.answers();
        info!("Survey submitted by {}", answers.email);

        self.pending_submission = submit_favorites(&answers, self.sink.as_deref());
        self.outcome = Some(recommend(&answers, &self.dataset));
        self.current = WizardStep::TOTAL_STEPS - 1;
    }
}
