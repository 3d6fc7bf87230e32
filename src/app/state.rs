//! Application state definitions
//!
//! UI-side state that is not part of the survey itself: which field has
//! focus, the status line, and results scrolling.

use crate::wizard::{FieldId, WizardStep};

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Message shown under the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Interactive state layered over the wizard session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Focused field index within the current step
    pub focus: usize,
    /// Status line content
    pub status: Option<StatusMessage>,
    /// First visible line of the results view
    pub results_scroll: u16,
    /// Set when the user asked to leave
    pub should_quit: bool,
}

impl UiState {
    /// Field that currently receives input on `step`
    pub fn focused_field(&self, step: WizardStep) -> Option<FieldId> {
        step.fields().get(self.focus).copied()
    }

    /// Cycle focus forward through the step's fields.
    pub fn focus_next(&mut self, step: WizardStep) {
        let count = step.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    /// Cycle focus backward through the step's fields.
    pub fn focus_previous(&mut self, step: WizardStep) {
        let count = step.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Focus a specific field if it is on `step`.
    pub fn focus_field(&mut self, step: WizardStep, field: FieldId) {
        if let Some(index) = step.fields().iter().position(|f| *f == field) {
            self.focus = index;
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }
}
