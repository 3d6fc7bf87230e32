//! Application module
//!
//! Contains the interactive survey loop and key handling.
//!
//! # Module Structure
//! - `state` - UI state types (focus, status line, scrolling)
//! - Main module - App struct and event loop

mod state;

pub use state::{StatusKind, StatusMessage, UiState};

use crate::error::Result;
use crate::export::write_export;
use crate::types::ExportFormat;
use crate::ui;
use crate::wizard::{FieldKind, Transition, WizardSession, WizardStep};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lines moved per PageUp/PageDown on the results screen
const PAGE_LINES: u16 = 10;

/// Main application struct
pub struct App {
    session: WizardSession,
    ui: UiState,
    export_dir: PathBuf,
    export_format: ExportFormat,
}

impl App {
    /// Create a new application instance
    pub fn new(session: WizardSession, export_dir: PathBuf, export_format: ExportFormat) -> Self {
        info!("Creating new App instance");
        let mut ui = UiState::default();
        if session.dataset().is_empty() {
            ui.status = Some(StatusMessage::error(
                "No prompt data is available; results will be empty.",
            ));
        }
        Self {
            session,
            ui,
            export_dir,
            export_format,
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    /// Hand over the favorites post started on submit, if any
    pub fn take_pending_submission(&mut self) -> Option<JoinHandle<()>> {
        self.session.take_pending_submission()
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.ui.should_quit {
            terminal.draw(|f| ui::render(f, self))?;

            if crossterm::event::poll(Duration::from_millis(100))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    self.handle_key_event(key_event);
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle keyboard input events. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return self.ui.should_quit;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.ui.should_quit = true;
            return true;
        }

        let step = self.session.current_step();
        if step.is_terminal() {
            self.handle_results_key(key);
        } else {
            self.handle_step_key(step, key);
        }
        self.ui.should_quit
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.ui.should_quit = true,
            KeyCode::Char('e') | KeyCode::Char('s') => self.export(),
            KeyCode::Up | KeyCode::Char('k') => self.ui.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.ui.scroll_down(1),
            KeyCode::PageUp => self.ui.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.ui.scroll_down(PAGE_LINES),
            KeyCode::Home => self.ui.results_scroll = 0,
            _ => {}
        }
    }

    fn handle_step_key(&mut self, step: WizardStep, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => return self.advance(),
            KeyCode::Esc => {
                if step == WizardStep::Welcome {
                    self.ui.should_quit = true;
                } else {
                    self.retreat();
                }
                return;
            }
            KeyCode::Tab => return self.ui.focus_next(step),
            KeyCode::BackTab => return self.ui.focus_previous(step),
            _ => {}
        }

        // Chorded keys are commands, never text or selections
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }

        let Some(field) = self.ui.focused_field(step) else {
            return;
        };

        match field.kind() {
            FieldKind::Text | FieldKind::Email | FieldKind::LongText => {
                if let Some(buffer) = self.session.form_mut().text_mut(field) {
                    match key.code {
                        KeyCode::Char(c) => buffer.push(c),
                        KeyCode::Backspace => {
                            buffer.pop();
                        }
                        _ => {}
                    }
                }
            }
            FieldKind::SingleChoice | FieldKind::MultiChoice => {
                if let Some(list) = self.session.form_mut().choice_mut(field) {
                    match key.code {
                        KeyCode::Up | KeyCode::Char('k') => list.select_previous(),
                        KeyCode::Down | KeyCode::Char('j') => list.select_next(),
                        KeyCode::Char(' ') => list.toggle_current(),
                        _ => {}
                    }
                }
            }
        }
    }

    fn advance(&mut self) {
        match self.session.advance() {
            Transition::Moved { to, .. } => {
                self.ui.focus = 0;
                self.ui.status = None;
                debug!("Showing step {:?}", to);
            }
            Transition::Blocked { field, message } => {
                self.ui.focus_field(self.session.current_step(), field);
                self.ui.status = Some(StatusMessage::error(format!(
                    "{}: {}",
                    field.label(),
                    message
                )));
            }
            Transition::Completed => {
                self.ui.focus = 0;
                self.ui.results_scroll = 0;
                self.ui.status = None;
            }
            Transition::Stayed => {}
        }
    }

    fn retreat(&mut self) {
        if let Transition::Moved { .. } = self.session.retreat() {
            self.ui.focus = 0;
            self.ui.status = None;
        }
    }

    /// Export the current results using the configured format.
    pub fn export(&mut self) {
        let Some(outcome) = self.session.outcome() else {
            self.ui.status = Some(StatusMessage::error("No results to export yet."));
            return;
        };

        self.ui.status = Some(
            match write_export(&self.export_dir, self.export_format, outcome) {
                Ok(path) => StatusMessage::success(format!("Saved {}", path.display())),
                Err(e) => {
                    warn!("Export failed: {}", e);
                    StatusMessage::error(format!("Export failed: {}", e))
                }
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PromptDataset;
    use crate::wizard::SurveyOptions;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(export_dir: PathBuf) -> App {
        let options = SurveyOptions {
            levels: vec!["Manager".to_string()],
            offerings: vec!["Consulting".to_string()],
            tasks: vec!["Research".to_string()],
        };
        let session = WizardSession::new(PromptDataset::empty(), options);
        App::new(session, export_dir, ExportFormat::Text)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_empty_dataset_warns() {
        let app = app(PathBuf::from("."));
        assert_eq!(app.ui().status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn test_escape_on_welcome_quits() {
        let mut app = app(PathBuf::from("."));
        assert!(app.handle_key_event(key(KeyCode::Esc)));
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app(PathBuf::from("."));
        app.handle_key_event(key(KeyCode::Enter));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key_event(ctrl_c));
    }

    #[test]
    fn test_blocked_advance_shows_message_and_focuses_field() {
        let mut app = app(PathBuf::from("."));
        app.handle_key_event(key(KeyCode::Enter));
        type_text(&mut app, "Ada");
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.session().current_step(), WizardStep::Identity);
        assert_eq!(app.ui().focus, 1);
        let status = app.ui().status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Email: Please fill out this field.");
    }

    #[test]
    fn test_keyboard_run_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path().to_path_buf());

        app.handle_key_event(key(KeyCode::Enter));
        type_text(&mut app, "Ada");
        app.handle_key_event(key(KeyCode::Tab));
        type_text(&mut app, "ada@example.com");
        app.handle_key_event(key(KeyCode::Enter));

        // Level, offering, tasks: select the first option
        for _ in 0..3 {
            app.handle_key_event(key(KeyCode::Char(' ')));
            app.handle_key_event(key(KeyCode::Enter));
        }
        // Familiarity: move to "Medium"
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Char(' ')));
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.session().current_step(), WizardStep::Favorites);
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.session().current_step(), WizardStep::Results);

        let outcome = app.session().outcome().unwrap();
        assert_eq!(outcome.answers.familiarity.as_deref(), Some("Medium"));

        app.handle_key_event(key(KeyCode::Char('e')));
        let status = app.ui().status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert!(dir.path().join("recommended_prompts.txt").exists());

        assert!(app.handle_key_event(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_modified_keys_are_not_typed() {
        let mut app = app(PathBuf::from("."));
        app.handle_key_event(key(KeyCode::Enter));
        type_text(&mut app, "Ada");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key_event(KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
        assert_eq!(app.session().form().name, "AdaB");
    }

    #[test]
    fn test_backspace_edits_text() {
        let mut app = app(PathBuf::from("."));
        app.handle_key_event(key(KeyCode::Enter));
        type_text(&mut app, "Adx");
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.session().form().name, "Ad");
    }
}
