//! User interface rendering module
//!
//! Draws one wizard step per frame: title, progress bar, step content,
//! status line and the navigation bar. Screens live in `screens`.

pub mod screens;

use crate::app::{App, StatusKind};
use crate::theme::Styles;
use crate::wizard::{FieldKind, StepView, WizardStep};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the complete UI for the current application state
pub fn render(f: &mut Frame, app: &App) {
    let session = app.session();
    let view = session.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Progress
            Constraint::Min(6),    // Step content
            Constraint::Length(1), // Status
            Constraint::Length(1), // Navigation bar
        ])
        .split(f.area());

    render_title(f, chunks[0], &view);
    render_progress(f, chunks[1], &view);

    match view.step {
        WizardStep::Welcome => screens::render_welcome(f, chunks[2], session.dataset()),
        WizardStep::Results => {
            screens::render_results(f, chunks[2], session.outcome(), app.ui().results_scroll)
        }
        step => screens::render_question(f, chunks[2], session.form(), step, app.ui().focus),
    }

    render_status(f, chunks[3], app);
    render_nav_bar(f, chunks[4], app, &view);
}

fn render_title(f: &mut Frame, area: Rect, view: &StepView) {
    let title = format!(
        "{}  (step {} of {})",
        view.step.title(),
        view.index + 1,
        WizardStep::TOTAL_STEPS
    );
    let widget = Paragraph::new(title)
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(widget, area);
}

fn render_progress(f: &mut Frame, area: Rect, view: &StepView) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Styles::gauge())
        .percent(view.progress_percent)
        .label(format!("{}%", view.progress_percent));
    f.render_widget(gauge, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let Some(status) = &app.ui().status else {
        return;
    };
    let style = match status.kind {
        StatusKind::Success => Styles::success(),
        StatusKind::Error => Styles::error(),
    };
    f.render_widget(Paragraph::new(format!(" {}", status.text)).style(style), area);
}

fn hint(key: &str, action: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!(" [{}] ", key), Styles::key_hint()),
        Span::styled(format!("{}  ", action), Styles::text_muted()),
    ]
}

fn render_nav_bar(f: &mut Frame, area: Rect, app: &App, view: &StepView) {
    let mut spans = Vec::new();

    if view.show_navigation {
        if view.show_back {
            spans.extend(hint("Esc", "Back"));
        } else {
            spans.extend(hint("Esc", "Quit"));
        }
        spans.extend(hint("Enter", view.advance_label));

        let fields = view.step.fields();
        if fields.len() > 1 {
            spans.extend(hint("Tab", "Next field"));
        }
        let focused = app.ui().focused_field(view.step);
        if focused.is_some_and(|field| {
            matches!(field.kind(), FieldKind::SingleChoice | FieldKind::MultiChoice)
        }) {
            spans.extend(hint("Space", "Select"));
            spans.extend(hint("Up/Down", "Move"));
        }
    } else {
        spans.extend(hint("e", &format!("Export ({})", app.export_format())));
        spans.extend(hint("Up/Down", "Scroll"));
        spans.extend(hint("q", "Quit"));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
