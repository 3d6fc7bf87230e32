//! Survey wizard screens.
//!
//! - `render_welcome` - introduction and dataset status
//! - `render_question` - the input fields of one question step
//! - `render_results` - answers echo, summary and grouped prompts

use crate::dataset::PromptDataset;
use crate::engine::Recommendation;
use crate::report::{Report, ReportLine, NO_MATCHES_MESSAGE};
use crate::theme::Styles;
use crate::wizard::{ChoiceList, FieldId, FieldKind, SurveyForm, WizardStep};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

// ============================================================================
// Welcome Screen
// ============================================================================

/// Render the welcome screen.
pub fn render_welcome(f: &mut Frame, area: Rect, dataset: &PromptDataset) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Answer a few short questions and get prompts picked for your role,",
            Styles::text(),
        )),
        Line::from(Span::styled(
            "  your offering, the work you do, and how comfortable you are with AI.",
            Styles::text(),
        )),
        Line::from(""),
    ];

    if dataset.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Prompt data could not be loaded. You can still take the survey.",
            Styles::warning(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {} prompts available.", dataset.len()),
            Styles::text_secondary(),
        )));
    }

    let welcome = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border(false)));
    f.render_widget(welcome, area);
}

// ============================================================================
// Question Screens
// ============================================================================

/// Render the fields of a question step.
pub fn render_question(f: &mut Frame, area: Rect, form: &SurveyForm, step: WizardStep, focus: usize) {
    let fields = step.fields();
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|field| match field.kind() {
            FieldKind::Text | FieldKind::Email => Constraint::Length(3),
            FieldKind::LongText => Constraint::Min(6),
            FieldKind::SingleChoice | FieldKind::MultiChoice => Constraint::Min(4),
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let focused = i == focus;
        if let Some(value) = form.text(*field) {
            render_text_field(f, chunks[i], *field, value, focused);
        } else if let Some(list) = form.choice(*field) {
            render_choice_field(f, chunks[i], *field, list, focused);
        }
    }
}

fn field_title(field: FieldId) -> String {
    let required_marker = if field.is_required() { " *" } else { "" };
    format!(" {}{} ", field.label(), required_marker)
}

fn render_text_field(f: &mut Frame, area: Rect, field: FieldId, value: &str, focused: bool) {
    let cursor = if focused { "_" } else { "" };
    let style = if focused { Styles::text() } else { Styles::text_secondary() };

    let mut widget = Paragraph::new(format!("{}{}", value, cursor))
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(focused))
                .title(field_title(field)),
        );
    if field.kind() == FieldKind::LongText {
        widget = widget.wrap(Wrap { trim: false });
    }
    f.render_widget(widget, area);
}

fn render_choice_field(f: &mut Frame, area: Rect, field: FieldId, list: &ChoiceList, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
        .title(field_title(field));

    if list.options().is_empty() {
        let empty = Paragraph::new("  No options available.")
            .style(Styles::warning())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = list
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = match (list.is_multi(), list.is_selected(i)) {
                (true, true) => "[x]",
                (true, false) => "[ ]",
                (false, true) => "(*)",
                (false, false) => "( )",
            };
            ListItem::new(format!(" {} {}", marker, option))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .style(Styles::text())
        .highlight_style(Styles::cursor());

    let mut state = ListState::default();
    if focused {
        state.select(Some(list.cursor()));
    }
    f.render_stateful_widget(widget, area, &mut state);
}

// ============================================================================
// Results Screen
// ============================================================================

/// Styled lines for the results view
pub fn results_lines(recommendation: &Recommendation) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in Report::new(recommendation).lines() {
        match entry {
            ReportLine::Answer { label, value } => lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), Styles::title()),
                Span::styled(value, Styles::text()),
            ])),
            ReportLine::Summary(summary) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(summary, Styles::text())));
            }
            ReportLine::NoMatches => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(NO_MATCHES_MESSAGE, Styles::warning())));
            }
            ReportLine::Category(category) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(category, Styles::category())));
            }
            ReportLine::Prompt(prompt) => {
                lines.push(Line::from(Span::styled(format!("  - {}", prompt), Styles::text())));
            }
        }
    }
    lines
}

/// Render the results screen.
pub fn render_results(f: &mut Frame, area: Rect, recommendation: Option<&Recommendation>, scroll: u16) {
    let lines = recommendation.map(results_lines).unwrap_or_default();
    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(true))
                .title(" Your Recommendations "),
        );
    f.render_widget(results, area);
}
