//! Survey form fields and per-field validation.
//!
//! Each field knows whether it is required and can report whether its
//! current value is valid together with the message to show when it is
//! not. Only required fields gate step advancement.

use crate::engine::SurveyAnswers;
use crate::types::Familiarity;
use strum::IntoEnumIterator;

/// Input field identifiers, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Level,
    Offering,
    Tasks,
    Familiarity,
    Favorites,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    SingleChoice,
    MultiChoice,
    LongText,
}

impl FieldId {
    /// Get all fields in order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::Email,
            Self::Level,
            Self::Offering,
            Self::Tasks,
            Self::Familiarity,
            Self::Favorites,
        ]
    }

    /// Get field label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Level => "Level",
            Self::Offering => "S&T Offering",
            Self::Tasks => "Tasks",
            Self::Familiarity => "AI Familiarity",
            Self::Favorites => "Favorite prompts (optional)",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name => FieldKind::Text,
            Self::Email => FieldKind::Email,
            Self::Level | Self::Offering | Self::Familiarity => FieldKind::SingleChoice,
            Self::Tasks => FieldKind::MultiChoice,
            Self::Favorites => FieldKind::LongText,
        }
    }

    /// Check if field is required.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Favorites)
    }
}

/// Option list backing a choice field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceList {
    options: Vec<String>,
    selected: Vec<bool>,
    cursor: usize,
    multi: bool,
}

impl ChoiceList {
    /// Radio-button style list: at most one option selected
    pub fn single(options: Vec<String>) -> Self {
        Self::build(options, false)
    }

    /// Checkbox style list: any number of options selected
    pub fn multi(options: Vec<String>) -> Self {
        Self::build(options, true)
    }

    fn build(options: Vec<String>, multi: bool) -> Self {
        let selected = vec![false; options.len()];
        Self {
            options,
            selected,
            cursor: 0,
            multi,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Move cursor up.
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor down.
    pub fn select_next(&mut self) {
        if !self.options.is_empty() && self.cursor < self.options.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Toggle the option under the cursor.
    pub fn toggle_current(&mut self) {
        self.toggle(self.cursor);
    }

    /// Toggle an option. Single-choice lists select it exclusively.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.options.len() {
            return;
        }
        if self.multi {
            self.selected[index] = !self.selected[index];
        } else {
            for (i, flag) in self.selected.iter_mut().enumerate() {
                *flag = i == index;
            }
        }
    }

    /// Select an option by its text. Returns false if no option matches.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                if !self.is_selected(index) {
                    self.toggle(index);
                }
                true
            }
            None => false,
        }
    }

    /// Selected option texts, in option order
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(option, _)| option.as_str())
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.iter().any(|s| *s)
    }

    /// Satisfied for a required field: something is selected, or there is
    /// nothing to select.
    pub fn is_answerable(&self) -> bool {
        self.options.is_empty() || self.has_selection()
    }
}

/// Option lists offered by the survey.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyOptions {
    pub levels: Vec<String>,
    pub offerings: Vec<String>,
    pub tasks: Vec<String>,
}

/// All survey inputs and their current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyForm {
    pub name: String,
    pub email: String,
    pub level: ChoiceList,
    pub offering: ChoiceList,
    pub tasks: ChoiceList,
    pub familiarity: ChoiceList,
    pub favorites: String,
}

impl SurveyForm {
    pub fn new(options: SurveyOptions) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            level: ChoiceList::single(options.levels),
            offering: ChoiceList::single(options.offerings),
            tasks: ChoiceList::multi(options.tasks),
            familiarity: ChoiceList::single(Familiarity::iter().map(|f| f.to_string()).collect()),
            favorites: String::new(),
        }
    }

    /// Mutable text buffer for text-like fields
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Favorites => Some(&mut self.favorites),
            _ => None,
        }
    }

    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(&self.name),
            FieldId::Email => Some(&self.email),
            FieldId::Favorites => Some(&self.favorites),
            _ => None,
        }
    }

    pub fn choice(&self, field: FieldId) -> Option<&ChoiceList> {
        match field {
            FieldId::Level => Some(&self.level),
            FieldId::Offering => Some(&self.offering),
            FieldId::Tasks => Some(&self.tasks),
            FieldId::Familiarity => Some(&self.familiarity),
            _ => None,
        }
    }

    pub fn choice_mut(&mut self, field: FieldId) -> Option<&mut ChoiceList> {
        match field {
            FieldId::Level => Some(&mut self.level),
            FieldId::Offering => Some(&mut self.offering),
            FieldId::Tasks => Some(&mut self.tasks),
            FieldId::Familiarity => Some(&mut self.familiarity),
            _ => None,
        }
    }

    /// Message describing why the field is invalid, or `None` if valid.
    ///
    /// Optional fields are always valid. A choice field with no options
    /// cannot be answered, so it never blocks; its answer simply matches
    /// no record.
    pub fn validation_message(&self, field: FieldId) -> Option<&'static str> {
        if !field.is_required() {
            return None;
        }
        match field.kind() {
            FieldKind::Text | FieldKind::LongText => self
                .text(field)
                .filter(|v| !v.trim().is_empty())
                .map_or(Some("Please fill out this field."), |_| None),
            FieldKind::Email => email_message(&self.email),
            FieldKind::SingleChoice => self
                .choice(field)
                .filter(|c| c.is_answerable())
                .map_or(Some("Please select one of these options."), |_| None),
            FieldKind::MultiChoice => self
                .choice(field)
                .filter(|c| c.is_answerable())
                .map_or(
                    Some("Please check at least one box if you want to proceed."),
                    |_| None,
                ),
        }
    }

    /// First invalid required field among `fields`, with its message.
    pub fn first_invalid(&self, fields: &[FieldId]) -> Option<(FieldId, &'static str)> {
        fields
            .iter()
            .find_map(|f| self.validation_message(*f).map(|msg| (*f, msg)))
    }

    /// Snapshot of the answers as submitted
    pub fn answers(&self) -> SurveyAnswers {
        let single = |list: &ChoiceList| list.selected_values().first().map(|v| v.to_string());
        SurveyAnswers {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            level: single(&self.level).unwrap_or_default(),
            offering: single(&self.offering),
            tasks: self.tasks.selected_values().into_iter().map(str::to_string).collect(),
            familiarity: single(&self.familiarity),
            favorites: Some(self.favorites.clone()).filter(|f| !f.trim().is_empty()),
        }
    }
}

fn email_message(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Please fill out this field.");
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Some("Please include an '@' in the email address.");
    };
    if local.is_empty() {
        return Some("Please enter a part followed by '@'.");
    }
    if domain.is_empty() {
        return Some("Please enter a part following '@'.");
    }
    if domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Some("Please enter a valid email address.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SurveyOptions {
        SurveyOptions {
            levels: vec!["Analyst".to_string(), "Manager".to_string()],
            offerings: vec!["Audit".to_string(), "Consulting".to_string()],
            tasks: vec!["Brainstorming ideas".to_string(), "Research".to_string()],
        }
    }

    #[test]
    fn test_single_choice_is_exclusive() {
        let mut list = ChoiceList::single(vec!["a".into(), "b".into()]);
        list.toggle(0);
        list.toggle(1);
        assert_eq!(list.selected_values(), vec!["b"]);
    }

    #[test]
    fn test_multi_choice_toggles() {
        let mut list = ChoiceList::multi(vec!["a".into(), "b".into()]);
        list.toggle(0);
        list.toggle(1);
        assert_eq!(list.selected_values(), vec!["a", "b"]);
        list.toggle(0);
        assert_eq!(list.selected_values(), vec!["b"]);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut list = ChoiceList::single(vec!["a".into(), "b".into()]);
        list.select_previous();
        assert_eq!(list.cursor(), 0);
        list.select_next();
        list.select_next();
        assert_eq!(list.cursor(), 1);
        list.toggle_current();
        assert!(list.is_selected(1));
    }

    #[test]
    fn test_select_value() {
        let mut list = ChoiceList::multi(vec!["a".into(), "b".into()]);
        assert!(list.select_value("b"));
        assert!(list.select_value("b"));
        assert!(!list.select_value("c"));
        assert_eq!(list.selected_values(), vec!["b"]);
    }

    #[test]
    fn test_required_messages() {
        let form = SurveyForm::new(options());
        assert_eq!(
            form.validation_message(FieldId::Name),
            Some("Please fill out this field.")
        );
        assert_eq!(
            form.validation_message(FieldId::Level),
            Some("Please select one of these options.")
        );
        assert_eq!(
            form.validation_message(FieldId::Tasks),
            Some("Please check at least one box if you want to proceed.")
        );
        assert_eq!(form.validation_message(FieldId::Favorites), None);
    }

    #[test]
    fn test_choice_without_options_does_not_block() {
        let mut form = SurveyForm::new(SurveyOptions::default());
        assert_eq!(form.validation_message(FieldId::Level), None);
        assert_eq!(form.validation_message(FieldId::Offering), None);
        assert_eq!(form.validation_message(FieldId::Tasks), None);
        // Familiarity always has its three options
        assert_eq!(
            form.validation_message(FieldId::Familiarity),
            Some("Please select one of these options.")
        );

        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.familiarity.select_value("High");
        assert_eq!(form.first_invalid(FieldId::all()), None);

        let answers = form.answers();
        assert_eq!(answers.level, "");
        assert_eq!(answers.offering, None);
        assert!(answers.tasks.is_empty());
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(email_message("ada@example.com"), None);
        assert_eq!(
            email_message("ada.example.com"),
            Some("Please include an '@' in the email address.")
        );
        assert_eq!(email_message("@example.com"), Some("Please enter a part followed by '@'."));
        assert_eq!(email_message("ada@"), Some("Please enter a part following '@'."));
        assert_eq!(email_message("a@b@c"), Some("Please enter a valid email address."));
    }

    #[test]
    fn test_first_invalid_in_order() {
        let mut form = SurveyForm::new(options());
        form.name = "Ada".to_string();
        let (field, msg) = form.first_invalid(&[FieldId::Name, FieldId::Email]).unwrap();
        assert_eq!(field, FieldId::Email);
        assert_eq!(msg, "Please fill out this field.");
    }

    #[test]
    fn test_answers_snapshot() {
        let mut form = SurveyForm::new(options());
        form.name = " Ada ".to_string();
        form.email = "ada@example.com".to_string();
        form.level.select_value("Manager");
        form.offering.select_value("Consulting");
        form.tasks.select_value("Research");
        form.tasks.select_value("Brainstorming ideas");
        form.familiarity.select_value("High");

        let answers = form.answers();
        assert_eq!(answers.name, "Ada");
        assert_eq!(answers.level, "Manager");
        assert_eq!(answers.offering.as_deref(), Some("Consulting"));
        assert_eq!(answers.tasks, vec!["Brainstorming ideas", "Research"]);
        assert_eq!(answers.familiarity.as_deref(), Some("High"));
        assert_eq!(answers.favorites, None);
    }

    #[test]
    fn test_familiarity_options_fixed() {
        let form = SurveyForm::new(SurveyOptions::default());
        assert_eq!(form.familiarity.options(), ["High", "Medium", "Low"]);
    }
}
