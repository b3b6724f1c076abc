//! Input widget models shared by the calculator forms.
//!
//! These hold values only. Rendering lives in the screens.

use crossterm::event::KeyCode;
use leadplan_core::format::{format_count, format_currency};
use leadplan_core::model::FormField;

/// Steps moved by PageUp/PageDown
const LARGE_STEP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderUnit {
    Currency,
    Count,
}

/// A bounded numeric input moved in fixed steps
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub field: FormField,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: SliderUnit,
    value: f64,
}

impl Slider {
    pub fn new(field: FormField, min: f64, max: f64, step: f64, value: f64, unit: SliderUnit) -> Self {
        Self {
            field,
            min,
            max,
            step,
            unit,
            value: value.clamp(min, max),
        }
    }

    pub fn currency(field: FormField, min: f64, max: f64, step: f64, value: f64) -> Self {
        Self::new(field, min, max, step, value, SliderUnit::Currency)
    }

    pub fn count(field: FormField, min: f64, max: f64, value: f64) -> Self {
        Self::new(field, min, max, 1.0, value, SliderUnit::Count)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    fn nudge(&mut self, steps: f64) {
        self.set(self.value + steps * self.step);
    }

    /// Position within the range, 0.0 to 1.0
    pub fn ratio(&self) -> f64 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    pub fn display(&self) -> String {
        match self.unit {
            SliderUnit::Currency => format_currency(self.value),
            SliderUnit::Count => format_count(self.value),
        }
    }

    /// Left/Right step, PageUp/PageDown jump, Home/End go to the bounds.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => self.nudge(1.0),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.nudge(-1.0),
            KeyCode::PageUp => self.nudge(LARGE_STEP),
            KeyCode::PageDown => self.nudge(-LARGE_STEP),
            KeyCode::Home => self.set(self.min),
            KeyCode::End => self.set(self.max),
            _ => return false,
        }
        true
    }
}

/// A radio group. Nothing is selected until the user picks an option.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub field: FormField,
    options: Vec<T>,
    selected: Option<usize>,
}

impl<T: Copy + PartialEq> Choice<T> {
    pub fn new(field: FormField, options: impl IntoIterator<Item = T>) -> Self {
        Self {
            field,
            options: options.into_iter().collect(),
            selected: None,
        }
    }

    /// Start with `value` selected, if it is one of the options
    pub fn with_selected(mut self, value: T) -> Self {
        self.select(value);
        self
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn selected(&self) -> Option<T> {
        self.selected.and_then(|i| self.options.get(i).copied())
    }

    pub fn is_selected(&self, value: T) -> bool {
        self.selected() == Some(value)
    }

    pub fn select(&mut self, value: T) {
        if let Some(index) = self.options.iter().position(|o| *o == value) {
            self.selected = Some(index);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    pub fn previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => self.next(),
            KeyCode::Left | KeyCode::Char('h') => self.previous(),
            _ => return false,
        }
        true
    }
}

/// Single-line text input with a cursor counted in characters
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub field: FormField,
    pub required: bool,
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new(field: FormField, required: bool) -> Self {
        Self {
            field,
            required,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => return false,
        }
        true
    }
}

/// Move a focus index forward or back through `len` fields, wrapping
pub fn cycle_focus(focus: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadplan_core::model::CloseRate;

    #[test]
    fn test_slider_clamps_to_range() {
        let mut slider = Slider::currency(FormField::MonthlyBudget, 1_000.0, 2_000.0, 250.0, 1_900.0);
        slider.handle_key(KeyCode::Right);
        assert_eq!(slider.value(), 2_000.0);

        slider.handle_key(KeyCode::PageDown);
        assert_eq!(slider.value(), 1_000.0);

        slider.handle_key(KeyCode::Right);
        assert_eq!(slider.value(), 1_250.0);
        assert_eq!(slider.display(), "$1,250");
        assert!((slider.ratio() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_slider_initial_value_is_clamped() {
        let slider = Slider::count(FormField::CurrentLeads, 0.0, 200.0, 500.0);
        assert_eq!(slider.value(), 200.0);
        assert_eq!(slider.display(), "200");
    }

    #[test]
    fn test_choice_starts_empty_and_wraps() {
        let mut choice = Choice::new(FormField::CloseRate, CloseRate::ALL);
        assert_eq!(choice.selected(), None);

        choice.next();
        assert_eq!(choice.selected(), Some(CloseRate::Low));

        choice.previous();
        assert_eq!(choice.selected(), Some(CloseRate::Excellent));

        choice.next();
        assert_eq!(choice.selected(), Some(CloseRate::Low));

        choice.clear();
        choice.previous();
        assert_eq!(choice.selected(), Some(CloseRate::Excellent));
    }

    #[test]
    fn test_choice_with_selected_ignores_unknown() {
        let choice = Choice::new(FormField::CloseRate, [CloseRate::Low, CloseRate::High])
            .with_selected(CloseRate::Typical);
        assert_eq!(choice.selected(), None);

        let choice = choice.with_selected(CloseRate::High);
        assert!(choice.is_selected(CloseRate::High));
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::new(FormField::Name, true);
        for c in "Jo".chars() {
            field.handle_key(KeyCode::Char(c));
        }
        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Char('é'));
        assert_eq!(field.value(), "éJo");
        assert_eq!(field.cursor(), 1);

        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value(), "éo");

        field.handle_key(KeyCode::End);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "é");

        field.handle_key(KeyCode::Backspace);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_cycle_focus() {
        assert_eq!(cycle_focus(0, 3, true), 1);
        assert_eq!(cycle_focus(2, 3, true), 0);
        assert_eq!(cycle_focus(0, 3, false), 2);
        assert_eq!(cycle_focus(0, 0, true), 0);
    }
}
