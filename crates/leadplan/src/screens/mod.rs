pub mod allocator;
pub mod contact;
pub mod projector;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::components::Component;
use crate::state::forms::{Choice, Slider, TextField};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, field_label_style};

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Width of the label column in form rows
const LABEL_WIDTH: usize = 22;
/// Cells in a slider track
const TRACK_WIDTH: usize = 24;

fn label_span(label: &str, required: bool, focused: bool) -> Span<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let text = if required {
        format!("{marker}{label} *")
    } else {
        format!("{marker}{label}")
    };
    Span::styled(format!("{text:<LABEL_WIDTH$}"), field_label_style(focused))
}

/// `▸ Monthly Budget   $3,000  [██████░░░░░░]`
pub fn slider_line(label: &str, slider: &Slider, focused: bool) -> Line<'static> {
    let filled = (slider.ratio() * TRACK_WIDTH as f64).round() as usize;
    let track = format!(
        "[{}{}]",
        "█".repeat(filled.min(TRACK_WIDTH)),
        "░".repeat(TRACK_WIDTH.saturating_sub(filled))
    );
    let value_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Line::from(vec![
        label_span(label, true, focused),
        Span::styled(format!("{:>9}  ", slider.display()), value_style),
        Span::styled(track, Style::default().fg(HELP_COLOR)),
    ])
}

/// `▸ Industry           ◀ Healthcare ▶`, or a prompt while nothing is picked
pub fn choice_line<T: Copy + PartialEq>(
    label: &str,
    choice: &Choice<T>,
    focused: bool,
    name: impl Fn(T) -> &'static str,
) -> Line<'static> {
    let value = match choice.selected() {
        Some(v) => Span::styled(
            name(v).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("Select…", Style::default().fg(HELP_COLOR)),
    };
    let arrow_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(HELP_COLOR)
    };

    Line::from(vec![
        label_span(label, true, focused),
        Span::styled("◀ ", arrow_style),
        value,
        Span::styled(" ▶", arrow_style),
    ])
}

/// Text input row with a block cursor when focused
pub fn text_line(label: &str, field: &TextField, focused: bool) -> Line<'static> {
    let mut spans = vec![label_span(label, field.required, focused)];
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

    let chars: Vec<char> = field.value().chars().collect();
    if !focused {
        spans.push(Span::raw(field.value().to_string()));
        return Line::from(spans);
    }

    for (i, c) in chars.iter().enumerate() {
        if i == field.cursor() {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }
    if field.cursor() >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }
    Line::from(spans)
}

/// `[x]` style checkbox row
pub fn toggle_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        label_span(label, false, focused),
        Span::styled(mark, field_label_style(focused)),
    ])
}
