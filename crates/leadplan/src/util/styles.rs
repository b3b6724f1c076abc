//! Common styling utilities for TUI components

use leadplan_core::model::RecommendationCategory;
use leadplan_core::ratio::Ratio;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the focused field or panel
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Standard color for warning/caution values
pub const WARNING_COLOR: Color = Color::Yellow;

/// Create a block with a title that shows focused state via border color.
///
/// # Example
/// ```ignore
/// let block = focused_block("Inputs", is_focused);
/// frame.render_widget(Paragraph::new("...").block(block), area);
/// ```
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text.
pub fn block_with_help(title: &str, help_text: &str) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());

    if !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Label style for a form row; the focused row is highlighted.
pub fn field_label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Get the appropriate color for a monetary value (green for positive, red for negative).
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Color for a percent change. For costs a decrease is the good direction.
pub fn change_color(change: Ratio, lower_is_better: bool) -> Color {
    match change.value() {
        None => HELP_COLOR,
        Some(v) if v == 0.0 => Color::Gray,
        Some(v) if (v < 0.0) == lower_is_better => POSITIVE_COLOR,
        Some(_) => NEGATIVE_COLOR,
    }
}

pub fn category_color(category: RecommendationCategory) -> Color {
    match category {
        RecommendationCategory::Warning => WARNING_COLOR,
        RecommendationCategory::Success => POSITIVE_COLOR,
        RecommendationCategory::Info => HEADER_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Inputs", true);
        assert!(format!("{:?}", block).contains("Inputs"));
    }

    #[test]
    fn test_value_color() {
        assert_eq!(value_color(100.0), POSITIVE_COLOR);
        assert_eq!(value_color(-100.0), NEGATIVE_COLOR);
        assert_eq!(value_color(0.0), POSITIVE_COLOR);
    }

    #[test]
    fn test_change_color() {
        assert_eq!(change_color(Ratio::Defined(25.0), false), POSITIVE_COLOR);
        assert_eq!(change_color(Ratio::Defined(-50.0), true), POSITIVE_COLOR);
        assert_eq!(change_color(Ratio::Defined(40.0), true), NEGATIVE_COLOR);
        assert_eq!(change_color(Ratio::Undefined, false), HELP_COLOR);
    }

    #[test]
    fn test_category_color() {
        assert_eq!(category_color(RecommendationCategory::Warning), WARNING_COLOR);
        assert_eq!(category_color(RecommendationCategory::Success), POSITIVE_COLOR);
    }
}
