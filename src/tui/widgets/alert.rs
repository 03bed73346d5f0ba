//! Blocking alert widget
//!
//! Used when a submit attempt is missing a selection. Unlike field errors,
//! which sit inline under their input, an alert covers the form until the
//! user dismisses it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::services::MissingSelection;

/// Content of an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertInfo {
    pub title: String,
    pub details: String,
    pub suggestions: Vec<String>,
}

impl AlertInfo {
    /// Alert for a submit attempt that lacks a selection
    pub fn from_missing_selection(missing: MissingSelection) -> Self {
        let suggestion = match missing {
            MissingSelection::TransactionType => {
                "Pick Income or Outcome with ←/→ and Enter on the type toggle"
            }
            MissingSelection::Category => "Press Enter on the category button to choose one",
        };

        Self {
            title: "Incomplete transaction".to_string(),
            details: missing.to_string(),
            suggestions: vec![suggestion.to_string()],
        }
    }
}

/// Widget for rendering an alert
pub struct AlertDialog<'a> {
    info: &'a AlertInfo,
}

impl<'a> AlertDialog<'a> {
    pub fn new(info: &'a AlertInfo) -> Self {
        Self { info }
    }
}

impl<'a> Widget for AlertDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", self.info.title))
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.info.details.as_str())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let lines: Vec<Line> = self
            .info
            .suggestions
            .iter()
            .map(|s| Line::from(vec![Span::raw("  - "), Span::raw(s.as_str())]))
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new("Press Enter or Esc to continue")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Area for an alert, centered in `parent`
pub fn alert_area(parent: Rect) -> Rect {
    let width = (parent.width * 60 / 100).clamp(30, 70).min(parent.width);
    let height = 10.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
