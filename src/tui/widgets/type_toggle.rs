//! Credit/debit toggle widget
//!
//! Two side-by-side buttons. The selected one is filled in its color (green
//! for income, red for outcome); the hovered one gets a bold border while the
//! toggle has focus.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::models::TransactionType;

/// Renders the toggle for a given selection
pub struct TransactionTypeToggle {
    selected: Option<TransactionType>,
    hovered: TransactionType,
    focused: bool,
}

impl TransactionTypeToggle {
    pub fn new(selected: Option<TransactionType>) -> Self {
        Self {
            selected,
            hovered: selected.unwrap_or(TransactionType::Credit),
            focused: false,
        }
    }

    /// Option under the keyboard cursor
    pub fn hovered(mut self, hovered: TransactionType) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn accent(transaction_type: TransactionType) -> Color {
    match transaction_type {
        TransactionType::Credit => Color::Green,
        TransactionType::Debit => Color::Red,
    }
}

fn arrow(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Credit => "↑",
        TransactionType::Debit => "↓",
    }
}

impl Widget for TransactionTypeToggle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (option, half) in TransactionType::ALL.into_iter().zip(halves.iter()) {
            let is_active = self.selected == Some(option);
            let is_hovered = self.focused && self.hovered == option;

            let mut border_style = Style::default().fg(if is_active {
                accent(option)
            } else {
                Color::DarkGray
            });
            if is_hovered {
                border_style = border_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }

            let text_style = if is_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(accent(option))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(accent(option))
            };

            Paragraph::new(format!("{} {}", arrow(option), option.label()))
                .alignment(Alignment::Center)
                .style(text_style)
                .block(Block::default().borders(Borders::ALL).border_style(border_style))
                .render(*half, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(toggle: TransactionTypeToggle) -> String {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        toggle.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_both_labels() {
        let text = render_to_string(TransactionTypeToggle::new(None));
        assert!(text.contains("Income"));
        assert!(text.contains("Outcome"));
    }

    #[test]
    fn test_only_selected_option_is_filled() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        TransactionTypeToggle::new(Some(TransactionType::Debit)).render(area, &mut buf);

        let credit_bg = buf[(10, 1)].bg;
        let debit_bg = buf[(30, 1)].bg;
        assert_eq!(debit_bg, Color::Red);
        assert_ne!(credit_bg, Color::Green);
    }
}
