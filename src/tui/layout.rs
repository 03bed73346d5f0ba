//! Layout definitions for the TUI
//!
//! Screens draw into a single column above a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Screen content
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Layout of the Register screen's form column
pub struct RegisterLayout {
    pub header: Rect,
    pub name: Rect,
    pub name_error: Rect,
    pub amount: Rect,
    pub amount_error: Rect,
    pub toggle: Rect,
    pub category: Rect,
    pub send: Rect,
    pub hints: Rect,
    /// Records registered this session
    pub history: Rect,
}

impl RegisterLayout {
    pub fn new(area: Rect) -> Self {
        let column = centered_column(60, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Name
                Constraint::Length(1), // Name error
                Constraint::Length(1), // Amount
                Constraint::Length(1), // Amount error
                Constraint::Length(3), // Type toggle
                Constraint::Length(3), // Category button
                Constraint::Length(3), // Send button
                Constraint::Length(1), // Hints
                Constraint::Min(0),    // History
            ])
            .split(column);

        Self {
            header: chunks[0],
            name: chunks[1],
            name_error: chunks[2],
            amount: chunks[3],
            amount_error: chunks[4],
            toggle: chunks[5],
            category: chunks[6],
            send: chunks[7],
            hints: chunks[8],
            history: chunks[9],
        }
    }
}

/// A column at most `width` wide, centered horizontally in `r`
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column() {
        let col = centered_column(60, Rect::new(0, 0, 100, 30));
        assert_eq!(col, Rect::new(20, 0, 60, 30));

        let col = centered_column(60, Rect::new(0, 0, 40, 30));
        assert_eq!(col, Rect::new(0, 0, 40, 30));
    }

    #[test]
    fn test_register_layout_stacks_controls() {
        let layout = RegisterLayout::new(Rect::new(0, 0, 80, 40));
        assert!(layout.name.y < layout.amount.y);
        assert!(layout.amount.y < layout.toggle.y);
        assert!(layout.toggle.y < layout.category.y);
        assert!(layout.category.y < layout.send.y);
        assert_eq!(layout.toggle.height, 3);
    }
}
