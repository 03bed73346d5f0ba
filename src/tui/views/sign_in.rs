//! Sign-in screen
//!
//! Title, tagline and two social sign-in buttons. Authentication is mocked:
//! either button signs in as the configured profile.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_column;

/// Sign-in buttons, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInProvider {
    Google,
    Apple,
}

impl SignInProvider {
    pub const ALL: [SignInProvider; 2] = [SignInProvider::Google, SignInProvider::Apple];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Apple => "Apple",
        }
    }
}

/// Which button is highlighted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignInState {
    pub selected: usize,
}

impl SignInState {
    pub fn provider(&self) -> SignInProvider {
        SignInProvider::ALL[self.selected % SignInProvider::ALL.len()]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % SignInProvider::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + SignInProvider::ALL.len() - 1) % SignInProvider::ALL.len();
    }
}

/// Render the sign-in screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let header_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "finance",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Control your finances",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "in a very simple way",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Sign in with one of the accounts below",
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(header_lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(header, chunks[0]);

    let footer = centered_column(40, chunks[1]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Google
            Constraint::Length(3), // Apple
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Identity
            Constraint::Min(0),
        ])
        .split(footer);

    for (i, provider) in SignInProvider::ALL.iter().enumerate() {
        let selected = app.sign_in.selected == i;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let border = if selected { Color::Cyan } else { Color::DarkGray };

        let button = Paragraph::new(format!("Sign in with {}", provider.label()))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(button, rows[1 + i]);
    }

    let identity = Paragraph::new(format!("Mock account: {}", app.auth.user()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(identity, rows[4]);
}

/// Handle key input on the sign-in screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.sign_in.next(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.sign_in.prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let provider = app.sign_in.provider();
            app.sign_in(provider);
        }
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut state = SignInState::default();
        assert_eq!(state.provider(), SignInProvider::Google);
        state.next();
        assert_eq!(state.provider(), SignInProvider::Apple);
        state.next();
        assert_eq!(state.provider(), SignInProvider::Google);
        state.prev();
        assert_eq!(state.provider(), SignInProvider::Apple);
    }
}
