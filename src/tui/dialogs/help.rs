//! Help dialog
//!
//! Shows the keyboard shortcuts of the current screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.screen))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for a screen
pub fn help_lines(screen: Screen) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Ctrl+c", "Quit application"),
        key_line("q", "Quit (outside text fields)"),
        key_line("?", "Show/hide help (outside text fields)"),
        Line::from(""),
    ];

    match screen {
        Screen::SignIn => {
            lines.push(section("Sign In"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move between accounts"));
            lines.push(key_line("Enter", "Sign in with the highlighted account"));
        }
        Screen::Register => {
            lines.push(section("Register"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Next control"));
            lines.push(key_line("Shift+Tab", "Previous control"));
            lines.push(key_line("←/→", "Move between Income and Outcome"));
            lines.push(key_line("Enter", "Select type / open categories / send"));
            lines.push(key_line("Ctrl+s", "Send from anywhere"));
            lines.push(key_line("Esc", "Discard draft and go back"));
            lines.push(Line::from(""));
            lines.push(section("Category Picker"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move highlight"));
            lines.push(key_line("Enter", "Choose category"));
            lines.push(key_line("Esc", "Close without choosing"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press Esc, Enter or ? to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_register_help_mentions_picker() {
        let all = text(&help_lines(Screen::Register));
        assert!(all.contains("Category Picker"));
        assert!(all.contains("Ctrl+s"));
    }

    #[test]
    fn test_sign_in_help() {
        let all = text(&help_lines(Screen::SignIn));
        assert!(all.contains("Sign in with the highlighted account"));
        assert!(!all.contains("Category Picker"));
    }
}
