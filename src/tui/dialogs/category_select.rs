//! Category picker dialog
//!
//! Full-height modal listing the category registry. It never hides itself:
//! key handling only produces [`SelectorMessage`]s, and the composer decides
//! what to do with them. Choosing an entry yields `CategoryChosen` followed by
//! `CloseRequested`; backing out yields only `CloseRequested`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Category, CategoryRegistry};
use crate::services::SelectorMessage;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Entries skipped by PageUp/PageDown
const PAGE: usize = 5;

/// Highlighted entry of the picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelectState {
    pub highlighted: usize,
}

impl CategorySelectState {
    /// Highlight `current` if it is registered, else the first entry
    pub fn open_at(&mut self, registry: &CategoryRegistry, current: &Category) {
        self.highlighted = registry.position_of(current).unwrap_or(0);
    }

    pub fn next(&mut self, len: usize) {
        self.highlighted = (self.highlighted + 1).min(len.saturating_sub(1));
    }

    pub fn prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn page_down(&mut self, len: usize) {
        self.highlighted = (self.highlighted + PAGE).min(len.saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(PAGE);
    }

    pub fn first(&mut self) {
        self.highlighted = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.highlighted = len.saturating_sub(1);
    }

    /// The highlighted category
    pub fn highlighted_category<'r>(&self, registry: &'r CategoryRegistry) -> Option<&'r Category> {
        registry.get(self.highlighted)
    }
}

/// Translate a key press into messages for the composer
pub fn handle_key(
    state: &mut CategorySelectState,
    registry: &CategoryRegistry,
    key: KeyEvent,
) -> Vec<SelectorMessage> {
    let len = registry.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.next(len),
        KeyCode::Char('k') | KeyCode::Up => state.prev(),
        KeyCode::PageDown => state.page_down(len),
        KeyCode::PageUp => state.page_up(),
        KeyCode::Char('g') | KeyCode::Home => state.first(),
        KeyCode::Char('G') | KeyCode::End => state.last(len),

        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(category) = state.highlighted_category(registry) {
                return vec![
                    SelectorMessage::CategoryChosen(category.clone()),
                    SelectorMessage::CloseRequested,
                ];
            }
        }

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
            return vec![SelectorMessage::CloseRequested];
        }

        _ => {}
    }

    Vec::new()
}

/// Render the category picker
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Category ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // List
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let current = app.composer.category();

    if app.registry.is_empty() {
        let text = Paragraph::new("No categories available").style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .registry
            .all()
            .iter()
            .map(|cat| {
                let marker = if cat == current { "✓ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(cat.name.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(app.category_select.highlighted));

        frame.render_stateful_widget(list, chunks[0], &mut state);
    }

    let hints = Line::from(vec![
        Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
        Span::raw(" Move  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Choose  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Back"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_choose_emits_chosen_then_close() {
        let registry = CategoryRegistry::default();
        let mut state = CategorySelectState::default();

        assert!(handle_key(&mut state, &registry, key(KeyCode::Down)).is_empty());
        let messages = handle_key(&mut state, &registry, key(KeyCode::Enter));

        assert_eq!(
            messages,
            vec![
                SelectorMessage::CategoryChosen(Category::new("food", "Food")),
                SelectorMessage::CloseRequested,
            ]
        );
    }

    #[test]
    fn test_back_only_requests_close() {
        let registry = CategoryRegistry::default();
        let mut state = CategorySelectState::default();

        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Backspace] {
            assert_eq!(
                handle_key(&mut state, &registry, key(code)),
                vec![SelectorMessage::CloseRequested]
            );
        }
    }

    #[test]
    fn test_navigation_is_clamped() {
        let registry = CategoryRegistry::default();
        let mut state = CategorySelectState::default();

        handle_key(&mut state, &registry, key(KeyCode::Up));
        assert_eq!(state.highlighted, 0);

        handle_key(&mut state, &registry, key(KeyCode::PageDown));
        handle_key(&mut state, &registry, key(KeyCode::PageDown));
        assert_eq!(state.highlighted, registry.len() - 1);

        handle_key(&mut state, &registry, key(KeyCode::Char('g')));
        assert_eq!(state.highlighted, 0);
        handle_key(&mut state, &registry, key(KeyCode::End));
        assert_eq!(state.highlighted, registry.len() - 1);
    }

    #[test]
    fn test_empty_registry_never_chooses() {
        let registry = CategoryRegistry::new(Vec::new());
        let mut state = CategorySelectState::default();
        assert!(handle_key(&mut state, &registry, key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn test_open_at_sentinel_highlights_first() {
        let registry = CategoryRegistry::default();
        let mut state = CategorySelectState { highlighted: 4 };
        state.open_at(&registry, &Category::sentinel());
        assert_eq!(state.highlighted, 0);
    }
}
