//! Register screen
//!
//! The transaction form: name and amount inputs with inline errors, the
//! credit/debit toggle, the category button that opens the picker, and the
//! Send button. Text lives here; selections live in the draft composer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::format_record_summary;
use crate::models::TransactionType;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::RegisterLayout;
use crate::tui::widgets::{TextInput, TransactionTypeToggle};
use crate::validation::{Field, FieldErrors};

/// Records shown under the form
const HISTORY_ROWS: usize = 5;

/// Focusable controls, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Amount,
    TransactionType,
    Category,
    Send,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::TransactionType,
            Self::TransactionType => Self::Category,
            Self::Category => Self::Send,
            Self::Send => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Send,
            Self::Amount => Self::Name,
            Self::TransactionType => Self::Amount,
            Self::Category => Self::TransactionType,
            Self::Send => Self::Category,
        }
    }

    /// Whether typed characters go into a text input
    pub fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::Amount)
    }

    fn validated_field(self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Amount => Some(Field::Amount),
            _ => None,
        }
    }
}

/// Form-layer state of the Register screen
#[derive(Debug, Clone)]
pub struct RegisterFormState {
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub focused_field: RegisterField,
    /// Option under the cursor while the toggle has focus
    pub toggle_hover: TransactionType,
    /// Errors from the last submit attempt
    pub field_errors: FieldErrors,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFormState {
    pub fn new() -> Self {
        let mut state = Self {
            name_input: TextInput::new().label("Name").placeholder("Name"),
            amount_input: TextInput::new().label("Amount").placeholder("Price"),
            focused_field: RegisterField::Name,
            toggle_hover: TransactionType::Credit,
            field_errors: FieldErrors::new(),
        };
        state.set_focus(RegisterField::Name);
        state
    }

    pub fn set_focus(&mut self, field: RegisterField) {
        self.focused_field = field;
        self.name_input.focused = field == RegisterField::Name;
        self.amount_input.focused = field == RegisterField::Amount;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// The text input with focus, if a text field is focused
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            RegisterField::Name => Some(&mut self.name_input),
            RegisterField::Amount => Some(&mut self.amount_input),
            _ => None,
        }
    }
}

/// Render the Register screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = RegisterLayout::new(area);
    let form = &app.register_form;
    let focused = form.focused_field;

    let header = Paragraph::new("Register")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(header, layout.header);

    frame.render_widget(&form.name_input, layout.name);
    render_field_error(frame, layout.name_error, form.field_errors.message(Field::Name));

    frame.render_widget(&form.amount_input, layout.amount);
    render_field_error(frame, layout.amount_error, form.field_errors.message(Field::Amount));

    let toggle = TransactionTypeToggle::new(app.composer.transaction_type())
        .hovered(form.toggle_hover)
        .focused(focused == RegisterField::TransactionType);
    frame.render_widget(toggle, layout.toggle);

    let category = app.composer.category();
    let category_style = if category.is_sentinel() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    render_button(
        frame,
        layout.category,
        Line::from(vec![
            Span::styled(category.name.clone(), category_style),
            Span::styled("  ▾", Style::default().fg(Color::DarkGray)),
        ]),
        focused == RegisterField::Category,
        Alignment::Left,
    );

    render_button(
        frame,
        layout.send,
        Line::from(Span::styled(
            "Send",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        focused == RegisterField::Send,
        Alignment::Center,
    );

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Select  "),
        Span::styled("[Ctrl+s]", Style::default().fg(Color::Green)),
        Span::raw(" Send  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Back"),
    ]);
    frame.render_widget(Paragraph::new(hints), layout.hints);

    render_history(frame, app, layout.history);
}

fn render_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!("{:>10}{}", "", message),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: Line, focused: bool, alignment: Alignment) {
    let border = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(label)
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    if area.height < 3 {
        return;
    }

    let records = app.composer.sink().records();
    let items: Vec<ListItem> = records
        .iter()
        .rev()
        .take(HISTORY_ROWS)
        .map(|record| {
            let color = match record.transaction_type {
                TransactionType::Credit => Color::Green,
                TransactionType::Debit => Color::Red,
            };
            ListItem::new(Line::from(Span::styled(
                format_record_summary(record, &app.settings.currency_symbol),
                Style::default().fg(color),
            )))
        })
        .collect();

    let block = Block::default()
        .title(format!(" Registered this session ({}) ", records.len()))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(List::new(items).block(block), area);
}

/// Handle key input on the Register screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        app.submit_draft();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.leave_register();
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.register_form.next_field();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.register_form.prev_field();
            return;
        }
        _ => {}
    }

    let field = app.register_form.focused_field;

    if field.is_text() {
        if key.code == KeyCode::Enter {
            app.register_form.next_field();
            return;
        }
        let form = &mut app.register_form;
        let edited = form.focused_input().is_some_and(|input| input.handle_key(key));
        if edited {
            if let Some(validated) = field.validated_field() {
                form.field_errors.clear_field(validated);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => match field {
            RegisterField::TransactionType => handle_toggle_key(app, key),
            RegisterField::Category => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    app.open_category_picker();
                }
            }
            RegisterField::Send => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    app.submit_draft();
                }
            }
            RegisterField::Name | RegisterField::Amount => {}
        },
    }
}

fn handle_toggle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.register_form.toggle_hover = TransactionType::Credit;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.register_form.toggle_hover = TransactionType::Debit;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let hovered = app.register_form.toggle_hover;
            app.composer.select_transaction_type(hovered);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_cycles() {
        let mut field = RegisterField::Name;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, RegisterField::Name);
        assert_eq!(RegisterField::Name.prev(), RegisterField::Send);
    }

    #[test]
    fn test_focus_tracks_inputs() {
        let mut form = RegisterFormState::new();
        assert!(form.name_input.focused);

        form.next_field();
        assert!(!form.name_input.focused);
        assert!(form.amount_input.focused);

        form.next_field();
        assert!(form.focused_input().is_none());
    }
}
