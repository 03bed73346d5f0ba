//! Event handler for the TUI
//!
//! Routes keyboard events to the topmost layer: the alert, then the category
//! picker, then the help dialog, then the current screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, Screen};
use super::dialogs::category_select;
use super::event::Event;
use super::views::{register, sign_in};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if matches!(app.active_dialog, ActiveDialog::Alert(_)) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.close_dialog();
        }
        return Ok(());
    }

    if app.composer.is_category_modal_open() {
        let messages = category_select::handle_key(&mut app.category_select, app.registry, key);
        app.dispatch_selector_messages(messages);
        return Ok(());
    }

    if app.active_dialog == ActiveDialog::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.close_dialog();
        }
        return Ok(());
    }

    match app.screen {
        Screen::SignIn => sign_in::handle_key(app, key),
        Screen::Register => register::handle_key(app, key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthContext;
    use crate::config::settings::Settings;
    use crate::models::{CategoryRegistry, TransactionType};
    use crate::services::MissingSelection;
    use crate::tui::views::register::RegisterField;
    use crate::tui::widgets::AlertInfo;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_registration_by_keyboard() {
        let settings = Settings::default();
        let auth = AuthContext::default();
        let registry = CategoryRegistry::default();
        let mut app = App::new(&settings, &auth, &registry);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Register);

        type_str(&mut app, "Salary");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2500");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.register_form.focused_field, RegisterField::TransactionType);

        // Income is hovered first
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.composer.transaction_type(), Some(TransactionType::Credit));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.composer.is_category_modal_open());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.composer.is_category_modal_open());
        assert_eq!(app.composer.category().key, "salary");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        let records = app.composer.sink().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Salary");
        assert_eq!(records[0].amount, 2500.0);
        assert_eq!(records[0].category, "salary");
    }

    #[test]
    fn test_typing_q_in_name_does_not_quit() {
        let settings = Settings::default();
        let auth = AuthContext::default();
        let registry = CategoryRegistry::default();
        let mut app = App::new(&settings, &auth, &registry);
        app.enter_register();

        type_str(&mut app, "quiz?");
        assert!(!app.should_quit);
        assert!(!app.has_dialog());
        assert_eq!(app.register_form.name_input.value(), "quiz?");
    }

    #[test]
    fn test_ctrl_c_quits_from_text_field() {
        let settings = Settings::default();
        let auth = AuthContext::default();
        let registry = CategoryRegistry::default();
        let mut app = App::new(&settings, &auth, &registry);
        app.enter_register();

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_alert_swallows_keys_until_dismissed() {
        let settings = Settings::default();
        let auth = AuthContext::default();
        let registry = CategoryRegistry::default();
        let mut app = App::new(&settings, &auth, &registry);
        app.enter_register();

        type_str(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "900");
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
        )
        .unwrap();

        assert_eq!(
            app.active_dialog,
            ActiveDialog::Alert(AlertInfo::from_missing_selection(
                MissingSelection::TransactionType
            ))
        );

        type_str(&mut app, "x");
        assert_eq!(app.register_form.amount_input.value(), "900");

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert_eq!(app.screen, Screen::Register);
    }

    #[test]
    fn test_picker_back_keeps_category() {
        let settings = Settings::default();
        let auth = AuthContext::default();
        let registry = CategoryRegistry::default();
        let mut app = App::new(&settings, &auth, &registry);
        app.enter_register();

        app.register_form.set_focus(RegisterField::Category);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);

        assert!(!app.composer.is_category_modal_open());
        assert!(app.composer.category().is_sentinel());
        assert_eq!(app.screen, Screen::Register);
    }

    #[test]
    fn test_help_toggles_outside_text_fields() {
        let settings = Settings::default();
        let auth = AuthContext::default();
        let registry = CategoryRegistry::default();
        let mut app = App::new(&settings, &auth, &registry);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.has_dialog());
    }
}
