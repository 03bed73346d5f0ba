//! TUI Views module
//!
//! The sign-in and register screens plus the status bar. Overlays are drawn
//! last: help, then the category picker, then the alert, then toasts.

pub mod register;
pub mod sign_in;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Screen};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{toast_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    match app.screen {
        Screen::SignIn => sign_in::render(frame, app, layout.main),
        Screen::Register => register::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app);
    }

    if app.composer.is_category_modal_open() {
        dialogs::category_select::render(frame, app);
    }

    if let ActiveDialog::Alert(info) = &app.active_dialog {
        dialogs::alert::render(frame, info);
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
