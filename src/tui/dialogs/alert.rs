//! Alert dialog
//!
//! Blocking message shown when a submit attempt is missing a selection.

use ratatui::Frame;

use crate::tui::widgets::{alert_area, AlertDialog, AlertInfo};

/// Render an alert over the whole frame
pub fn render(frame: &mut Frame, info: &AlertInfo) {
    let area = alert_area(frame.area());
    frame.render_widget(AlertDialog::new(info), area);
}
