//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the current screen

pub mod alert;
pub mod category_select;
pub mod help;
