//! Terminal User Interface module
//!
//! A two-screen ratatui front end: a mock sign-in screen and the Register
//! screen where transaction drafts are composed and submitted.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
