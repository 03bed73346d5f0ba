//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::auth::AuthContext;
use crate::config::settings::Settings;
use crate::display::format_record_summary;
use crate::models::CategoryRegistry;
use crate::services::{DraftComposer, SelectorMessage, SessionSink, SubmitError};
use crate::validation::Field;

use super::dialogs::category_select::CategorySelectState;
use super::views::register::{RegisterField, RegisterFormState};
use super::views::sign_in::{SignInProvider, SignInState};
use super::widgets::{AlertInfo, Notification, NotificationQueue};

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SignIn,
    Register,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::Register => "Register",
        }
    }
}

/// Dialog drawn over the current screen (if any)
///
/// The category picker is not listed here: its visibility belongs to the
/// draft composer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Alert(AlertInfo),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Who is signed in
    pub auth: &'a AuthContext,

    /// Categories offered by the picker
    pub registry: &'a CategoryRegistry,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current screen
    pub screen: Screen,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Sign-in screen state
    pub sign_in: SignInState,

    /// Text inputs, focus and inline errors of the Register screen
    pub register_form: RegisterFormState,

    /// Selection state and submit gate of the current draft
    pub composer: DraftComposer<SessionSink>,

    /// Highlighted entry of the category picker
    pub category_select: CategorySelectState,

    /// Toasts
    pub notifications: NotificationQueue,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, auth: &'a AuthContext, registry: &'a CategoryRegistry) -> Self {
        Self {
            settings,
            auth,
            registry,
            should_quit: false,
            screen: Screen::default(),
            active_dialog: ActiveDialog::default(),
            sign_in: SignInState::default(),
            register_form: RegisterFormState::new(),
            composer: DraftComposer::with_sink(SessionSink::new()),
            category_select: CategorySelectState::default(),
            notifications: NotificationQueue::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Mock sign-in: no credentials, just move on to the Register screen
    pub fn sign_in(&mut self, provider: SignInProvider) {
        tracing::info!(user = %self.auth.user().id, ?provider, "signed in");
        let message = format!(
            "Signed in as {} with {}",
            self.auth.user().name,
            provider.label()
        );
        self.notifications.push(Notification::info(message.clone()));
        self.set_status(message);
        self.enter_register();
    }

    /// Show the Register screen with a fresh draft
    pub fn enter_register(&mut self) {
        self.composer.reset();
        self.register_form = RegisterFormState::new();
        self.screen = Screen::Register;
    }

    /// Leave the Register screen, discarding the draft
    pub fn leave_register(&mut self) {
        self.composer.reset();
        self.register_form = RegisterFormState::new();
        self.screen = Screen::SignIn;
        self.clear_status();
    }

    /// Show the category picker, highlighting the current category
    pub fn open_category_picker(&mut self) {
        self.category_select
            .open_at(self.registry, self.composer.category());
        self.composer.open_category_modal();
    }

    /// Forward messages from the category picker to the composer
    pub fn dispatch_selector_messages(&mut self, messages: Vec<SelectorMessage>) {
        for message in messages {
            if let SelectorMessage::CategoryChosen(ref category) = message {
                self.set_status(format!("Category: {}", category.name));
            }
            self.composer.handle_selector_message(message);
        }
    }

    /// Submit the draft currently on the Register screen
    pub fn submit_draft(&mut self) {
        let name = self.register_form.name_input.value().to_string();
        let amount = self.register_form.amount_input.value().to_string();

        match self.composer.submit(&name, Some(&amount)) {
            Ok(record) => {
                let summary = format_record_summary(&record, &self.settings.currency_symbol);
                self.register_form = RegisterFormState::new();
                self.notifications
                    .push(Notification::success(format!("Registered {}", summary)));
                self.set_status("Transaction registered");
            }
            Err(SubmitError::Fields(errors)) => {
                let first = if errors.get(Field::Name).is_some() {
                    RegisterField::Name
                } else {
                    RegisterField::Amount
                };
                let plural = if errors.len() == 1 { "field needs" } else { "fields need" };
                self.notifications.push(Notification::error(format!(
                    "{} {} attention",
                    errors.len(),
                    plural
                )));
                self.register_form.field_errors = errors;
                self.register_form.set_focus(first);
            }
            Err(SubmitError::MissingSelection(missing)) => {
                self.register_form.field_errors.clear_all();
                self.open_dialog(ActiveDialog::Alert(AlertInfo::from_missing_selection(
                    missing,
                )));
            }
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}
