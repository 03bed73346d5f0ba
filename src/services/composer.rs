//! Draft composer
//!
//! Owns the selection state of the transaction being registered (type,
//! category, category-picker visibility) and decides whether a submit attempt
//! produces a record. Raw text is never stored here; it is passed in at
//! submit time.

use thiserror::Error;

use crate::models::{Category, TransactionRecord, TransactionType};
use crate::validation::{self, FieldErrors};

use super::sink::{LogSink, RecordSink};

/// Visibility of the category picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Messages the category picker sends up to the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorMessage {
    /// The user picked a category
    CategoryChosen(Category),
    /// The picker asks to be dismissed
    CloseRequested,
}

/// A selection that must be made before a draft can be submitted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSelection {
    #[error("Select a transaction type")]
    TransactionType,
    #[error("Select a category")]
    Category,
}

/// Why a submit attempt did not produce a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// One or both text fields failed validation
    #[error("{0}")]
    Fields(#[from] FieldErrors),

    /// Fields are valid but a selection is missing
    #[error("{0}")]
    MissingSelection(#[from] MissingSelection),
}

impl SubmitError {
    /// Field errors, if this failure came from validation
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Fields(errors) => Some(errors),
            Self::MissingSelection(_) => None,
        }
    }

    /// The missing selection, if the fields themselves were valid
    pub fn missing_selection(&self) -> Option<MissingSelection> {
        match self {
            Self::Fields(_) => None,
            Self::MissingSelection(which) => Some(*which),
        }
    }
}

/// Selection state and submit gate for one Register screen visit
#[derive(Debug)]
pub struct DraftComposer<S: RecordSink = LogSink> {
    transaction_type: Option<TransactionType>,
    category: Category,
    category_modal: ModalState,
    sink: S,
}

impl DraftComposer<LogSink> {
    /// Composer that logs submitted records
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }
}

impl Default for DraftComposer<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordSink> DraftComposer<S> {
    /// Composer that emits submitted records to `sink`
    pub fn with_sink(sink: S) -> Self {
        Self {
            transaction_type: None,
            category: Category::sentinel(),
            category_modal: ModalState::Closed,
            sink,
        }
    }

    /// Selected transaction type, `None` while unset
    pub fn transaction_type(&self) -> Option<TransactionType> {
        self.transaction_type
    }

    /// Current category (the sentinel until one is chosen)
    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn category_modal(&self) -> ModalState {
        self.category_modal
    }

    pub fn is_category_modal_open(&self) -> bool {
        self.category_modal == ModalState::Open
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Select credit or debit
    pub fn select_transaction_type(&mut self, transaction_type: TransactionType) {
        if self.transaction_type != Some(transaction_type) {
            tracing::debug!(%transaction_type, "transaction type selected");
        }
        self.transaction_type = Some(transaction_type);
    }

    pub fn open_category_modal(&mut self) {
        tracing::debug!("category picker opened");
        self.category_modal = ModalState::Open;
    }

    /// The only way the picker becomes hidden
    pub fn close_category_modal(&mut self) {
        tracing::debug!("category picker closed");
        self.category_modal = ModalState::Closed;
    }

    /// Replace the current category. Does not close the picker.
    pub fn on_category_chosen(&mut self, category: Category) {
        tracing::debug!(category = %category.key, "category chosen");
        self.category = category;
    }

    /// Apply a message from the category picker
    pub fn handle_selector_message(&mut self, message: SelectorMessage) {
        match message {
            SelectorMessage::CategoryChosen(category) => self.on_category_chosen(category),
            SelectorMessage::CloseRequested => self.close_category_modal(),
        }
    }

    /// Whether a submit with these inputs would produce a record
    pub fn is_submittable(&self, raw_name: &str, raw_amount: Option<&str>) -> bool {
        self.check(raw_name, raw_amount).is_ok()
    }

    /// Try to turn the current draft into a record
    ///
    /// Checks run in a fixed order and stop at the first failing stage:
    /// field validation, then transaction type, then category. On success the
    /// record goes to the sink and the composer returns to its initial state.
    pub fn submit(
        &mut self,
        raw_name: &str,
        raw_amount: Option<&str>,
    ) -> Result<TransactionRecord, SubmitError> {
        let record = match self.check(raw_name, raw_amount) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(error = %e, "submit rejected");
                return Err(e);
            }
        };

        self.sink.emit(&record);
        self.reset();
        Ok(record)
    }

    /// Return every selection to its initial value
    pub fn reset(&mut self) {
        self.transaction_type = None;
        self.category = Category::sentinel();
        if self.is_category_modal_open() {
            self.close_category_modal();
        }
    }

    fn check(&self, raw_name: &str, raw_amount: Option<&str>) -> Result<TransactionRecord, SubmitError> {
        let fields = validation::validate(raw_name, raw_amount)?;

        let transaction_type = self
            .transaction_type
            .ok_or(MissingSelection::TransactionType)?;

        if self.category.is_sentinel() {
            return Err(MissingSelection::Category.into());
        }

        Ok(TransactionRecord {
            name: fields.name,
            amount: fields.amount,
            transaction_type,
            category: self.category.key.clone(),
        })
    }
}
