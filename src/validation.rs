//! Field validation for the transaction draft
//!
//! The draft has two free-text fields, `name` and `amount`. Each is checked by
//! its own pure function; [`validate`] runs both and either returns the typed
//! values or a map holding one error per failing field. There are no
//! cross-field rules.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// A validated text field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Amount,
}

impl Field {
    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Amount => "Amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Missing or blank
    Required,
    /// Not a number
    TypeMismatch,
    /// Zero or negative
    NotPositive,
}

/// A single field's validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, kind: FieldErrorKind) -> Self {
        let message = match (field, kind) {
            (Field::Name, _) => "Name is required",
            (Field::Amount, FieldErrorKind::Required) => "Amount is required",
            (Field::Amount, FieldErrorKind::TypeMismatch) => "Enter a numeric value",
            (Field::Amount, FieldErrorKind::NotPositive) => "Amount must be positive",
        };
        Self {
            field,
            kind,
            message: message.to_string(),
        }
    }
}

/// Per-field errors from one validation run
///
/// A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    /// An empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any previous one for the same field
    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field, error);
    }

    /// Error for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Message for a field, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Drop a field's error (used when the user edits that field)
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in field order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.values()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Typed values of a draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub name: String,
    pub amount: f64,
}

/// Check the name field: anything other than blank passes, unchanged
pub fn validate_name(raw: &str) -> Result<String, FieldErrorKind> {
    if raw.trim().is_empty() {
        return Err(FieldErrorKind::Required);
    }
    Ok(raw.to_string())
}

/// Check the amount field and parse it
///
/// Blank counts as absent. Only finite numbers parse; `inf` and `NaN` are a
/// type mismatch.
pub fn validate_amount(raw: Option<&str>) -> Result<f64, FieldErrorKind> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Err(FieldErrorKind::Required),
        Some(s) => s,
    };

    let amount: f64 = raw.parse().map_err(|_| FieldErrorKind::TypeMismatch)?;
    if !amount.is_finite() {
        return Err(FieldErrorKind::TypeMismatch);
    }
    if amount <= 0.0 {
        return Err(FieldErrorKind::NotPositive);
    }
    Ok(amount)
}

/// Validate both text fields of a draft
pub fn validate(raw_name: &str, raw_amount: Option<&str>) -> Result<ValidatedFields, FieldErrors> {
    let name = validate_name(raw_name);
    let amount = validate_amount(raw_amount);

    match (name, amount) {
        (Ok(name), Ok(amount)) => Ok(ValidatedFields { name, amount }),
        (name, amount) => {
            let mut errors = FieldErrors::new();
            if let Err(kind) = name {
                errors.insert(FieldError::new(Field::Name, kind));
            }
            if let Err(kind) = amount {
                errors.insert(FieldError::new(Field::Amount, kind));
            }
            Err(errors)
        }
    }
}
