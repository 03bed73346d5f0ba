//! Service layer for finance-tui
//!
//! Business logic that sits between the models and the user interfaces: the
//! draft composer that gates transaction submission, and the sinks that
//! receive finished records.

pub mod composer;
pub mod sink;

pub use composer::{DraftComposer, MissingSelection, ModalState, SelectorMessage, SubmitError};
pub use sink::{LogSink, RecordSink, SessionSink};
