//! finance-tui - Terminal personal finance register
//!
//! This library provides the core of the finance-tui application: a
//! transaction draft composer with field validation, a category registry and
//! picker, a credit/debit toggle, and a mock authentication context, plus the
//! ratatui front end and clap commands built on top of them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Categories, transaction types, records and user profiles
//! - `validation`: Name and amount field validation
//! - `services`: Draft composer and record sinks
//! - `auth`: Mock authentication context
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use finance::models::{Category, TransactionType};
//! use finance::services::DraftComposer;
//!
//! let mut composer = DraftComposer::new();
//! composer.select_transaction_type(TransactionType::Debit);
//! composer.on_category_chosen(Category::new("food", "Food"));
//!
//! let record = composer.submit("Lunch", Some("12.50")).unwrap();
//! assert_eq!(record.category, "food");
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod validation;

pub use error::{FinanceError, FinanceResult};
