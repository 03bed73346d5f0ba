//! Core data models for finance-tui
//!
//! These are the values the Register workflow passes around: categories and
//! their registry, the credit/debit transaction type, the emitted record, and
//! the signed-in user's profile.

pub mod category;
pub mod record;
pub mod transaction_type;
pub mod user;

pub use category::{Category, CategoryRegistry, SENTINEL_CATEGORY_KEY};
pub use record::TransactionRecord;
pub use transaction_type::TransactionType;
pub use user::UserProfile;
