//! Display formatting module
//!
//! Formats amounts, categories, records and profiles for terminal output.

pub mod amount;
pub mod category;
pub mod record;

pub use amount::format_amount;
pub use category::format_category_table;
pub use record::{format_profile, format_record_summary};
