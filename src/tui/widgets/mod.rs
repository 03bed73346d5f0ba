//! Reusable widgets for the TUI

pub mod alert;
pub mod input;
pub mod notification;
pub mod type_toggle;

pub use alert::{alert_area, AlertDialog, AlertInfo};
pub use input::TextInput;
pub use notification::{toast_area, Notification, NotificationQueue, NotificationType, NotificationWidget};
pub use type_toggle::TransactionTypeToggle;
