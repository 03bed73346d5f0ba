//! Credit/debit transaction type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a transaction
///
/// A draft holds `Option<TransactionType>`; `None` means no direction has been
/// picked yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Credit,
    /// Money going out
    Debit,
}

impl TransactionType {
    /// Both options, in toggle order
    pub const ALL: [TransactionType; 2] = [TransactionType::Credit, TransactionType::Debit];

    /// Wire name used in the emitted record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// Label on the toggle button
    pub fn label(&self) -> &'static str {
        match self {
            Self::Credit => "Income",
            Self::Debit => "Outcome",
        }
    }

    /// The other option
    pub fn other(self) -> Self {
        match self {
            Self::Credit => Self::Debit,
            Self::Debit => Self::Credit,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "income" | "up" => Ok(Self::Credit),
            "debit" | "outcome" | "down" => Ok(Self::Debit),
            other => Err(format!(
                "Unknown transaction type '{}' (expected credit or debit)",
                other
            )),
        }
    }
}
