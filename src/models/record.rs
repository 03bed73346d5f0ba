//! The finished transaction record handed to the emission sink

use serde::{Deserialize, Serialize};

use super::TransactionType;

/// A fully validated transaction, assembled on a successful submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub name: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    /// Key of the chosen category
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let record = TransactionRecord {
            name: "Rent".into(),
            amount: 1200.0,
            transaction_type: TransactionType::Credit,
            category: "food".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Rent",
                "amount": 1200.0,
                "transactionType": "credit",
                "category": "food"
            })
        );
    }
}
