//! Record and profile formatting for terminal output

use crate::models::{TransactionRecord, UserProfile};

use super::amount::format_amount;

/// One-line summary of an emitted record
pub fn format_record_summary(record: &TransactionRecord, currency_symbol: &str) -> String {
    format!(
        "{} {} ({}, {})",
        record.name,
        format_amount(record.amount, currency_symbol),
        record.transaction_type.label(),
        record.category
    )
}

/// Multi-line description of the signed-in user
pub fn format_profile(user: &UserProfile) -> String {
    let mut output = String::new();
    output.push_str(&format!("Name:  {}\n", user.name));
    output.push_str(&format!("Email: {}\n", user.email));
    output.push_str(&format!("ID:    {}\n", user.id));
    if let Some(ref photo) = user.photo {
        output.push_str(&format!("Photo: {}\n", photo));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    #[test]
    fn test_record_summary() {
        let record = TransactionRecord {
            name: "Rent".into(),
            amount: 1200.0,
            transaction_type: TransactionType::Debit,
            category: "purchases".into(),
        };
        assert_eq!(
            format_record_summary(&record, "$"),
            "Rent $1,200.00 (Outcome, purchases)"
        );
    }

    #[test]
    fn test_profile_without_photo() {
        let output = format_profile(&UserProfile::default());
        assert!(output.contains("Demo User"));
        assert!(!output.contains("Photo"));
    }
}
