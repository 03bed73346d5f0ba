//! Non-interactive submit
//!
//! Runs one draft through the same composer the Register screen uses.

use clap::Args;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryRegistry, TransactionRecord, TransactionType};
use crate::services::{DraftComposer, RecordSink};

/// Arguments of `finance submit`
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Transaction name
    #[arg(short, long)]
    pub name: String,

    /// Amount (e.g. "1200" or "3.75")
    #[arg(short, long)]
    pub amount: String,

    /// credit or debit (income/outcome also accepted)
    #[arg(short = 't', long = "type")]
    pub transaction_type: Option<String>,

    /// Category key (see `finance categories`)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Build a record from the arguments, emitting it to `composer`'s sink
pub fn run_submit<S: RecordSink>(
    composer: &mut DraftComposer<S>,
    registry: &CategoryRegistry,
    args: &SubmitArgs,
) -> FinanceResult<TransactionRecord> {
    if let Some(ref raw) = args.transaction_type {
        let transaction_type: TransactionType = raw
            .parse()
            .map_err(FinanceError::Validation)?;
        composer.select_transaction_type(transaction_type);
    }

    if let Some(ref key) = args.category {
        let category = registry
            .find(key)
            .ok_or_else(|| FinanceError::category_not_found(key))?;
        composer.on_category_chosen(category.clone());
    }

    composer
        .submit(&args.name, Some(&args.amount))
        .map_err(|e| FinanceError::Validation(e.to_string()))
}

/// Handle `finance submit`: print the record as JSON
pub fn handle_submit_command(registry: &CategoryRegistry, args: SubmitArgs) -> FinanceResult<()> {
    let mut composer = DraftComposer::new();
    let record = run_submit(&mut composer, registry, &args)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SessionSink;

    fn args(name: &str, amount: &str, kind: Option<&str>, category: Option<&str>) -> SubmitArgs {
        SubmitArgs {
            name: name.into(),
            amount: amount.into(),
            transaction_type: kind.map(String::from),
            category: category.map(String::from),
        }
    }

    #[test]
    fn test_complete_submit() {
        let registry = CategoryRegistry::default();
        let mut composer = DraftComposer::with_sink(SessionSink::new());

        let record = run_submit(
            &mut composer,
            &registry,
            &args("Rent", "1200", Some("debit"), Some("purchases")),
        )
        .unwrap();

        assert_eq!(record.amount, 1200.0);
        assert_eq!(record.transaction_type, TransactionType::Debit);
        assert_eq!(record.category, "purchases");
        assert_eq!(composer.sink().len(), 1);
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        let registry = CategoryRegistry::default();
        let mut composer = DraftComposer::with_sink(SessionSink::new());

        let err = run_submit(
            &mut composer,
            &registry,
            &args("Rent", "1200", Some("debit"), Some("rent")),
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert!(composer.sink().is_empty());
    }

    #[test]
    fn test_bad_type_is_validation_error() {
        let registry = CategoryRegistry::default();
        let mut composer = DraftComposer::with_sink(SessionSink::new());

        let err = run_submit(&mut composer, &registry, &args("Rent", "1", Some("sideways"), None))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_category_reported() {
        let registry = CategoryRegistry::default();
        let mut composer = DraftComposer::with_sink(SessionSink::new());

        let err = run_submit(&mut composer, &registry, &args("Rent", "1", Some("credit"), None))
            .unwrap_err();
        assert!(err.to_string().contains("Select a category"));
    }
}
