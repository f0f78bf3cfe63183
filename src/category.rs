//! Category normalization.
//!
//! The store sends categories either as a plain label or as a reference
//! object with a `title`. Everything past ingestion sees a flat label.

use crate::models::{Entry, RawCategory, Transaction};

/// Label used for transactions without a usable category.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Reduce a raw category value to its label. Missing or empty values map to
/// [`UNKNOWN_CATEGORY`].
pub fn normalize_category(raw: Option<&RawCategory>) -> String {
    let title = match raw {
        Some(RawCategory::Title(title)) => Some(title.as_str()),
        Some(RawCategory::Reference(reference)) => reference.title.as_deref(),
        None => None,
    };

    match title {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => UNKNOWN_CATEGORY.to_string(),
    }
}

impl From<&Transaction> for Entry {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            title: tx.title.clone(),
            kind: tx.kind,
            category: normalize_category(tx.category.as_ref()),
            amount: tx.amount.clone(),
            date: tx.date.clone(),
            created_at: tx.created_at.clone(),
        }
    }
}

/// Normalize a whole batch, preserving order.
pub fn normalize_all(transactions: &[Transaction]) -> Vec<Entry> {
    transactions.iter().map(Entry::from).collect()
}
