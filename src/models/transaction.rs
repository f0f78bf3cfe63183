use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::form_utils::{deserialize_null_as_empty, deserialize_text_or_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category reference object as stored alongside a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// The category field arrives either as a bare label or as a reference object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCategory {
    Title(String),
    Reference(CategoryRef),
}

impl From<&str> for RawCategory {
    fn from(title: &str) -> Self {
        Self::Title(title.to_string())
    }
}

/// A transaction as supplied by the store, before any normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, alias = "_id", deserialize_with = "deserialize_text_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub category: Option<RawCategory>,
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub amount: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub date: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A transaction after category normalization. Every downstream stage works
/// on entries, never on raw transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub created_at: Option<String>,
}

impl Entry {
    /// Parsed amount, or `None` when the text is not a finite number.
    pub fn amount_value(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }

    /// Parsed amount with unparsable text counted as zero.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount_value().unwrap_or(0.0)
    }

    /// Trimmed amount text used for prefix matching; empty when unparsable.
    pub fn amount_text(&self) -> &str {
        if self.amount_value().is_some() {
            self.amount.trim()
        } else {
            ""
        }
    }

    pub fn is_type(&self, kind: TransactionType) -> bool {
        self.kind == kind
    }
}

/// Parse an amount the way the store writes it: plain decimal text,
/// surrounding whitespace ignored.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_string_category() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "a1",
            "title": "Rent",
            "type": "expense",
            "category": "House",
            "amount": "1000",
            "date": "2024-06-01"
        }))
        .unwrap();

        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.category, Some(RawCategory::Title("House".into())));
        assert_eq!(tx.created_at, None);
    }

    #[test]
    fn test_deserialize_object_category_and_numeric_amount() {
        let tx: Transaction = serde_json::from_value(json!({
            "_id": 42,
            "title": "Salary",
            "type": "income",
            "category": { "title": "Job", "_id": "c9" },
            "amount": 2500.5,
            "date": "2024-06-01",
            "createdAt": "2024-06-02T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(tx.id, "42");
        assert_eq!(tx.amount, "2500.5");
        assert_eq!(
            tx.category,
            Some(RawCategory::Reference(CategoryRef {
                title: Some("Job".into())
            }))
        );
        assert_eq!(tx.created_at.as_deref(), Some("2024-06-02T10:00:00Z"));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let tx: Transaction = serde_json::from_value(json!({
            "type": "expense",
            "title": null,
            "category": null
        }))
        .unwrap();

        assert_eq!(tx.title, "");
        assert_eq!(tx.category, None);
        assert_eq!(tx.amount, "");
        assert_eq!(tx.date, "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150"), Some(150.0));
        assert_eq!(parse_amount(" 1.50 "), Some(1.5));
        assert_eq!(parse_amount("-20.25"), Some(-20.25));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("Expense".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert!("transfer".parse::<TransactionType>().is_err());
    }
}
