use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AppResult;
use crate::models::transaction::Transaction;

/// What the transaction store hands to the dashboard on each render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreSnapshot {
    pub fn ready(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            loading: false,
            error: None,
        }
    }

    /// Read a snapshot from a JSON file. A bare array of transactions is
    /// accepted as a ready snapshot.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if value.is_array() {
            let transactions: Vec<Transaction> = serde_json::from_value(value)?;
            return Ok(Self::ready(transactions));
        }
        Ok(serde_json::from_value(value)?)
    }
}
