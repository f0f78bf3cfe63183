//! Shared fixtures for integration tests.

#![allow(dead_code)]

use finboard::models::{StoreSnapshot, Transaction};
use serde_json::{json, Value};

/// Parse a JSON array of transactions the way the store sends them.
pub fn transactions(value: Value) -> Vec<Transaction> {
    serde_json::from_value(value).expect("Failed to parse fixture transactions")
}

/// The three-transaction household used across scenario tests.
pub fn household() -> Vec<Transaction> {
    transactions(json!([
        {"title": "Rent", "type": "expense", "category": "House", "amount": "1000", "date": "2024-06-01"},
        {"title": "Groceries", "type": "expense", "category": "Food", "amount": "150", "date": "2024-06-02"},
        {"title": "Salary", "type": "income", "category": "Job", "amount": "2500", "date": "2024-06-01"}
    ]))
}

/// `n` expenses with distinct amounts, spread over a few categories and
/// mixing string and object category shapes.
pub fn expenses(n: usize) -> Vec<Transaction> {
    let categories = ["Food", "House", "Car", "Fun"];
    let rows: Vec<Value> = (0..n)
        .map(|i| {
            let label = categories[i % categories.len()];
            let category = if i % 3 == 0 {
                json!({ "title": label })
            } else {
                json!(label)
            };
            json!({
                "_id": format!("tx-{}", i),
                "title": format!("Expense {:02}", i),
                "type": "expense",
                "category": category,
                "amount": format!("{}.{:02}", (i * 37) % 500 + 1, i % 100),
                "date": format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                "createdAt": format!("2024-07-{:02}T12:00:00Z", i % 28 + 1)
            })
        })
        .collect();
    transactions(Value::Array(rows))
}

pub fn ready(transactions: Vec<Transaction>) -> StoreSnapshot {
    StoreSnapshot::ready(transactions)
}
