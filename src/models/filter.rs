use serde::{Deserialize, Serialize};

use crate::form_utils::deserialize_null_as_empty;

/// Per-field table filters. An empty field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title.
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub title: String,
    /// Exact normalized category label.
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub category: String,
    /// Text prefix of the amount.
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub amount: String,
    /// Calendar day of the transaction date.
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub date: String,
    /// Calendar day of the record creation timestamp.
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub created_date: String,
}

impl FilterCriteria {
    /// True when at least one field constrains the result.
    pub fn is_active(&self) -> bool {
        [
            &self.title,
            &self.category,
            &self.amount,
            &self.date,
            &self.created_date,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
