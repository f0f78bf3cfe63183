use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::date_utils::timestamp_or_min;
use crate::models::Entry;

/// Sort direction for table columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

/// Columns of the transaction table that can be sorted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Title,
    Category,
    Amount,
    #[default]
    Date,
    CreatedAt,
}

impl SortKey {
    /// Parse column name from query string parameter.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "category" => Some(Self::Category),
            "amount" => Some(Self::Amount),
            "date" => Some(Self::Date),
            "createdat" | "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Convert column to query string parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Amount => "amount",
            Self::Date => "date",
            Self::CreatedAt => "createdAt",
        }
    }

    pub fn all() -> &'static [SortKey] {
        &[
            Self::Title,
            Self::Category,
            Self::Amount,
            Self::Date,
            Self::CreatedAt,
        ]
    }

    /// Ascending comparison of two entries on this column.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            Self::Amount => a
                .amount_or_zero()
                .partial_cmp(&b.amount_or_zero())
                .unwrap_or(Ordering::Equal),
            Self::Date => timestamp_or_min(Some(a.date.as_str()))
                .cmp(&timestamp_or_min(Some(b.date.as_str()))),
            Self::CreatedAt => timestamp_or_min(a.created_at.as_deref())
                .cmp(&timestamp_or_min(b.created_at.as_deref())),
            Self::Category => locale_compare(&a.category, &b.category),
            Self::Title => locale_compare(&a.title, &b.title),
        }
    }
}

/// Trait for caller params that carry sort state as loose strings.
pub trait Sortable {
    fn sort_by(&self) -> Option<&String>;
    fn sort_dir(&self) -> Option<&String>;

    /// Resolve sort parameters into a SortConfig; unknown values fall back
    /// to the default.
    fn resolve_sort(&self) -> SortConfig {
        let key = self
            .sort_by()
            .and_then(|s| SortKey::from_str(s))
            .unwrap_or_default();

        let direction = self
            .sort_dir()
            .map(|s| SortDirection::from_str(s))
            .unwrap_or_default();

        SortConfig { key, direction }
    }
}

/// Active sort column and direction. Defaults to newest first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Check if this column is currently being sorted.
    pub fn is_active(&self, key: SortKey) -> bool {
        self.key == key
    }

    /// Direction a click on `key` should produce: toggle the active column,
    /// start any other column ascending.
    pub fn next_direction_for(&self, key: SortKey) -> SortDirection {
        if self.is_active(key) {
            self.direction.toggle()
        } else {
            SortDirection::Asc
        }
    }

    /// State after clicking the header of `key`.
    pub fn clicked(&self, key: SortKey) -> Self {
        Self {
            key,
            direction: self.next_direction_for(key),
        }
    }

    /// Get sort indicator for a column header ("▲", "▼", or "").
    pub fn indicator(&self, key: SortKey) -> &'static str {
        if self.is_active(key) {
            match self.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            }
        } else {
            ""
        }
    }
}

/// Return a sorted copy. The sort is stable, so entries that compare equal
/// keep their input order in both directions.
pub fn sort_entries(entries: &[Entry], config: SortConfig) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| config.direction.apply(config.key.compare(a, b)));
    sorted
}

/// Case-insensitive ordering that breaks ties with lowercase before
/// uppercase, then by code point.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a
        .cmp(folded_b)
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
