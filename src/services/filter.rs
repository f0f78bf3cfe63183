use crate::date_utils::parse_day;
use crate::models::{Entry, FilterCriteria, TransactionType};

/// Keep only entries of the given type, in input order.
pub fn split_by_type(entries: &[Entry], kind: TransactionType) -> Vec<Entry> {
    entries.iter().filter(|e| e.is_type(kind)).cloned().collect()
}

/// Apply every non-empty criterion with AND semantics. Input order is kept.
pub fn apply_filters(entries: &[Entry], criteria: &FilterCriteria) -> Vec<Entry> {
    let title_needle = criteria.title.to_lowercase();

    entries
        .iter()
        .filter(|e| matches_title(e, &title_needle))
        .filter(|e| matches_category(e, &criteria.category))
        .filter(|e| matches_amount(e, &criteria.amount))
        .filter(|e| criteria.date.is_empty() || same_day(&e.date, &criteria.date))
        .filter(|e| {
            criteria.created_date.is_empty()
                || e.created_at
                    .as_deref()
                    .is_some_and(|created| same_day(created, &criteria.created_date))
        })
        .cloned()
        .collect()
}

fn matches_title(entry: &Entry, needle_lower: &str) -> bool {
    needle_lower.is_empty() || entry.title.to_lowercase().contains(needle_lower)
}

fn matches_category(entry: &Entry, category: &str) -> bool {
    category.is_empty() || entry.category == category
}

fn matches_amount(entry: &Entry, prefix: &str) -> bool {
    prefix.is_empty() || entry.amount_text().starts_with(prefix)
}

/// Compare two date strings by calendar day. Either side failing to parse
/// is a non-match.
fn same_day(value: &str, filter: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    match (parse_day(value), parse_day(filter)) {
        (Some(a), Some(b)) => a == b,
        _ => {
            tracing::warn!("Invalid date format: {:?} vs filter {:?}", value, filter);
            false
        }
    }
}
