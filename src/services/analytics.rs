use serde::Serialize;
use std::collections::HashMap;

use crate::category::UNKNOWN_CATEGORY;
use crate::models::Entry;
use crate::services::colors::{normalized_index, ColorScheme};

/// Headline numbers for a set of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of amounts, rounded to cents.
    pub total: f64,
    pub count: usize,
    /// Unrounded total over count, rounded to cents. Zero for an empty set.
    pub average: f64,
    pub top_category: String,
    pub total_display: String,
    pub average_display: String,
}

impl Summary {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let raw_total: f64 = entries.iter().map(Entry::amount_or_zero).sum();
        let count = entries.len();
        let raw_average = if count > 0 {
            raw_total / count as f64
        } else {
            0.0
        };

        let totals = category_totals(entries);
        // Strict comparison keeps the first-seen category on ties.
        let mut top: Option<(&str, f64)> = None;
        for (category, amount) in &totals {
            if top.is_none_or(|(_, best)| *amount > best) {
                top = Some((category.as_str(), *amount));
            }
        }
        let top_category = top
            .map(|(c, _)| c.to_string())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

        Self {
            total: round_cents(raw_total),
            count,
            average: round_cents(raw_average),
            top_category,
            total_display: format_amount(raw_total),
            average_display: format_amount(raw_average),
        }
    }
}

/// Per-category sums in first-seen order.
pub fn category_totals(entries: &[Entry]) -> Vec<(String, f64)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, f64)> = Vec::new();

    for entry in entries {
        let amount = entry.amount_or_zero();
        match positions.get(entry.category.as_str()) {
            Some(&idx) => totals[idx].1 += amount,
            None => {
                positions.insert(entry.category.as_str(), totals.len());
                totals.push((entry.category.clone(), amount));
            }
        }
    }

    totals
}

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub category: String,
    pub total_amount: f64,
    /// `total_amount` rounded to cents for labels and tooltips.
    pub display_amount: f64,
    pub color: String,
}

/// Category series for a chart, in first-seen category order.
///
/// Bar positions and labels map both ways, so a click on bar `i` can be
/// turned back into a category filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartSeries {
    pub bars: Vec<CategoryAggregate>,
}

impl ChartSeries {
    pub fn from_entries(entries: &[Entry], scheme: ColorScheme) -> Self {
        let totals = category_totals(entries);
        let len = totals.len();
        let bars = totals
            .into_iter()
            .enumerate()
            .map(|(i, (category, total_amount))| CategoryAggregate {
                category,
                total_amount,
                display_amount: round_cents(total_amount),
                color: scheme.interpolate(normalized_index(i, len)),
            })
            .collect();

        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.category.as_str()).collect()
    }

    /// Label of the bar at `index`.
    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.bars.get(index).map(|b| b.category.as_str())
    }

    /// Bar position of `category`.
    pub fn position_of(&self, category: &str) -> Option<usize> {
        self.bars.iter().position(|b| b.category == category)
    }

    /// Turn a click on bar `index` into the label to filter by.
    pub fn select_category(&self, index: usize) -> Option<String> {
        let selected = self.category_at(index).map(str::to_string);
        if selected.is_none() {
            tracing::debug!("Ignoring chart selection at {} of {} bars", index, self.len());
        }
        selected
    }

    /// Sum over all bars, unrounded.
    pub fn total(&self) -> f64 {
        self.bars.iter().map(|b| b.total_amount).sum()
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
