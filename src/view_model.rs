//! View derivation for the transactions page.
//!
//! [`build_view_model`] is the single entry point that runs the stages in
//! order: normalize, split by type, filter, then summary and chart from the
//! filtered set, then sort, clamp the page, and slice. [`DashboardState`] is
//! a caller that owns the mutable tuple (filters, sort, page) and feeds the
//! clamped page back after each pass.

use serde::Serialize;

use crate::category::normalize_all;
use crate::models::{Entry, FilterCriteria, StoreSnapshot, Transaction, TransactionType};
use crate::pagination::{PageInfo, PageState};
use crate::services::analytics::{ChartSeries, Summary};
use crate::services::colors::ColorScheme;
use crate::services::filter::{apply_filters, split_by_type};
use crate::sort_utils::{sort_entries, SortConfig, SortKey};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub summary: Summary,
    pub chart_series: ChartSeries,
    pub table_rows: Vec<Entry>,
    pub pagination: PageInfo,
    pub sort: SortConfig,
    pub filters_active: bool,
    /// Page state after clamping; callers store this back.
    #[serde(skip)]
    pub page: PageState,
}

/// Outcome of one render pass. Loading and error states from the store pass
/// through without any derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "view", rename_all = "lowercase")]
pub enum DashboardView {
    Loading,
    Error(String),
    Ready(ViewModel),
}

impl DashboardView {
    pub fn ready(&self) -> Option<&ViewModel> {
        match self {
            Self::Ready(vm) => Some(vm),
            _ => None,
        }
    }
}

/// Derive the full view model from raw transactions and the caller's state.
pub fn build_view_model(
    transactions: &[Transaction],
    kind: TransactionType,
    filters: &FilterCriteria,
    sort: SortConfig,
    page: PageState,
) -> ViewModel {
    let entries = normalize_all(transactions);
    let typed = split_by_type(&entries, kind);
    let filtered = apply_filters(&typed, filters);

    let summary = Summary::from_entries(&filtered);
    let chart_series = ChartSeries::from_entries(&filtered, ColorScheme::for_type(kind));

    let sorted = sort_entries(&filtered, sort);
    let page = page.clamp(sorted.len());
    let table_rows = page.slice(&sorted).to_vec();
    let total_pages = page.total_pages(sorted.len());

    tracing::debug!(
        "Derived {} view: {} of {} rows match, page {}/{}",
        kind,
        filtered.len(),
        typed.len(),
        page.current_page(),
        total_pages
    );

    ViewModel {
        kind,
        summary,
        chart_series,
        table_rows,
        pagination: PageInfo {
            current_page: page.current_page(),
            total_pages,
        },
        sort,
        filters_active: filters.is_active(),
        page,
    }
}

/// Derive a view from a store snapshot, honoring its loading and error states.
pub fn build_view(
    snapshot: &StoreSnapshot,
    kind: TransactionType,
    filters: &FilterCriteria,
    sort: SortConfig,
    page: PageState,
) -> DashboardView {
    if snapshot.loading {
        return DashboardView::Loading;
    }
    if let Some(error) = &snapshot.error {
        return DashboardView::Error(error.clone());
    }
    DashboardView::Ready(build_view_model(
        &snapshot.transactions,
        kind,
        filters,
        sort,
        page,
    ))
}

/// Caller-side view state for one transactions page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    kind: TransactionType,
    filters: FilterCriteria,
    sort: SortConfig,
    page: PageState,
}

impl DashboardState {
    pub fn new(kind: TransactionType) -> Self {
        Self {
            kind,
            filters: FilterCriteria::default(),
            sort: SortConfig::default(),
            page: PageState::default(),
        }
    }

    /// Restore a state as-is, e.g. from a query string. No page reset.
    pub fn from_parts(
        kind: TransactionType,
        filters: FilterCriteria,
        sort: SortConfig,
        page: PageState,
    ) -> Self {
        Self {
            kind,
            filters,
            sort,
            page,
        }
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Switch between the income and expense views.
    pub fn set_kind(&mut self, kind: TransactionType) {
        if self.kind != kind {
            self.kind = kind;
            self.page = self.page.reset();
        }
    }

    /// Replace the filters. Any change sends the table back to page 1.
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        if self.filters != filters {
            self.filters = filters;
            self.page = self.page.reset();
        }
    }

    /// Edit filters in place, e.g. `state.update_filters(|f| f.title = "rent".into())`.
    pub fn update_filters<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        let mut next = self.filters.clone();
        edit(&mut next);
        self.set_filters(next);
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(FilterCriteria::default());
    }

    /// Chart selection: the label goes into the category filter verbatim.
    pub fn select_category(&mut self, category: &str) {
        let category = category.to_string();
        self.update_filters(|f| f.category = category);
    }

    /// Chart selection by bar position. Returns false when the index does not
    /// name a bar.
    pub fn select_chart_bar(&mut self, series: &ChartSeries, index: usize) -> bool {
        match series.select_category(index) {
            Some(category) => {
                self.select_category(&category);
                true
            }
            None => false,
        }
    }

    /// Column header click.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.clicked(key);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = self.page.go_to(page);
    }

    /// Run one render pass and keep the clamped page for the next one.
    pub fn derive(&mut self, snapshot: &StoreSnapshot) -> DashboardView {
        let view = build_view(snapshot, self.kind, &self.filters, self.sort, self.page);
        if let DashboardView::Ready(vm) = &view {
            self.page = vm.page;
        }
        view
    }
}
