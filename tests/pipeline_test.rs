//! End-to-end tests for view derivation over realistic transaction sets.

mod common;

use finboard::category::normalize_all;
use finboard::models::{FilterCriteria, TransactionType};
use finboard::pagination::PageState;
use finboard::services::analytics::{round_cents, ChartSeries, Summary};
use finboard::services::colors::ColorScheme;
use finboard::services::filter::{apply_filters, split_by_type};
use finboard::sort_utils::{sort_entries, SortConfig, SortDirection, SortKey};
use finboard::view_model::{build_view_model, DashboardState, DashboardView};

/// Default criteria leave the typed set untouched, order included.
#[test]
fn test_identity_filter() {
    let entries = normalize_all(&common::expenses(27));
    let typed = split_by_type(&entries, TransactionType::Expense);
    let filtered = apply_filters(&typed, &FilterCriteria::default());
    assert_eq!(filtered, typed);
}

/// Average is total over count, and zero for an empty set.
#[test]
fn test_average_consistency() {
    let entries = normalize_all(&common::expenses(17));
    let summary = Summary::from_entries(&entries);
    let expected = summary.total / summary.count as f64;
    assert!((summary.average - expected).abs() < 0.01);

    let empty = Summary::from_entries(&[]);
    assert_eq!(empty.average, 0.0);
    assert_eq!(empty.top_category, "Unknown");
}

/// Chart bars add up to the summary total for the same filtered set.
#[test]
fn test_aggregate_conservation() {
    let entries = normalize_all(&common::expenses(33));
    let filtered = apply_filters(
        &entries,
        &FilterCriteria {
            amount: "1".into(),
            ..Default::default()
        },
    );
    let series = ChartSeries::from_entries(&filtered, ColorScheme::Reds);
    let summary = Summary::from_entries(&filtered);
    assert_eq!(round_cents(series.total()), summary.total);
    assert!(!series.is_empty());
}

/// Amount ascending and descending are exact reverses for distinct amounts.
#[test]
fn test_sort_reversal() {
    let entries = normalize_all(&common::expenses(25));
    let asc = sort_entries(&entries, SortConfig::new(SortKey::Amount, SortDirection::Asc));
    let mut desc = sort_entries(&entries, SortConfig::new(SortKey::Amount, SortDirection::Desc));
    desc.reverse();
    assert_eq!(asc, desc);
}

/// Walking every page yields the sorted set exactly once.
#[test]
fn test_pagination_coverage() {
    let entries = normalize_all(&common::expenses(43));
    let sorted = sort_entries(&entries, SortConfig::default());
    let total_pages = PageState::default().total_pages(sorted.len());
    assert_eq!(total_pages, 5);

    let mut walked = Vec::new();
    for page in 1..=total_pages {
        walked.extend_from_slice(PageState::new(page).slice(&sorted));
    }
    assert_eq!(walked, sorted);
}

/// A shrinking result set pulls the page back; an empty one leaves it alone.
#[test]
fn test_clamp_behavior() {
    let snapshot = common::ready(common::expenses(60));
    let mut state = DashboardState::new(TransactionType::Expense);
    state.go_to_page(5);
    state.derive(&snapshot);
    assert_eq!(state.page().current_page(), 5);

    // a filter edit resets to page 1, so emulate the caller landing on page 5
    // again before the next derivation
    state.update_filters(|f| f.category = "Food".into());
    state.go_to_page(5);
    let view = state.derive(&snapshot);
    let vm = view.ready().expect("view should be ready");
    assert_eq!(vm.pagination.total_pages, 2);
    assert_eq!(vm.pagination.current_page, 2);
    assert_eq!(state.page().current_page(), 2);

    state.update_filters(|f| f.title = "no such title".into());
    state.go_to_page(2);
    let view = state.derive(&snapshot);
    let vm = view.ready().expect("view should be ready");
    assert_eq!(vm.pagination.total_pages, 0);
    assert!(vm.pagination.is_empty());
    assert_eq!(vm.pagination.current_page, 2);
    assert!(vm.table_rows.is_empty());
}

/// The household scenario: expense summary and amount prefix filter.
#[test]
fn test_household_scenario() {
    let vm = build_view_model(
        &common::household(),
        TransactionType::Expense,
        &FilterCriteria::default(),
        SortConfig::default(),
        PageState::default(),
    );
    assert_eq!(vm.summary.total, 1150.0);
    assert_eq!(vm.summary.total_display, "1150.00");
    assert_eq!(vm.summary.count, 2);
    assert_eq!(vm.summary.average, 575.0);
    assert_eq!(vm.summary.average_display, "575.00");
    assert_eq!(vm.summary.top_category, "House");

    let filters = FilterCriteria {
        amount: "1".into(),
        ..Default::default()
    };
    let vm = build_view_model(
        &common::household(),
        TransactionType::Expense,
        &filters,
        SortConfig::default(),
        PageState::default(),
    );
    let titles: Vec<&str> = vm.table_rows.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Rent"]);
}

/// Date filters compare calendar days only.
#[test]
fn test_date_day_equality() {
    let transactions = common::transactions(serde_json::json!([
        {"title": "Late snack", "type": "expense", "category": "Food", "amount": "4", "date": "2024-06-01T23:59:00"},
        {"title": "Breakfast", "type": "expense", "category": "Food", "amount": "6", "date": "2024-06-02T07:00:00"}
    ]));
    let entries = normalize_all(&transactions);
    let filters = FilterCriteria {
        date: "2024-06-01T00:00:00".into(),
        ..Default::default()
    };
    let filtered = apply_filters(&entries, &filters);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Late snack");
}

/// Clicking a chart bar filters the table to that category.
#[test]
fn test_chart_selection_feeds_filter() {
    let snapshot = common::ready(common::expenses(20));
    let mut state = DashboardState::new(TransactionType::Expense);
    state.go_to_page(2);

    let view = state.derive(&snapshot);
    let series = view
        .ready()
        .map(|vm| vm.chart_series.clone())
        .expect("view should be ready");
    let house = series.position_of("House").expect("House bar");
    assert!(state.select_chart_bar(&series, house));
    assert_eq!(state.page().current_page(), 1);

    let view = state.derive(&snapshot);
    let vm = view.ready().expect("view should be ready");
    assert!(vm.filters_active);
    assert!(vm.table_rows.iter().all(|e| e.category == "House"));
    assert_eq!(vm.chart_series.labels(), vec!["House"]);
    assert_eq!(vm.summary.top_category, "House");

    state.clear_filters();
    let view = state.derive(&snapshot);
    assert_eq!(view.ready().map(|vm| vm.summary.count), Some(20));
}

/// Income view only sees income and colors bars green.
#[test]
fn test_income_view() {
    let mut state = DashboardState::new(TransactionType::Income);
    let view = state.derive(&common::ready(common::household()));
    match view {
        DashboardView::Ready(vm) => {
            assert_eq!(vm.summary.count, 1);
            assert_eq!(vm.summary.top_category, "Job");
            assert_eq!(vm.chart_series.bars[0].color, ColorScheme::Greens.interpolate(0.0));
        }
        other => panic!("expected ready view, got {:?}", other),
    }
}

/// Sorting by a column then clicking again flips the table order.
#[test]
fn test_header_clicks_reorder_table() {
    let snapshot = common::ready(common::expenses(8));
    let mut state = DashboardState::new(TransactionType::Expense);

    state.sort_by(SortKey::Title);
    let view = state.derive(&snapshot);
    let first = view.ready().map(|vm| vm.table_rows[0].title.clone());
    assert_eq!(first.as_deref(), Some("Expense 00"));

    state.sort_by(SortKey::Title);
    let view = state.derive(&snapshot);
    let first = view.ready().map(|vm| vm.table_rows[0].title.clone());
    assert_eq!(first.as_deref(), Some("Expense 07"));
}
