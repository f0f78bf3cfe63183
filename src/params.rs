use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::form_utils::deserialize_optional_usize;
use crate::models::{FilterCriteria, TransactionType};
use crate::pagination::PageState;
use crate::sort_utils::Sortable;
use crate::view_model::DashboardState;

/// Dashboard state in query-string form, e.g.
/// `type=expense&category=Food&sort=amount&dir=asc&page=2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        rename = "createdDate",
        alias = "created_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_usize",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<usize>,
}

impl Sortable for ViewParams {
    fn sort_by(&self) -> Option<&String> {
        self.sort.as_ref()
    }

    fn sort_dir(&self) -> Option<&String> {
        self.dir.as_ref()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ViewParams {
    pub fn from_query(query: &str) -> AppResult<Self> {
        let query = query.trim_start_matches('?');
        Ok(serde_urlencoded::from_str(query)?)
    }

    /// Transaction type to show; expenses when unspecified.
    pub fn resolve_kind(&self) -> AppResult<TransactionType> {
        match self.kind.as_deref() {
            None | Some("") => Ok(TransactionType::Expense),
            Some(s) => s.parse().map_err(AppError::Validation),
        }
    }

    pub fn resolve_filters(&self) -> FilterCriteria {
        FilterCriteria {
            title: self.title.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            amount: self.amount.clone().unwrap_or_default(),
            date: self.date.clone().unwrap_or_default(),
            created_date: self.created_date.clone().unwrap_or_default(),
        }
    }

    pub fn resolve_page(&self) -> PageState {
        PageState::new(self.page.unwrap_or(1))
    }

    pub fn into_state(self) -> AppResult<DashboardState> {
        Ok(DashboardState::from_parts(
            self.resolve_kind()?,
            self.resolve_filters(),
            self.resolve_sort(),
            self.resolve_page(),
        ))
    }

    /// Params that reproduce `state`; empty filters are left out.
    pub fn from_state(state: &DashboardState) -> Self {
        let filters = state.filters();
        let sort = state.sort();
        Self {
            kind: Some(state.kind().as_str().to_string()),
            title: non_empty(&filters.title),
            category: non_empty(&filters.category),
            amount: non_empty(&filters.amount),
            date: non_empty(&filters.date),
            created_date: non_empty(&filters.created_date),
            sort: Some(sort.key.as_str().to_string()),
            dir: Some(sort.direction.as_str().to_string()),
            page: Some(state.page().current_page()),
        }
    }

    pub fn query_string(&self) -> AppResult<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}
