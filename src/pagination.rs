use serde::{Deserialize, Deserializer, Serialize};

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Current page of the transaction table (1-based, never below 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

impl<'de> Deserialize<'de> for PageState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            #[serde(default)]
            current_page: usize,
        }

        Raw::deserialize(deserializer).map(|raw| Self::new(raw.current_page))
    }
}

impl PageState {
    pub fn new(current_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages needed for `len` rows; zero for an empty set.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(PAGE_SIZE)
    }

    /// Pull the current page back onto the last page when the result set
    /// shrank below it. An empty result set leaves the page untouched.
    pub fn clamp(self, len: usize) -> Self {
        let total = self.total_pages(len);
        if total > 0 && self.current_page > total {
            tracing::debug!(
                "Clamping page {} to last page {}",
                self.current_page,
                total
            );
            Self::new(total)
        } else {
            self
        }
    }

    /// Back to the first page, as after any filter change.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn go_to(self, page: usize) -> Self {
        Self::new(page)
    }

    /// Rows of the current page. Out-of-range pages yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(PAGE_SIZE);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}

/// Pagination view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// No rows matched, so there is nothing to page through.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}
