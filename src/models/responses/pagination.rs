//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::TradieResponse;

/// Length-aware page of results
#[derive(Debug, Serialize, ToSchema)]
#[aliases(PaginatedTradies = Paginated<TradieResponse>)]
pub struct Paginated<T: Serialize> {
    /// Current page number (1-based)
    pub current_page: u64,
    /// Items on this page
    pub data: Vec<T>,
    /// Position of the first item on this page, null when the page is empty
    pub from: Option<u64>,
    /// Number of the last page (at least 1)
    pub last_page: u64,
    /// Items per page
    pub per_page: u64,
    /// Position of the last item on this page, null when the page is empty
    pub to: Option<u64>,
    /// Total number of matching items
    pub total: u64,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, current_page: u64, per_page: u64) -> Self {
        let last_page = total.div_ceil(per_page.max(1)).max(1);
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let from = current_page
                .saturating_sub(1)
                .saturating_mul(per_page)
                .saturating_add(1);
            let len = u64::try_from(data.len()).unwrap_or(u64::MAX);
            (Some(from), Some(from.saturating_add(len - 1)))
        };

        Self {
            current_page,
            data,
            from,
            last_page,
            per_page,
            to,
            total,
        }
    }

    pub fn map<U: Serialize>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            current_page: self.current_page,
            data: self.data.into_iter().map(f).collect(),
            from: self.from,
            last_page: self.last_page,
            per_page: self.per_page,
            to: self.to,
            total: self.total,
        }
    }
}
