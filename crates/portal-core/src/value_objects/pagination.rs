//! Page-number pagination shared by every listing

use serde::Serialize;

/// Officers shown per admin personnel page
pub const OFFICERS_PER_PAGE: u32 = 10;
/// Events, news and gallery items per public page
pub const CONTENT_PER_PAGE: u32 = 8;

/// A 1-based page request. Page numbers below 1 are treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Row offset for SQL `OFFSET`
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Row count for SQL `LIMIT`
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

/// One page of results together with the total row count it was cut from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total: total.max(0),
            page: request.page(),
            per_page: request.per_page(),
        }
    }

    /// `ceil(total / per_page)`; zero when there are no rows
    pub fn total_pages(&self) -> u32 {
        let per_page = i64::from(self.per_page.max(1));
        ((self.total + per_page - 1) / per_page) as u32
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
