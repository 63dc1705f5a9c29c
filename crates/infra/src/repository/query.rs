//! Query expressions and page-window arithmetic shared by all stores.

use depot_inventory::{Record, RecordRef};

/// Which records of a kind a query selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordQuery {
    /// Every record.
    All,
    /// Records whose designated search field contains the text.
    Contains(String),
    /// Records holding the given foreign key (one-to-many back-collection).
    Referencing(RecordRef),
}

impl RecordQuery {
    /// In-process evaluation, used by stores without a query engine.
    ///
    /// `Contains` is a case-sensitive substring test; a record without a
    /// search value never matches.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match self {
            RecordQuery::All => true,
            RecordQuery::Contains(needle) => record
                .search_text()
                .is_some_and(|text| text.contains(needle.as_str())),
            RecordQuery::Referencing(target) => record.references().contains(target),
        }
    }
}

/// Largest offset a store is asked to skip (Postgres `OFFSET` is a `bigint`).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Offset/limit window of a 1-based page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of leading records to skip.
    pub offset: u64,
    /// Maximum records to return; `None` when unpaginated.
    pub limit: Option<u64>,
}

impl PageWindow {
    /// Window for `page` of `page_size` records.
    ///
    /// Page `0` is treated as page `1`; `page_size == 0` yields the whole set.
    /// The offset is capped at [`MAX_OFFSET`], which is still past any data.
    pub fn new(page: u64, page_size: u64) -> Self {
        if page_size == 0 {
            return Self {
                offset: 0,
                limit: None,
            };
        }
        Self {
            offset: page
                .max(1)
                .saturating_sub(1)
                .saturating_mul(page_size)
                .min(MAX_OFFSET),
            limit: Some(page_size),
        }
    }

    /// Slice an ordered sequence down to this window.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let offset = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let iter = items.into_iter().skip(offset);
        match self.limit {
            Some(limit) => iter
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => iter.collect(),
        }
    }
}
