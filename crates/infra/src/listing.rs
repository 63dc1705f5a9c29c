//! Paginated listing of warehouse records.
//!
//! One page of a record kind plus the total row count, optionally narrowed by
//! a substring filter on the kind's search field. Unfiltered listings correct
//! a page index that points one past the last page (see [`corrected_page`]).
//!
//! Count and page are two separate store reads, so a concurrent write between
//! them can make `rowcount` and `rows` disagree. No transaction is opened.

use std::marker::PhantomData;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use depot_core::DomainError;
use depot_inventory::Record;

use crate::encoding;
use crate::repository::{RecordQuery, Repository, RepositoryError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The request was rejected before touching the store.
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// The store failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// Listing request as received from the caller.
///
/// `page` is 1-based; `page_size == 0` means "no pagination".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub filter: Option<String>,
    pub page: i64,
    pub page_size: i64,
}

impl ListRequest {
    pub fn new(filter: Option<String>, page: i64, page_size: i64) -> Self {
        Self {
            filter,
            page,
            page_size,
        }
    }

    /// The filter, if it has any non-whitespace content.
    pub fn effective_filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.trim().is_empty())
    }
}

/// One page of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPage<R> {
    pub rows: Vec<R>,
    /// Total matching rows across all pages.
    pub rowcount: u64,
    /// Page index actually served (after correction).
    pub page: u64,
}

/// Page index to serve for an unfiltered listing.
///
/// When the row count is an exact multiple of the page size and the requested
/// page lies beyond the last full page, step back one page. This catches the
/// caller still showing the last page after its final row was deleted. Only a
/// single step is taken; `page_size == 0` never corrects.
pub fn corrected_page(rowcount: u64, page_size: u64, page: u64) -> u64 {
    if page_size != 0 && rowcount % page_size == 0 && rowcount / page_size < page {
        page - 1
    } else {
        page
    }
}

fn non_negative(value: i64, name: &str) -> Result<u64, DomainError> {
    u64::try_from(value)
        .map_err(|_| DomainError::invalid_argument(format!("{name} must not be negative (got {value})")))
}

/// Listing over one record kind, backed by an injected repository.
pub struct ListingService<R, S> {
    repository: S,
    search_enabled: bool,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> ListingService<R, S>
where
    R: Record,
    S: Repository<R>,
{
    pub fn new(repository: S) -> Self {
        Self {
            repository,
            search_enabled: true,
            _record: PhantomData,
        }
    }

    /// Toggle the filtered path.
    ///
    /// When disabled, a filter is still normalized (and logged) but the
    /// listing falls through to the unfiltered page.
    pub fn with_search_enabled(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    pub fn repository(&self) -> &S {
        &self.repository
    }

    /// Serve one listing request.
    #[instrument(skip(self), fields(kind = %R::KIND))]
    pub async fn list(&self, request: ListRequest) -> Result<ListPage<R>, ListingError> {
        let page = non_negative(request.page, "page")?;
        let page_size = non_negative(request.page_size, "page size")?;

        if let Some(filter) = request.effective_filter() {
            let needle = encoding::normalize_or_keep(filter);
            if self.search_enabled {
                return self.search_page(&needle, page, page_size).await;
            }
            debug!(needle = %needle, "search disabled; ignoring filter");
        }

        self.list_page(page, page_size).await
    }

    /// Filtered page: records whose search field contains `needle`.
    ///
    /// No page correction is applied.
    pub async fn search_page(
        &self,
        needle: &str,
        page: u64,
        page_size: u64,
    ) -> Result<ListPage<R>, ListingError> {
        let query = RecordQuery::Contains(needle.to_string());
        let rowcount = self.repository.query_record_count(&query).await?;
        let rows = self.repository.query_for_page(&query, page, page_size).await?;
        debug!(rowcount, page, returned = rows.len(), "filtered page served");
        Ok(ListPage {
            rows,
            rowcount,
            page,
        })
    }

    /// Unfiltered page with last-page correction.
    pub async fn list_page(&self, page: u64, page_size: u64) -> Result<ListPage<R>, ListingError> {
        let rowcount = self.repository.query_record_count(&RecordQuery::All).await?;
        let page = corrected_page(rowcount, page_size, page);
        let rows = self
            .repository
            .query_for_page(&RecordQuery::All, page, page_size)
            .await?;
        debug!(rowcount, page, returned = rows.len(), "page served");
        Ok(ListPage {
            rows,
            rowcount,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use proptest::prelude::*;

    use depot_core::{BillCode, RecordKey};
    use depot_inventory::InStockInfo;

    use crate::repository::InMemoryRepository;

    fn bill(n: usize, handler: &str) -> InStockInfo {
        InStockInfo {
            handler: Some(handler.to_string()),
            ..InStockInfo::new(BillCode::new(format!("IN-{n:04}")).unwrap())
        }
    }

    fn service(count: usize) -> ListingService<InStockInfo, InMemoryRepository<InStockInfo>> {
        let handlers = ["Zhang Wei", "Li Na", "Wang Fang"];
        let repo = InMemoryRepository::with_records(
            (1..=count).map(|n| bill(n, handlers[n % handlers.len()])),
        )
        .unwrap();
        ListingService::new(repo)
    }

    fn codes(page: &ListPage<InStockInfo>) -> Vec<String> {
        page.rows.iter().map(|b| b.bill_code.to_string()).collect()
    }

    #[test]
    fn correction_rule_examples() {
        assert_eq!(corrected_page(20, 10, 3), 2);
        assert_eq!(corrected_page(15, 10, 2), 2);
        assert_eq!(corrected_page(0, 10, 1), 0);
        assert_eq!(corrected_page(20, 10, 2), 2);
        assert_eq!(corrected_page(20, 0, 3), 3);
        assert_eq!(corrected_page(0, 10, 0), 0);
    }

    #[tokio::test]
    async fn page_past_exact_multiple_steps_back() {
        let page = service(20).list(ListRequest::new(None, 3, 10)).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.rowcount, 20);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.rows[0].bill_code.as_str(), "IN-0011");
    }

    #[tokio::test]
    async fn partial_last_page_is_not_corrected() {
        let page = service(15).list(ListRequest::new(None, 2, 10)).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.rows.len(), 5);
    }

    #[tokio::test]
    async fn empty_set_corrects_to_page_zero_which_reads_first_page() {
        let page = service(0).list(ListRequest::new(None, 1, 10)).await.unwrap();
        assert_eq!(page.page, 0);
        assert_eq!(page.rowcount, 0);
        assert!(page.rows.is_empty());
    }

    #[tokio::test]
    async fn page_far_beyond_data_is_empty_not_error() {
        let page = service(15).list(ListRequest::new(None, 9, 10)).await.unwrap();
        assert_eq!(page.page, 9);
        assert!(page.rows.is_empty());
        assert_eq!(page.rowcount, 15);
    }

    #[tokio::test]
    async fn zero_page_size_returns_everything() {
        let page = service(23).list(ListRequest::new(None, 4, 0)).await.unwrap();
        assert_eq!(page.rowcount, 23);
        assert_eq!(page.rows.len(), 23);
        assert_eq!(page.page, 4);
    }

    #[tokio::test]
    async fn negative_arguments_are_rejected() {
        let svc = service(5);
        for req in [ListRequest::new(None, -1, 10), ListRequest::new(None, 1, -10)] {
            match svc.list(req).await.unwrap_err() {
                ListingError::Rejected(DomainError::InvalidArgument(_)) => {}
                other => panic!("Expected InvalidArgument, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn blank_filter_behaves_like_no_filter() {
        let svc = service(12);
        let unfiltered = svc.list(ListRequest::new(None, 2, 5)).await.unwrap();
        for filter in ["", "   ", "\t"] {
            let page = svc
                .list(ListRequest::new(Some(filter.to_string()), 2, 5))
                .await
                .unwrap();
            assert_eq!(page, unfiltered);
        }
    }

    #[tokio::test]
    async fn filter_narrows_rows_and_count() {
        let page = service(9)
            .list(ListRequest::new(Some("Li".to_string()), 1, 2))
            .await
            .unwrap();
        assert_eq!(page.rowcount, 3);
        assert_eq!(codes(&page), vec!["IN-0001", "IN-0004"]);
    }

    #[tokio::test]
    async fn mis_decoded_filter_is_normalized_before_search() {
        let repo = InMemoryRepository::with_records([bill(1, "张伟"), bill(2, "李娜")]).unwrap();
        let svc = ListingService::new(repo);
        let garbled: String = "张".as_bytes().iter().map(|&b| char::from(b)).collect();

        let page = svc.list(ListRequest::new(Some(garbled), 1, 10)).await.unwrap();
        assert_eq!(codes(&page), vec!["IN-0001"]);

        // Correctly decoded input still works through the fallback.
        let page = svc.list(ListRequest::new(Some("李".to_string()), 1, 10)).await.unwrap();
        assert_eq!(codes(&page), vec!["IN-0002"]);
    }

    #[tokio::test]
    async fn disabled_search_ignores_filter() {
        let svc = service(9).with_search_enabled(false);
        let page = svc
            .list(ListRequest::new(Some("Li".to_string()), 1, 0))
            .await
            .unwrap();
        assert_eq!(page.rowcount, 9);
        assert_eq!(page.rows.len(), 9);
    }

    #[tokio::test]
    async fn filtered_path_skips_page_correction() {
        // 3 matches, page size 3, page 2: unfiltered rule would step back.
        let page = service(9)
            .list(ListRequest::new(Some("Li".to_string()), 2, 3))
            .await
            .unwrap();
        assert_eq!(page.page, 2);
        assert!(page.rows.is_empty());
    }

    /// Repository whose every call fails, counting calls.
    struct FailingRepository {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Repository<InStockInfo> for FailingRepository {
        async fn list_all(&self) -> Result<Vec<InStockInfo>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::Store("down".into()))
        }

        async fn query_for_page(
            &self,
            _query: &RecordQuery,
            _page: u64,
            _page_size: u64,
        ) -> Result<Vec<InStockInfo>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::Store("down".into()))
        }

        async fn query_record_count(&self, _query: &RecordQuery) -> Result<u64, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::Store("down".into()))
        }

        async fn find(&self, _key: &RecordKey) -> Result<Option<InStockInfo>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::Store("down".into()))
        }
    }

    #[tokio::test]
    async fn store_errors_propagate_unchanged() {
        let repo = Arc::new(FailingRepository {
            calls: AtomicUsize::new(0),
        });
        let svc = ListingService::new(repo.clone());

        let err = svc.list(ListRequest::new(None, 1, 10)).await.unwrap_err();
        assert_eq!(err, ListingError::Store(RepositoryError::Store("down".into())));

        let err = svc
            .list(ListRequest::new(Some("x".to_string()), 1, 10))
            .await
            .unwrap_err();
        assert_eq!(err, ListingError::Store(RepositoryError::Store("down".into())));
    }

    #[tokio::test]
    async fn invalid_arguments_never_reach_the_store() {
        let repo = Arc::new(FailingRepository {
            calls: AtomicUsize::new(0),
        });
        let svc = ListingService::new(repo.clone());

        let _ = svc.list(ListRequest::new(Some("x".into()), -3, 10)).await;
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the correction steps back exactly one page iff the count
        /// is an exact multiple and the page lies past the last full page.
        #[test]
        fn correction_matches_rule(rowcount in 0u64..10_000, page_size in 1u64..100, page in 0u64..500) {
            let corrected = corrected_page(rowcount, page_size, page);
            if rowcount % page_size == 0 && rowcount / page_size < page {
                prop_assert_eq!(corrected, page - 1);
            } else {
                prop_assert_eq!(corrected, page);
            }
        }

        /// Property: without a page size nothing is ever corrected.
        #[test]
        fn zero_page_size_never_corrects(rowcount in 0u64..10_000, page in 0u64..500) {
            prop_assert_eq!(corrected_page(rowcount, 0, page), page);
        }

        /// Property: concatenating every page reproduces `list_all`.
        #[test]
        fn pages_concatenate_to_full_listing(count in 0usize..60, page_size in 1i64..12) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let svc = service(count);
                let all = svc.repository().list_all().await.unwrap();

                let mut collected = Vec::new();
                let mut page = 1i64;
                loop {
                    let served = svc.list(ListRequest::new(None, page, page_size)).await.unwrap();
                    assert_eq!(served.rowcount as usize, count);
                    if served.rows.is_empty() || served.page as i64 != page {
                        break;
                    }
                    collected.extend(served.rows);
                    page += 1;
                }
                assert_eq!(collected, all);
            });
        }
    }
}
