//! Generic data-access boundary for warehouse records.
//!
//! Callers receive a `Repository<R>` explicitly (constructor injection) and
//! never learn which store sits behind it.

pub mod in_memory;
pub mod postgres;
pub mod query;

use std::sync::Arc;

use thiserror::Error;

use depot_core::RecordKey;
use depot_inventory::Record;

pub use in_memory::InMemoryRepository;
pub use postgres::PostgresRepository;
pub use query::{PageWindow, RecordQuery};

/// Data-access operation error.
///
/// These are **infrastructure errors**; the listing layer propagates them
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record with the same primary key already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing store failed (connection, SQL, decoding, poisoned lock).
    #[error("store error: {0}")]
    Store(String),
}

/// Read access to one record kind.
///
/// Pages are 1-based; page `0` reads as the first page. A `page_size` of `0`
/// disables slicing. Result order is the store's (see implementations).
#[async_trait::async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Every record of the kind.
    async fn list_all(&self) -> Result<Vec<R>, RepositoryError>;

    /// One page of the records matching `query`.
    async fn query_for_page(
        &self,
        query: &RecordQuery,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<R>, RepositoryError>;

    /// Number of records matching `query`.
    async fn query_record_count(&self, query: &RecordQuery) -> Result<u64, RepositoryError>;

    /// Look up a single record by primary key.
    async fn find(&self, key: &RecordKey) -> Result<Option<R>, RepositoryError>;
}

#[async_trait::async_trait]
impl<R, S> Repository<R> for Arc<S>
where
    R: Record,
    S: Repository<R> + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<R>, RepositoryError> {
        (**self).list_all().await
    }

    async fn query_for_page(
        &self,
        query: &RecordQuery,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<R>, RepositoryError> {
        (**self).query_for_page(query, page, page_size).await
    }

    async fn query_record_count(&self, query: &RecordQuery) -> Result<u64, RepositoryError> {
        (**self).query_record_count(query).await
    }

    async fn find(&self, key: &RecordKey) -> Result<Option<R>, RepositoryError> {
        (**self).find(key).await
    }
}
