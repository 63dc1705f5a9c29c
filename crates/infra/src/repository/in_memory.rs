use std::sync::RwLock;

use depot_core::RecordKey;
use depot_inventory::Record;

use super::{PageWindow, RecordQuery, Repository, RepositoryError};

/// In-memory record store for tests/dev.
///
/// Records are kept in insertion order, which is the order every read
/// returns them in.
#[derive(Debug)]
pub struct InMemoryRepository<R> {
    inner: RwLock<Vec<R>>,
}

impl<R> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Store("in-memory store lock poisoned".to_string())
}

impl<R: Record> InMemoryRepository<R> {
    /// Build a store pre-loaded with `records` (primary keys must be unique).
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Result<Self, RepositoryError> {
        let repo = Self::new();
        for record in records {
            repo.insert(record)?;
        }
        Ok(repo)
    }

    /// Insert a new record; fails with `Conflict` on a duplicate primary key.
    pub fn insert(&self, record: R) -> Result<(), RepositoryError> {
        let mut rows = self.inner.write().map_err(|_| poisoned())?;
        let key = record.key();
        if rows.iter().any(|r| r.key() == key) {
            return Err(RepositoryError::Conflict(format!(
                "{} with key {key} already exists",
                R::KIND
            )));
        }
        rows.push(record);
        Ok(())
    }

    /// Replace the stored record that has the same primary key.
    pub fn update(&self, record: R) -> Result<(), RepositoryError> {
        let mut rows = self.inner.write().map_err(|_| poisoned())?;
        let key = record.key();
        match rows.iter_mut().find(|r| r.key() == key) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!("{} {key}", R::KIND))),
        }
    }

    /// Remove a record by primary key, returning it.
    pub fn delete(&self, key: &RecordKey) -> Result<R, RepositoryError> {
        let mut rows = self.inner.write().map_err(|_| poisoned())?;
        match rows.iter().position(|r| &r.key() == key) {
            Some(idx) => Ok(rows.remove(idx)),
            None => Err(RepositoryError::NotFound(format!("{} {key}", R::KIND))),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    async fn list_all(&self) -> Result<Vec<R>, RepositoryError> {
        let rows = self.inner.read().map_err(|_| poisoned())?;
        Ok(rows.clone())
    }

    async fn query_for_page(
        &self,
        query: &RecordQuery,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<R>, RepositoryError> {
        let rows = self.inner.read().map_err(|_| poisoned())?;
        let matching = rows.iter().filter(|r| query.matches(*r)).cloned();
        Ok(PageWindow::new(page, page_size).apply(matching))
    }

    async fn query_record_count(&self, query: &RecordQuery) -> Result<u64, RepositoryError> {
        let rows = self.inner.read().map_err(|_| poisoned())?;
        Ok(rows.iter().filter(|r| query.matches(*r)).count() as u64)
    }

    async fn find(&self, key: &RecordKey) -> Result<Option<R>, RepositoryError> {
        let rows = self.inner.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|r| &r.key() == key).cloned())
    }
}
