//! Postgres-backed record repository.
//!
//! One generic implementation serves every record kind: the table, key
//! column and search column come from the record's `EntityKind`, rows are
//! decoded with the `sqlx::FromRow` derive on the record itself.
//!
//! ## Ordering
//!
//! Reads are ordered by the primary key column so paging is stable across
//! requests (the schema leaves row order undefined otherwise).
//!
//! ## Search
//!
//! `Contains` uses `LIKE '%needle%'` with `%`, `_` and `\` escaped, so case
//! sensitivity follows the column collation.
//!
//! ## Error Mapping
//!
//! | SQLx Error | PostgreSQL Error Code | RepositoryError |
//! |------------|----------------------|-----------------|
//! | Database (unique violation) | `23505` | `Conflict` |
//! | RowNotFound | N/A | `NotFound` |
//! | anything else | any | `Store` |

use std::marker::PhantomData;
use std::sync::Arc;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{FromRow, PgPool, Postgres};
use tracing::instrument;

use depot_core::RecordKey;
use depot_inventory::Record;

use super::{PageWindow, RecordQuery, Repository, RepositoryError};

/// Postgres repository for one record kind.
///
/// Uses the SQLx connection pool which is thread-safe (Arc + Send + Sync).
/// Count and page are separate statements: a concurrent write between them
/// may make `rowcount` and the returned page disagree.
#[derive(Debug)]
pub struct PostgresRepository<R> {
    pool: Arc<PgPool>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for PostgresRepository<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> PostgresRepository<R> {
    pub fn new(pool: PgPool) -> Self {
        Self::from_shared(Arc::new(pool))
    }

    /// Share one pool between repositories of different kinds.
    pub fn from_shared(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

/// A bound parameter of a generated WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BindValue {
    Text(String),
    Int(i64),
}

impl From<&RecordKey> for BindValue {
    fn from(key: &RecordKey) -> Self {
        match key {
            RecordKey::Int(v) => BindValue::Int(*v),
            RecordKey::Code(v) => BindValue::Text(v.clone()),
        }
    }
}

/// Escape LIKE metacharacters so the needle matches literally.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// WHERE clause (possibly empty) and its single parameter, bound as `$1`.
fn where_clause<R: Record>(query: &RecordQuery) -> (String, Option<BindValue>) {
    match query {
        RecordQuery::All => (String::new(), None),
        RecordQuery::Contains(needle) => (
            format!(" WHERE {} LIKE $1 ESCAPE '\\'", R::KIND.search_column()),
            Some(BindValue::Text(like_pattern(needle))),
        ),
        RecordQuery::Referencing(target) => (
            format!(" WHERE {} = $1", target.column),
            Some(BindValue::from(&target.key)),
        ),
    }
}

fn page_sql<R: Record>(query: &RecordQuery, window: PageWindow) -> (String, Option<BindValue>) {
    let kind = R::KIND;
    let (filter, bind) = where_clause::<R>(query);
    let mut sql = format!(
        "SELECT * FROM {}{} ORDER BY {}",
        kind.table(),
        filter,
        kind.key_column()
    );
    if let Some(limit) = window.limit {
        sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, window.offset));
    }
    (sql, bind)
}

fn count_sql<R: Record>(query: &RecordQuery) -> (String, Option<BindValue>) {
    let (filter, bind) = where_clause::<R>(query);
    (format!("SELECT COUNT(*) FROM {}{}", R::KIND.table(), filter), bind)
}

fn bind_rows<'q, R>(
    q: QueryAs<'q, Postgres, R, PgArguments>,
    value: Option<BindValue>,
) -> QueryAs<'q, Postgres, R, PgArguments> {
    match value {
        None => q,
        Some(BindValue::Text(v)) => q.bind(v),
        Some(BindValue::Int(v)) => q.bind(v),
    }
}

fn bind_scalar<'q>(
    q: QueryScalar<'q, Postgres, i64, PgArguments>,
    value: Option<BindValue>,
) -> QueryScalar<'q, Postgres, i64, PgArguments> {
    match value {
        None => q,
        Some(BindValue::Text(v)) => q.bind(v),
        Some(BindValue::Int(v)) => q.bind(v),
    }
}

#[async_trait::async_trait]
impl<R> Repository<R> for PostgresRepository<R>
where
    R: Record + for<'r> FromRow<'r, PgRow> + Unpin,
{
    #[instrument(skip(self), fields(kind = %R::KIND))]
    async fn list_all(&self) -> Result<Vec<R>, RepositoryError> {
        let (sql, _) = page_sql::<R>(&RecordQuery::All, PageWindow::new(1, 0));
        sqlx::query_as::<_, R>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_all", e))
    }

    #[instrument(skip(self), fields(kind = %R::KIND))]
    async fn query_for_page(
        &self,
        query: &RecordQuery,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<R>, RepositoryError> {
        let (sql, bind) = page_sql::<R>(query, PageWindow::new(page, page_size));
        bind_rows(sqlx::query_as::<_, R>(&sql), bind)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("query_for_page", e))
    }

    #[instrument(skip(self), fields(kind = %R::KIND))]
    async fn query_record_count(&self, query: &RecordQuery) -> Result<u64, RepositoryError> {
        let (sql, bind) = count_sql::<R>(query);
        let total: i64 = bind_scalar(sqlx::query_scalar::<_, i64>(&sql), bind)
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("query_record_count", e))?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    #[instrument(skip(self), fields(kind = %R::KIND))]
    async fn find(&self, key: &RecordKey) -> Result<Option<R>, RepositoryError> {
        let kind = R::KIND;
        let sql = format!(
            "SELECT * FROM {} WHERE {} = $1",
            kind.table(),
            kind.key_column()
        );
        bind_rows(sqlx::query_as::<_, R>(&sql), Some(BindValue::from(key)))
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find", e))
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            match db_err.code().as_deref() {
                Some("23505") => RepositoryError::Conflict(msg),
                _ => RepositoryError::Store(msg),
            }
        }
        sqlx::Error::RowNotFound => {
            RepositoryError::NotFound(format!("row not found in {}", operation))
        }
        sqlx::Error::PoolClosed => {
            RepositoryError::Store(format!("connection pool closed in {}", operation))
        }
        other => RepositoryError::Store(format!("{} failed: {}", operation, other)),
    }
}
