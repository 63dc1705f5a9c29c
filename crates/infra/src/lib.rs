//! Infrastructure layer: data access, listing, configuration.

pub mod config;
pub mod encoding;
pub mod listing;
pub mod repository;

pub use config::DepotConfig;
pub use listing::{ListPage, ListRequest, ListingError, ListingService};
pub use repository::{InMemoryRepository, PostgresRepository, RecordQuery, Repository, RepositoryError};
