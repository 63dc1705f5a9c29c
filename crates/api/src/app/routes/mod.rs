use axum::Router;

pub mod common;
pub mod directory;
pub mod logs;
pub mod orders;
pub mod stock;
pub mod system;

/// Router for all listing endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(stock::router())
        .merge(orders::router())
        .merge(directory::router())
        .merge(logs::router())
}
