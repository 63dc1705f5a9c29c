use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use depot_infra::ListingService;
use depot_inventory::Record;

use crate::app::dto::ListParams;
use crate::app::errors;
use crate::app::services::{AppServices, RepositoryFor};

/// Shared handler body for every `GET /<area>` listing.
pub async fn list_records<R>(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<ListParams>,
) -> axum::response::Response
where
    R: Record + Serialize,
    AppServices: RepositoryFor<R>,
{
    let service = ListingService::new(<AppServices as RepositoryFor<R>>::repository(&services))
        .with_search_enabled(services.search_enabled());

    match service.list(params.into()).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => errors::listing_error_to_response(e),
    }
}
