use axum::{routing::get, Router};

use depot_inventory::LogInfo;

use crate::app::routes::common::list_records;

pub fn router() -> Router {
    Router::new().route("/logs", get(list_records::<LogInfo>))
}
