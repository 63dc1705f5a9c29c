use axum::{routing::get, Router};

use depot_inventory::{InStockDetailsInfo, InStockInfo, OutStockDetailsInfo, OutStockInfo};

use crate::app::routes::common::list_records;

pub fn router() -> Router {
    Router::new()
        .route("/instock", get(list_records::<InStockInfo>))
        .route("/instock/details", get(list_records::<InStockDetailsInfo>))
        .route("/outstock", get(list_records::<OutStockInfo>))
        .route("/outstock/details", get(list_records::<OutStockDetailsInfo>))
}
