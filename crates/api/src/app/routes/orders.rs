use axum::{routing::get, Router};

use depot_inventory::{DeliveryInfo, OrderDetailsInfo, OrderInfo};

use crate::app::routes::common::list_records;

pub fn router() -> Router {
    Router::new()
        .route("/orders", get(list_records::<OrderInfo>))
        .route("/orders/details", get(list_records::<OrderDetailsInfo>))
        .route("/delivery", get(list_records::<DeliveryInfo>))
}
