//! Master data: suppliers, members, merchandise and units.

use axum::{routing::get, Router};

use depot_inventory::{MemberInfo, MerchandiseInfo, SupplierInfo, UnitInfo};

use crate::app::routes::common::list_records;

pub fn router() -> Router {
    Router::new()
        .route("/suppliers", get(list_records::<SupplierInfo>))
        .route("/members", get(list_records::<MemberInfo>))
        .route("/merchandise", get(list_records::<MerchandiseInfo>))
        .route("/units", get(list_records::<UnitInfo>))
}
