use serde::{Deserialize, Serialize};

use depot_core::{DeliveryId, Entity};

use crate::kind::{EntityKind, Record};

/// Delivery company (`TBa_DeliveryInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct DeliveryInfo {
    pub id: i16,
    pub delivery_id: DeliveryId,
    pub delivery_name: Option<String>,
    pub address: Option<String>,
    pub link_name: Option<String>,
    pub link_tel: Option<String>,
    pub qq: Option<String>,
    pub email: Option<String>,
    pub sort_id: i32,
    pub state: Option<bool>,
}

impl DeliveryInfo {
    pub fn new(delivery_id: DeliveryId) -> Self {
        Self {
            id: 0,
            delivery_id,
            delivery_name: None,
            address: None,
            link_name: None,
            link_tel: None,
            qq: None,
            email: None,
            sort_id: 0,
            state: None,
        }
    }
}

impl Entity for DeliveryInfo {
    type Id = DeliveryId;

    fn id(&self) -> &Self::Id {
        &self.delivery_id
    }
}

impl Record for DeliveryInfo {
    const KIND: EntityKind = EntityKind::Delivery;

    fn search_text(&self) -> Option<&str> {
        self.delivery_name.as_deref()
    }
}
