use serde::{Deserialize, Serialize};

use depot_core::{Entity, SupplierId};

use crate::kind::{EntityKind, Record};

/// Supplier (`TBa_SupplierInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct SupplierInfo {
    pub id: i32,
    pub supplier_id: SupplierId,
    pub supplier_name: Option<String>,
    pub address: Option<String>,
    pub link_name: Option<String>,
    pub link_tel: Option<String>,
    pub email: Option<String>,
    pub remark: Option<String>,
    pub state: Option<bool>,
}

impl SupplierInfo {
    pub fn new(supplier_id: SupplierId) -> Self {
        Self {
            id: 0,
            supplier_id,
            supplier_name: None,
            address: None,
            link_name: None,
            link_tel: None,
            email: None,
            remark: None,
            state: None,
        }
    }
}

impl Entity for SupplierInfo {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.supplier_id
    }
}

impl Record for SupplierInfo {
    const KIND: EntityKind = EntityKind::Supplier;

    fn search_text(&self) -> Option<&str> {
        self.supplier_name.as_deref()
    }
}
