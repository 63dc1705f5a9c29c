//! Merchandise catalog and measurement units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depot_core::{Entity, MerchandiseId};

use crate::kind::{collect_refs, EntityKind, Record, RecordRef};

/// Merchandise (`TMe_MerchandiseInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct MerchandiseInfo {
    pub id: i32,
    pub merchandise_id: MerchandiseId,
    pub merchandise_name: Option<String>,
    pub spec: Option<String>,
    pub unit_id: Option<i32>,
    pub price: Option<Decimal>,
    pub remark: Option<String>,
    pub status: Option<bool>,
}

impl MerchandiseInfo {
    pub fn new(merchandise_id: MerchandiseId) -> Self {
        Self {
            id: 0,
            merchandise_id,
            merchandise_name: None,
            spec: None,
            unit_id: None,
            price: None,
            remark: None,
            status: None,
        }
    }
}

impl Entity for MerchandiseInfo {
    type Id = MerchandiseId;

    fn id(&self) -> &Self::Id {
        &self.merchandise_id
    }
}

impl Record for MerchandiseInfo {
    const KIND: EntityKind = EntityKind::Merchandise;

    fn search_text(&self) -> Option<&str> {
        self.merchandise_name.as_deref()
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([self
            .unit_id
            .map(|k| RecordRef::new(EntityKind::Unit, "unit_id", k))])
    }
}

/// Measurement unit (`TMe_UnitInfo`), e.g. "box" or "kg".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct UnitInfo {
    pub unit_id: i32,
    pub name: Option<String>,
    pub status: Option<bool>,
    pub remark: Option<String>,
}

impl Entity for UnitInfo {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.unit_id
    }
}

impl Record for UnitInfo {
    const KIND: EntityKind = EntityKind::Unit;

    fn search_text(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
