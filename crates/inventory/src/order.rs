//! Customer orders and their lines.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depot_core::{BillCode, DeliveryId, Entity, MemberName, MerchandiseId, OperatorId};

use crate::kind::{collect_refs, EntityKind, Record, RecordRef};

/// Order header (`TMe_OrderInfo`).
///
/// An order is shipped through a delivery company and, once picked, points at
/// the stock-out bill that fulfilled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OrderInfo {
    pub id: i32,
    pub bill_code: BillCode,
    /// Tracking number issued by the delivery company.
    pub post_bill_code: Option<String>,
    pub bill_status: i16,
    pub order_time: Option<DateTime<Utc>>,
    pub rec_man: Option<String>,
    pub link_tel: Option<String>,
    pub rec_address: Option<String>,
    pub post_code: Option<String>,
    pub total_money: Option<Decimal>,
    pub remark: Option<String>,
    pub oper_id: Option<OperatorId>,
    pub delivery_id: Option<DeliveryId>,
    pub user_name: Option<MemberName>,
    pub out_bill_code: Option<BillCode>,
}

impl OrderInfo {
    pub fn new(bill_code: BillCode) -> Self {
        Self {
            id: 0,
            bill_code,
            post_bill_code: None,
            bill_status: 0,
            order_time: None,
            rec_man: None,
            link_tel: None,
            rec_address: None,
            post_code: None,
            total_money: None,
            remark: None,
            oper_id: None,
            delivery_id: None,
            user_name: None,
            out_bill_code: None,
        }
    }
}

impl Entity for OrderInfo {
    type Id = BillCode;

    fn id(&self) -> &Self::Id {
        &self.bill_code
    }
}

impl Record for OrderInfo {
    const KIND: EntityKind = EntityKind::Order;

    fn search_text(&self) -> Option<&str> {
        self.rec_man.as_deref()
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([
            self.oper_id
                .clone()
                .map(|k| RecordRef::new(EntityKind::Operator, "oper_id", k)),
            self.delivery_id
                .clone()
                .map(|k| RecordRef::new(EntityKind::Delivery, "delivery_id", k)),
            self.user_name
                .clone()
                .map(|k| RecordRef::new(EntityKind::Member, "user_name", k)),
            self.out_bill_code
                .clone()
                .map(|k| RecordRef::new(EntityKind::OutStock, "out_bill_code", k)),
        ])
    }
}

/// Order line (`TMe_OrderDetailsInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OrderDetailsInfo {
    pub id: i32,
    pub bill_code: Option<BillCode>,
    pub merchandise_id: Option<MerchandiseId>,
    pub unit_id: Option<i32>,
    pub num: Option<i32>,
    pub price: Option<Decimal>,
}

impl Entity for OrderDetailsInfo {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for OrderDetailsInfo {
    const KIND: EntityKind = EntityKind::OrderDetail;

    fn search_text(&self) -> Option<&str> {
        self.bill_code.as_ref().map(BillCode::as_str)
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([
            self.bill_code
                .clone()
                .map(|k| RecordRef::new(EntityKind::Order, "bill_code", k)),
            self.merchandise_id
                .clone()
                .map(|k| RecordRef::new(EntityKind::Merchandise, "merchandise_id", k)),
            self.unit_id
                .map(|k| RecordRef::new(EntityKind::Unit, "unit_id", k)),
        ])
    }
}
