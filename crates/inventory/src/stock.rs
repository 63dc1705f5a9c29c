//! Stock-in and stock-out bills with their detail lines.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depot_core::{BillCode, Entity, MerchandiseId, OperatorId, SupplierId};

use crate::kind::{collect_refs, EntityKind, Record, RecordRef};

/// Stock-in bill header (`TMe_InStockInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InStockInfo {
    /// Store-assigned row number; not the key.
    pub id: i32,
    pub bill_code: BillCode,
    pub in_type: Option<i16>,
    pub in_time: Option<DateTime<Utc>>,
    pub handler: Option<String>,
    pub total_money: Option<Decimal>,
    pub remark: Option<String>,
    pub oper_id: Option<OperatorId>,
    pub supplier_id: Option<SupplierId>,
}

impl InStockInfo {
    pub fn new(bill_code: BillCode) -> Self {
        Self {
            id: 0,
            bill_code,
            in_type: None,
            in_time: None,
            handler: None,
            total_money: None,
            remark: None,
            oper_id: None,
            supplier_id: None,
        }
    }

    /// New bill with a freshly generated bill code.
    pub fn with_generated_code() -> Self {
        Self::new(BillCode::generate())
    }
}

impl Entity for InStockInfo {
    type Id = BillCode;

    fn id(&self) -> &Self::Id {
        &self.bill_code
    }
}

impl Record for InStockInfo {
    const KIND: EntityKind = EntityKind::InStock;

    fn search_text(&self) -> Option<&str> {
        self.handler.as_deref()
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([
            self.oper_id
                .clone()
                .map(|k| RecordRef::new(EntityKind::Operator, "oper_id", k)),
            self.supplier_id
                .clone()
                .map(|k| RecordRef::new(EntityKind::Supplier, "supplier_id", k)),
        ])
    }
}

/// Stock-in detail line (`TMe_InStockDetailsInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InStockDetailsInfo {
    pub id: i32,
    pub bill_code: Option<BillCode>,
    pub merchandise_id: Option<MerchandiseId>,
    pub num: Option<i32>,
    pub price: Option<Decimal>,
}

impl Entity for InStockDetailsInfo {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for InStockDetailsInfo {
    const KIND: EntityKind = EntityKind::InStockDetail;

    fn search_text(&self) -> Option<&str> {
        self.bill_code.as_ref().map(BillCode::as_str)
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([
            self.bill_code
                .clone()
                .map(|k| RecordRef::new(EntityKind::InStock, "bill_code", k)),
            self.merchandise_id
                .clone()
                .map(|k| RecordRef::new(EntityKind::Merchandise, "merchandise_id", k)),
        ])
    }
}

/// Stock-out bill header (`TMe_OutStockInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OutStockInfo {
    pub id: i32,
    pub out_bill_code: BillCode,
    pub out_type: Option<i16>,
    pub out_time: Option<DateTime<Utc>>,
    pub handler: Option<String>,
    pub total_money: Option<Decimal>,
    pub remark: Option<String>,
    pub oper_id: Option<OperatorId>,
}

impl OutStockInfo {
    pub fn new(out_bill_code: BillCode) -> Self {
        Self {
            id: 0,
            out_bill_code,
            out_type: None,
            out_time: None,
            handler: None,
            total_money: None,
            remark: None,
            oper_id: None,
        }
    }
}

impl Entity for OutStockInfo {
    type Id = BillCode;

    fn id(&self) -> &Self::Id {
        &self.out_bill_code
    }
}

impl Record for OutStockInfo {
    const KIND: EntityKind = EntityKind::OutStock;

    fn search_text(&self) -> Option<&str> {
        self.handler.as_deref()
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([self
            .oper_id
            .clone()
            .map(|k| RecordRef::new(EntityKind::Operator, "oper_id", k))])
    }
}

/// Stock-out detail line (`TMe_OutStockDetailsInfo`).
///
/// `stock_price` is the cost price at the time of issue; `price` the sale
/// price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OutStockDetailsInfo {
    pub id: i32,
    pub out_bill_code: Option<BillCode>,
    pub merchandise_id: Option<MerchandiseId>,
    pub num: Option<i32>,
    pub price: Option<Decimal>,
    pub stock_price: Option<Decimal>,
}

impl Entity for OutStockDetailsInfo {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for OutStockDetailsInfo {
    const KIND: EntityKind = EntityKind::OutStockDetail;

    fn search_text(&self) -> Option<&str> {
        self.out_bill_code.as_ref().map(BillCode::as_str)
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([
            self.out_bill_code
                .clone()
                .map(|k| RecordRef::new(EntityKind::OutStock, "out_bill_code", k)),
            self.merchandise_id
                .clone()
                .map(|k| RecordRef::new(EntityKind::Merchandise, "merchandise_id", k)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::RecordKey;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn sample_bill() -> InStockInfo {
        InStockInfo {
            id: 7,
            handler: Some("Zhang Wei".to_string()),
            total_money: Some(Decimal::from_str("1250.50").unwrap()),
            oper_id: Some(OperatorId::new("op-1").unwrap()),
            supplier_id: Some(SupplierId::new("sup-9").unwrap()),
            ..InStockInfo::new(BillCode::new("IN-0001").unwrap())
        }
    }

    #[test]
    fn equality_and_hash_are_structural() {
        let a = sample_bill();
        let b = sample_bill();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 1);

        let mut c = a.clone();
        c.remark = Some("late delivery".to_string());
        assert_ne!(a, c);
    }

    #[test]
    fn in_stock_bill_is_keyed_by_bill_code() {
        let bill = sample_bill();
        assert_eq!(bill.key(), RecordKey::Code("IN-0001".to_string()));
        assert_eq!(bill.search_text(), Some("Zhang Wei"));
    }

    #[test]
    fn in_stock_bill_references_operator_and_supplier() {
        let refs = sample_bill().references();
        assert_eq!(
            refs,
            vec![
                RecordRef::new(EntityKind::Operator, "oper_id", OperatorId::new("op-1").unwrap()),
                RecordRef::new(EntityKind::Supplier, "supplier_id", SupplierId::new("sup-9").unwrap()),
            ]
        );
    }

    #[test]
    fn unset_references_are_omitted() {
        let bill = InStockInfo::new(BillCode::new("IN-0002").unwrap());
        assert!(bill.references().is_empty());
        assert_eq!(bill.search_text(), None);
    }

    #[test]
    fn detail_lines_point_back_to_their_bill() {
        let line = OutStockDetailsInfo {
            id: 3,
            out_bill_code: Some(BillCode::new("OUT-1").unwrap()),
            merchandise_id: None,
            num: Some(2),
            price: Some(Decimal::new(999, 2)),
            stock_price: Some(Decimal::new(650, 2)),
        };
        assert_eq!(line.key(), RecordKey::Int(3));
        assert_eq!(line.search_text(), Some("OUT-1"));
        assert_eq!(
            line.references(),
            vec![RecordRef::new(EntityKind::OutStock, "out_bill_code", BillCode::new("OUT-1").unwrap())]
        );
    }

    #[test]
    fn money_serializes_as_exact_decimal_string() {
        let json = serde_json::to_value(sample_bill()).unwrap();
        assert_eq!(json["total_money"], "1250.50");
        assert_eq!(json["bill_code"], "IN-0001");
    }
}
