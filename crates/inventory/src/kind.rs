//! Entity kinds and the `Record` interface the data-access layer relies on.

use depot_core::{Entity, RecordKey};

/// Logical record type being listed or stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    InStock,
    InStockDetail,
    OutStock,
    OutStockDetail,
    Order,
    OrderDetail,
    Delivery,
    Supplier,
    Member,
    Merchandise,
    Unit,
    Log,
    Operator,
}

impl EntityKind {
    pub const ALL: [EntityKind; 13] = [
        EntityKind::InStock,
        EntityKind::InStockDetail,
        EntityKind::OutStock,
        EntityKind::OutStockDetail,
        EntityKind::Order,
        EntityKind::OrderDetail,
        EntityKind::Delivery,
        EntityKind::Supplier,
        EntityKind::Member,
        EntityKind::Merchandise,
        EntityKind::Unit,
        EntityKind::Log,
        EntityKind::Operator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::InStock => "instock",
            EntityKind::InStockDetail => "instock_detail",
            EntityKind::OutStock => "outstock",
            EntityKind::OutStockDetail => "outstock_detail",
            EntityKind::Order => "order",
            EntityKind::OrderDetail => "order_detail",
            EntityKind::Delivery => "delivery",
            EntityKind::Supplier => "supplier",
            EntityKind::Member => "member",
            EntityKind::Merchandise => "merchandise",
            EntityKind::Unit => "unit",
            EntityKind::Log => "log",
            EntityKind::Operator => "operator",
        }
    }

    /// Table backing this kind.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::InStock => "tme_instock_info",
            EntityKind::InStockDetail => "tme_instock_details_info",
            EntityKind::OutStock => "tme_outstock_info",
            EntityKind::OutStockDetail => "tme_outstock_details_info",
            EntityKind::Order => "tme_order_info",
            EntityKind::OrderDetail => "tme_order_details_info",
            EntityKind::Delivery => "tba_delivery_info",
            EntityKind::Supplier => "tba_supplier_info",
            EntityKind::Member => "tba_member_info",
            EntityKind::Merchandise => "tme_merchandise_info",
            EntityKind::Unit => "tme_unit_info",
            EntityKind::Log => "tba_log_info",
            EntityKind::Operator => "tau_oper_info",
        }
    }

    /// Primary key column.
    pub fn key_column(self) -> &'static str {
        match self {
            EntityKind::InStock | EntityKind::Order => "bill_code",
            EntityKind::OutStock => "out_bill_code",
            EntityKind::InStockDetail
            | EntityKind::OutStockDetail
            | EntityKind::OrderDetail
            | EntityKind::Log => "id",
            EntityKind::Delivery => "delivery_id",
            EntityKind::Supplier => "supplier_id",
            EntityKind::Member => "user_name",
            EntityKind::Merchandise => "merchandise_id",
            EntityKind::Unit => "unit_id",
            EntityKind::Operator => "oper_id",
        }
    }

    /// Designated free-text search column.
    pub fn search_column(self) -> &'static str {
        match self {
            EntityKind::InStock | EntityKind::OutStock => "handler",
            EntityKind::InStockDetail | EntityKind::OrderDetail => "bill_code",
            EntityKind::OutStockDetail => "out_bill_code",
            EntityKind::Order => "rec_man",
            EntityKind::Delivery => "delivery_name",
            EntityKind::Supplier => "supplier_name",
            EntityKind::Member => "user_name",
            EntityKind::Merchandise => "merchandise_name",
            EntityKind::Unit => "name",
            EntityKind::Log => "content",
            EntityKind::Operator => "oper_name",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-owning many-to-one reference held by a record (a foreign key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordRef {
    /// Kind of the referenced record.
    pub target: EntityKind,
    /// Foreign key column on the referencing record.
    pub column: &'static str,
    /// Key of the referenced record.
    pub key: RecordKey,
}

impl RecordRef {
    pub fn new(target: EntityKind, column: &'static str, key: impl Into<RecordKey>) -> Self {
        Self {
            target,
            column,
            key: key.into(),
        }
    }
}

/// A persistent warehouse record.
pub trait Record: Entity + Clone + PartialEq + core::fmt::Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Value of the kind's designated search field.
    fn search_text(&self) -> Option<&str>;

    /// Foreign keys held by this record; unset references are omitted.
    fn references(&self) -> Vec<RecordRef> {
        Vec::new()
    }
}

/// Collects the set references of a record, skipping `None`s.
pub(crate) fn collect_refs<const N: usize>(refs: [Option<RecordRef>; N]) -> Vec<RecordRef> {
    refs.into_iter().flatten().collect()
}
