//! Warehouse record definitions.
//!
//! Every record maps one-to-one onto a table of the (external) warehouse
//! schema. Records are plain data: structural equality/hash, foreign keys
//! held as identifiers, no behavior beyond describing themselves to the
//! data-access layer through [`Record`].

pub mod delivery;
pub mod kind;
pub mod log;
pub mod member;
pub mod merchandise;
pub mod operator;
pub mod order;
pub mod stock;
pub mod supplier;

pub use delivery::DeliveryInfo;
pub use kind::{EntityKind, Record, RecordRef};
pub use log::LogInfo;
pub use member::MemberInfo;
pub use merchandise::{MerchandiseInfo, UnitInfo};
pub use operator::OperatorInfo;
pub use order::{OrderDetailsInfo, OrderInfo};
pub use stock::{InStockDetailsInfo, InStockInfo, OutStockDetailsInfo, OutStockInfo};
pub use supplier::SupplierInfo;
