use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use depot_core::{Entity, OperatorId};

use crate::kind::{collect_refs, EntityKind, Record, RecordRef};

/// Operation log entry (`TBa_LogInfo`).
///
/// `menu_id` names the back-office menu the operation came from; menus are
/// managed outside this service, so it is not a checked reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct LogInfo {
    pub id: i32,
    pub log_time: Option<DateTime<Utc>>,
    pub ip: Option<String>,
    pub content: Option<String>,
    pub oper_id: Option<OperatorId>,
    pub menu_id: Option<String>,
}

impl Entity for LogInfo {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for LogInfo {
    const KIND: EntityKind = EntityKind::Log;

    fn search_text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn references(&self) -> Vec<RecordRef> {
        collect_refs([self
            .oper_id
            .clone()
            .map(|k| RecordRef::new(EntityKind::Operator, "oper_id", k))])
    }
}
