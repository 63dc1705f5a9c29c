use serde::{Deserialize, Serialize};

use depot_core::{Entity, OperatorId};

use crate::kind::{EntityKind, Record};

/// Back-office operator (`TAu_OperInfo`).
///
/// Only what other records reference is kept here; login data and
/// permissions belong to the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OperatorInfo {
    pub oper_id: OperatorId,
    pub oper_name: Option<String>,
    pub state: Option<bool>,
}

impl Entity for OperatorInfo {
    type Id = OperatorId;

    fn id(&self) -> &Self::Id {
        &self.oper_id
    }
}

impl Record for OperatorInfo {
    const KIND: EntityKind = EntityKind::Operator;

    fn search_text(&self) -> Option<&str> {
        self.oper_name.as_deref()
    }
}
