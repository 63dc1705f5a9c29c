use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use depot_core::{Entity, MemberName};

use crate::kind::{EntityKind, Record};

/// Shop member (`TBa_MemberInfo`). Credentials live with the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct MemberInfo {
    pub id: i32,
    pub user_name: MemberName,
    pub real_name: Option<String>,
    pub sex: Option<bool>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub post_code: Option<String>,
    pub reg_time: Option<DateTime<Utc>>,
    pub status: Option<bool>,
}

impl MemberInfo {
    pub fn new(user_name: MemberName) -> Self {
        Self {
            id: 0,
            user_name,
            real_name: None,
            sex: None,
            phone: None,
            email: None,
            address: None,
            post_code: None,
            reg_time: None,
            status: None,
        }
    }
}

impl Entity for MemberInfo {
    type Id = MemberName;

    fn id(&self) -> &Self::Id {
        &self.user_name
    }
}

impl Record for MemberInfo {
    const KIND: EntityKind = EntityKind::Member;

    fn search_text(&self) -> Option<&str> {
        Some(self.user_name.as_str())
    }
}
