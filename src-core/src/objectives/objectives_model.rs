//! Strategic objectives - the strategy-map nodes Key Results attach to.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::objectives;

#[derive(
    Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset, Serialize, Deserialize,
)]
#[diesel(table_name = objectives)]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Strategy-map row this objective is placed on (e.g. "FINANCEIRO",
    /// "CLIENTES", "PROCESSOS", "APRENDIZADO").
    pub perspective: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewObjective {
    pub title: String,
    pub description: Option<String>,
    pub perspective: Option<String>,
}

impl NewObjective {
    pub fn into_objective(self) -> Objective {
        let now = chrono::Utc::now().naive_utc();
        Objective {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            perspective: self.perspective,
            created_at: now,
            updated_at: now,
        }
    }
}
