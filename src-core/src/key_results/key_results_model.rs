//! Key Result records and their type-conditioned field invariant.
//!
//! A Key Result is stored as one flat row whose numeric/checklist fields are
//! semantically partitioned by `kr_type`: each type owns a subset of the
//! fields and every other field must be NULL. `sanitize_by_type` enforces
//! that invariant on every write, so a type switch can never leak a stale
//! value from the previous type into progress computation.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::key_results;

/// The closed set of Key Result types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KrType {
    /// Increase toward a target, optionally relative to a baseline.
    Aumento,
    /// Decrease from a baseline toward a lower target.
    Reducao,
    /// Deliverable tracked as a checklist.
    Entregavel,
    /// Threshold guardrail, pass/fail.
    Limiar,
}

impl KrType {
    /// Parses the stored discriminant. Returns `None` for anything outside
    /// the closed set so callers can fall back instead of erroring.
    pub fn parse(raw: &str) -> Option<KrType> {
        match raw {
            "AUMENTO" => Some(KrType::Aumento),
            "REDUCAO" => Some(KrType::Reducao),
            "ENTREGAVEL" => Some(KrType::Entregavel),
            "LIMIAR" => Some(KrType::Limiar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KrType::Aumento => "AUMENTO",
            KrType::Reducao => "REDUCAO",
            KrType::Entregavel => "ENTREGAVEL",
            KrType::Limiar => "LIMIAR",
        }
    }
}

/// Direction of a LIMIAR guardrail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdDirection {
    /// Satisfied while current stays at or below the threshold.
    Maximo,
    /// Satisfied while current stays at or above the threshold.
    Minimo,
}

impl ThresholdDirection {
    pub fn parse(raw: &str) -> Option<ThresholdDirection> {
        match raw {
            "MAXIMO" => Some(ThresholdDirection::Maximo),
            "MINIMO" => Some(ThresholdDirection::Minimo),
            _ => None,
        }
    }
}

/// One item of an ENTREGAVEL checklist, as stored in `checklist_json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub done: bool,
}

/// A Key Result row. `AsChangeset` treats `None` as NULL so that the
/// sanitizer's nulled-out fields actually clear in storage on update.
#[derive(
    Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset, Serialize, Deserialize,
)]
#[diesel(table_name = key_results)]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    pub id: String,
    pub objective_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kr_type: String,
    pub target_value: Option<f64>,
    pub baseline_value: Option<f64>,
    pub threshold_value: Option<f64>,
    pub threshold_direction: Option<String>,
    pub current_value: Option<f64>,
    pub checklist_json: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Creation payload for a Key Result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewKeyResult {
    pub objective_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kr_type: String,
    pub target_value: Option<f64>,
    pub baseline_value: Option<f64>,
    pub threshold_value: Option<f64>,
    pub threshold_direction: Option<String>,
    pub current_value: Option<f64>,
    pub checklist_json: Option<String>,
}

impl NewKeyResult {
    /// Materializes a row with a fresh id and timestamps. The caller is
    /// expected to sanitize the result before persisting it.
    pub fn into_key_result(self) -> KeyResult {
        let now = chrono::Utc::now().naive_utc();
        KeyResult {
            id: uuid::Uuid::new_v4().to_string(),
            objective_id: self.objective_id,
            title: self.title,
            description: self.description,
            kr_type: self.kr_type,
            target_value: self.target_value,
            baseline_value: self.baseline_value,
            threshold_value: self.threshold_value,
            threshold_direction: self.threshold_direction,
            current_value: self.current_value,
            checklist_json: self.checklist_json,
            created_at: now,
            updated_at: now,
        }
    }
}

impl KeyResult {
    /// Nulls every field not owned by the record's current type.
    ///
    /// Ownership: AUMENTO/REDUCAO own target, baseline and current;
    /// ENTREGAVEL owns the checklist only; LIMIAR owns threshold, direction
    /// and current. An unrecognized type keeps nothing. Idempotent, and
    /// re-applied whenever the type itself changes within an update.
    pub fn sanitize_by_type(&mut self) {
        match KrType::parse(&self.kr_type) {
            Some(KrType::Aumento) | Some(KrType::Reducao) => {
                self.threshold_value = None;
                self.threshold_direction = None;
                self.checklist_json = None;
            }
            Some(KrType::Entregavel) => {
                self.target_value = None;
                self.baseline_value = None;
                self.threshold_value = None;
                self.threshold_direction = None;
                self.current_value = None;
            }
            Some(KrType::Limiar) => {
                self.target_value = None;
                self.baseline_value = None;
                self.checklist_json = None;
            }
            None => {
                self.target_value = None;
                self.baseline_value = None;
                self.threshold_value = None;
                self.threshold_direction = None;
                self.current_value = None;
                self.checklist_json = None;
            }
        }
    }
}
