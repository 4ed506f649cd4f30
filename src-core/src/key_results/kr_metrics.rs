//! Progress and status computation for Key Results.
//!
//! This is the one calculation the rest of the system leans on: given a Key
//! Result's type and its numeric/checklist state, derive a normalized
//! progress percentage, an achieved flag and a coarse status bucket. It is
//! total over its input domain by policy — missing numeric fields count as
//! zero and malformed checklist entries are dropped, so a partial record
//! degrades to "0% / not achieved / OFF_TRACK" instead of breaking a page.
//! The output is recomputed on every read and never persisted, so it cannot
//! drift from the underlying values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::key_results::key_results_model::{
    ChecklistItem, KeyResult, KrType, ThresholdDirection,
};

/// Coarse health bucket shown as a traffic light in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KrStatus {
    Achieved,
    OnTrack,
    AtRisk,
    OffTrack,
}

/// Snapshot of the fields the computation reads, detached from the row so
/// the engine stays a pure data-in/data-out boundary.
#[derive(Debug, Clone, Default)]
pub struct KrMetricsInput {
    pub kr_type: String,
    pub target_value: Option<f64>,
    pub baseline_value: Option<f64>,
    pub threshold_value: Option<f64>,
    pub threshold_direction: Option<String>,
    pub current_value: Option<f64>,
    pub checklist_json: Option<String>,
}

impl From<&KeyResult> for KrMetricsInput {
    fn from(kr: &KeyResult) -> Self {
        KrMetricsInput {
            kr_type: kr.kr_type.clone(),
            target_value: kr.target_value,
            baseline_value: kr.baseline_value,
            threshold_value: kr.threshold_value,
            threshold_direction: kr.threshold_direction.clone(),
            current_value: kr.current_value,
            checklist_json: kr.checklist_json.clone(),
        }
    }
}

/// Computed metrics for a Key Result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KrMetrics {
    /// Normalized progress, clamped to [0, 100].
    pub progress: f64,
    pub is_achieved: bool,
    pub status_computed: KrStatus,
}

impl KrMetrics {
    /// Safe result for malformed or unrecognized input: worst case, never
    /// a crash. Callers treat hitting this for an unknown type as a
    /// data-integrity signal worth logging, not as success.
    pub fn fallback() -> KrMetrics {
        KrMetrics {
            progress: 0.0,
            is_achieved: false,
            status_computed: KrStatus::OffTrack,
        }
    }
}

/// A Key Result as served to API consumers: the raw record plus its
/// freshly computed metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResultWithMetrics {
    #[serde(flatten)]
    pub key_result: KeyResult,
    pub computed: KrMetrics,
}

impl From<KeyResult> for KeyResultWithMetrics {
    fn from(kr: KeyResult) -> Self {
        let computed = compute_metrics(&KrMetricsInput::from(&kr));
        KeyResultWithMetrics {
            key_result: kr,
            computed,
        }
    }
}

/// Derives progress, achievement and status from a Key Result snapshot.
///
/// Dispatches exhaustively over the closed type set; anything outside it
/// gets the conservative fallback.
pub fn compute_metrics(input: &KrMetricsInput) -> KrMetrics {
    match KrType::parse(&input.kr_type) {
        Some(KrType::Aumento) => compute_increase(input),
        Some(KrType::Reducao) => compute_decrease(input),
        Some(KrType::Entregavel) => compute_checklist(input),
        Some(KrType::Limiar) => compute_threshold(input),
        None => KrMetrics::fallback(),
    }
}

/// AUMENTO: grow from zero (or from a known baseline) up to the target.
fn compute_increase(input: &KrMetricsInput) -> KrMetrics {
    let current = input.current_value.unwrap_or(0.0);
    let target = input.target_value.unwrap_or(0.0);

    // With a baseline, progress is measured on the baseline-relative delta;
    // without one, on the absolute value. Either way a non-positive
    // denominator means a misconfigured target and reads as zero progress.
    let (numerator, denominator) = match input.baseline_value {
        Some(baseline) => (current - baseline, target - baseline),
        None => (current, target),
    };

    let progress = if denominator <= 0.0 {
        0.0
    } else {
        clamp_percent(numerator / denominator * 100.0)
    };

    let is_achieved = current >= target && target > 0.0;
    let status_computed = if is_achieved {
        KrStatus::Achieved
    } else {
        status_from_progress(progress)
    };

    KrMetrics {
        progress,
        is_achieved,
        status_computed,
    }
}

/// REDUCAO: fall from the baseline down to a lower target. Symmetric to
/// AUMENTO but inverted — progress grows as `current` drops.
fn compute_decrease(input: &KrMetricsInput) -> KrMetrics {
    let baseline = input.baseline_value.unwrap_or(0.0);
    let target = input.target_value.unwrap_or(0.0);
    let current = input.current_value.unwrap_or(baseline);

    let denominator = baseline - target;
    let numerator = baseline - current;

    // target >= baseline is a misconfigured record; progress stays 0 and
    // the status buckets from that regardless of where current sits.
    let progress = if denominator <= 0.0 {
        0.0
    } else {
        clamp_percent(numerator / denominator * 100.0)
    };

    KrMetrics {
        progress,
        is_achieved: current <= target,
        status_computed: status_from_progress(progress),
    }
}

/// ENTREGAVEL: completion ratio over the valid checklist items.
fn compute_checklist(input: &KrMetricsInput) -> KrMetrics {
    let items = parse_checklist(input.checklist_json.as_deref());

    if items.is_empty() {
        return KrMetrics::fallback();
    }

    let total = items.len();
    let done = items.iter().filter(|item| item.done).count();
    let progress = clamp_percent(done as f64 / total as f64 * 100.0);

    KrMetrics {
        progress,
        is_achieved: done == total,
        status_computed: status_from_progress(progress),
    }
}

/// LIMIAR: pass/fail guardrail. Crossing the threshold is binary, so
/// progress is exactly 0 or 100 and status skips the intermediate buckets.
fn compute_threshold(input: &KrMetricsInput) -> KrMetrics {
    let direction = input
        .threshold_direction
        .as_deref()
        .and_then(ThresholdDirection::parse)
        .unwrap_or(ThresholdDirection::Maximo);
    let threshold = input.threshold_value.unwrap_or(0.0);
    let current = input.current_value.unwrap_or(0.0);

    let is_achieved = match direction {
        ThresholdDirection::Maximo => current <= threshold,
        ThresholdDirection::Minimo => current >= threshold,
    };

    KrMetrics {
        progress: if is_achieved { 100.0 } else { 0.0 },
        is_achieved,
        status_computed: if is_achieved {
            KrStatus::Achieved
        } else {
            KrStatus::OffTrack
        },
    }
}

/// Parses a checklist document, keeping only elements shaped exactly as
/// `{id: string, title: string, done: bool}`. A missing, unparseable or
/// non-array document yields an empty list.
pub fn parse_checklist(raw: Option<&str>) -> Vec<ChecklistItem> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let Ok(Value::Array(elements)) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    elements.iter().filter_map(checklist_item).collect()
}

fn checklist_item(value: &Value) -> Option<ChecklistItem> {
    let obj = value.as_object()?;
    Some(ChecklistItem {
        id: obj.get("id")?.as_str()?.to_string(),
        title: obj.get("title")?.as_str()?.to_string(),
        done: obj.get("done")?.as_bool()?,
    })
}

/// Progress-to-status bucketing shared by the gradient types. The 40/70/100
/// boundaries are fixed product constants.
fn status_from_progress(progress: f64) -> KrStatus {
    if progress >= 100.0 {
        KrStatus::Achieved
    } else if progress >= 70.0 {
        KrStatus::OnTrack
    } else if progress >= 40.0 {
        KrStatus::AtRisk
    } else {
        KrStatus::OffTrack
    }
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
