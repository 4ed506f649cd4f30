use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use stratmap_core::key_results::key_results_model::{KeyResult, NewKeyResult};
use stratmap_core::key_results::key_results_traits::KeyResultServiceTrait;
use stratmap_core::key_results::KeyResultWithMetrics;

async fn get_key_results(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<KeyResultWithMetrics>>> {
    let key_results = state.key_result_service.get_key_results()?;
    Ok(Json(key_results))
}

async fn get_key_result(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<KeyResultWithMetrics>> {
    let key_result = state.key_result_service.get_key_result(&id)?;
    Ok(Json(key_result))
}

async fn create_key_result(
    State(state): State<Arc<AppState>>,
    Json(new_key_result): Json<NewKeyResult>,
) -> ApiResult<Json<KeyResultWithMetrics>> {
    let kr = state
        .key_result_service
        .create_key_result(new_key_result)
        .await?;
    Ok(Json(kr))
}

async fn update_key_result(
    State(state): State<Arc<AppState>>,
    Json(key_result): Json<KeyResult>,
) -> ApiResult<Json<KeyResultWithMetrics>> {
    let kr = state.key_result_service.update_key_result(key_result).await?;
    Ok(Json(kr))
}

async fn delete_key_result(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.key_result_service.delete_key_result(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentValueUpdate {
    current_value: f64,
}

/// Periodic progress check-in for the numeric types.
async fn update_current_value(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<CurrentValueUpdate>,
) -> ApiResult<Json<KeyResultWithMetrics>> {
    let kr = state
        .key_result_service
        .update_current_value(&id, update.current_value)
        .await?;
    Ok(Json(kr))
}

#[derive(Deserialize)]
struct ChecklistItemUpdate {
    done: bool,
}

async fn set_checklist_item_done(
    Path((id, item_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<ChecklistItemUpdate>,
) -> ApiResult<Json<KeyResultWithMetrics>> {
    let kr = state
        .key_result_service
        .set_checklist_item_done(&id, &item_id, update.done)
        .await?;
    Ok(Json(kr))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/key-results",
            get(get_key_results)
                .post(create_key_result)
                .put(update_key_result),
        )
        .route(
            "/key-results/:id",
            get(get_key_result).delete(delete_key_result),
        )
        .route("/key-results/:id/current-value", put(update_current_value))
        .route(
            "/key-results/:id/checklist/:item_id",
            put(set_checklist_item_done),
        )
}
