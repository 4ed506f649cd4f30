use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stratmap_core::key_results::key_results_traits::KeyResultServiceTrait;
use stratmap_core::key_results::KeyResultWithMetrics;
use stratmap_core::objectives::objectives_model::{NewObjective, Objective};
use stratmap_core::objectives::objectives_traits::ObjectiveServiceTrait;

async fn get_objectives(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Objective>>> {
    let objectives = state.objective_service.get_objectives()?;
    Ok(Json(objectives))
}

async fn get_objective(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Objective>> {
    let objective = state.objective_service.get_objective(&id)?;
    Ok(Json(objective))
}

async fn create_objective(
    State(state): State<Arc<AppState>>,
    Json(new_objective): Json<NewObjective>,
) -> ApiResult<Json<Objective>> {
    let objective = state.objective_service.create_objective(new_objective).await?;
    Ok(Json(objective))
}

async fn update_objective(
    State(state): State<Arc<AppState>>,
    Json(objective): Json<Objective>,
) -> ApiResult<Json<Objective>> {
    let objective = state.objective_service.update_objective(objective).await?;
    Ok(Json(objective))
}

async fn delete_objective(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.objective_service.delete_objective(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Key results attached to one strategy-map node, metrics included.
async fn get_objective_key_results(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<KeyResultWithMetrics>>> {
    // 404 on a dangling objective id rather than an empty list
    let _ = state.objective_service.get_objective(&id)?;
    let key_results = state.key_result_service.get_key_results_for_objective(&id)?;
    Ok(Json(key_results))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/objectives",
            get(get_objectives).post(create_objective).put(update_objective),
        )
        .route("/objectives/:id", get(get_objective).delete(delete_objective))
        .route("/objectives/:id/key-results", get(get_objective_key_results))
}
