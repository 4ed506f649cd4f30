use std::sync::Arc;

use axum::Router;
use stratmap_core::db::DbPool;
use stratmap_core::key_results::key_results_repository::KeyResultRepository;
use stratmap_core::key_results::key_results_service::KeyResultService;
use stratmap_core::objectives::objectives_repository::ObjectiveRepository;
use stratmap_core::objectives::objectives_service::ObjectiveService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;

pub struct AppState {
    pub key_result_service: KeyResultService<KeyResultRepository>,
    pub objective_service: ObjectiveService<ObjectiveRepository>,
}

impl AppState {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AppState {
            key_result_service: KeyResultService::new(Arc::new(KeyResultRepository::new(
                pool.clone(),
            ))),
            objective_service: ObjectiveService::new(Arc::new(ObjectiveRepository::new(pool))),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
