use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

pub mod key_results;
pub mod objectives;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(key_results::router())
        .merge(objectives::router())
}
