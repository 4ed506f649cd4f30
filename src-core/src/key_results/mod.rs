pub mod key_results_model;
pub mod key_results_repository;
pub mod key_results_service;
pub mod key_results_traits;
pub mod kr_metrics;

pub use kr_metrics::{compute_metrics, KeyResultWithMetrics, KrMetrics, KrMetricsInput, KrStatus};
