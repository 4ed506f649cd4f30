use async_trait::async_trait;

use crate::errors::Result;
use crate::key_results::key_results_model::{KeyResult, NewKeyResult};
use crate::key_results::kr_metrics::KeyResultWithMetrics;

/// Storage contract for Key Result rows. Reads are synchronous pool
/// lookups; writes are async so implementations can defer or batch.
#[async_trait]
pub trait KeyResultRepositoryTrait: Send + Sync {
    fn load_key_results(&self) -> Result<Vec<KeyResult>>;
    fn load_key_results_for_objective(&self, objective_id: &str) -> Result<Vec<KeyResult>>;
    fn get_key_result(&self, key_result_id: &str) -> Result<Option<KeyResult>>;
    async fn insert_new_key_result(&self, key_result: KeyResult) -> Result<KeyResult>;
    async fn update_key_result(&self, key_result: KeyResult) -> Result<KeyResult>;
    async fn delete_key_result(&self, key_result_id: String) -> Result<usize>;
}

/// Service contract consumed by the API layer. Every returned record
/// carries freshly computed metrics.
#[async_trait]
pub trait KeyResultServiceTrait: Send + Sync {
    fn get_key_results(&self) -> Result<Vec<KeyResultWithMetrics>>;
    fn get_key_results_for_objective(
        &self,
        objective_id: &str,
    ) -> Result<Vec<KeyResultWithMetrics>>;
    fn get_key_result(&self, key_result_id: &str) -> Result<KeyResultWithMetrics>;
    async fn create_key_result(&self, new_key_result: NewKeyResult)
        -> Result<KeyResultWithMetrics>;
    async fn update_key_result(&self, key_result: KeyResult) -> Result<KeyResultWithMetrics>;
    async fn update_current_value(
        &self,
        key_result_id: &str,
        current_value: f64,
    ) -> Result<KeyResultWithMetrics>;
    async fn set_checklist_item_done(
        &self,
        key_result_id: &str,
        item_id: &str,
        done: bool,
    ) -> Result<KeyResultWithMetrics>;
    async fn delete_key_result(&self, key_result_id: String) -> Result<usize>;
}
