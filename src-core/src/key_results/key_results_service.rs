use crate::errors::{Error, Result, ValidationError};
use crate::key_results::key_results_model::{KeyResult, KrType, NewKeyResult};
use crate::key_results::key_results_traits::{KeyResultRepositoryTrait, KeyResultServiceTrait};
use crate::key_results::kr_metrics::{parse_checklist, KeyResultWithMetrics};
use async_trait::async_trait;
use std::sync::Arc;

pub struct KeyResultService<T: KeyResultRepositoryTrait> {
    key_result_repo: Arc<T>,
}

impl<T: KeyResultRepositoryTrait> KeyResultService<T> {
    pub fn new(key_result_repo: Arc<T>) -> Self {
        KeyResultService { key_result_repo }
    }

    /// Attaches computed metrics, logging the unrecognized-type case as a
    /// data-integrity signal (the computation itself degrades safely).
    fn with_metrics(&self, key_result: KeyResult) -> KeyResultWithMetrics {
        if KrType::parse(&key_result.kr_type).is_none() {
            log::warn!(
                "Key result {} has unrecognized type '{}', reporting worst-case metrics",
                key_result.id,
                key_result.kr_type
            );
        }
        KeyResultWithMetrics::from(key_result)
    }

    fn load_or_not_found(&self, key_result_id: &str) -> Result<KeyResult> {
        self.key_result_repo
            .get_key_result(key_result_id)?
            .ok_or_else(|| {
                Error::Validation(ValidationError::NotFound(format!(
                    "Key result '{}' not found",
                    key_result_id
                )))
            })
    }
}

#[async_trait]
impl<T: KeyResultRepositoryTrait + Send + Sync> KeyResultServiceTrait for KeyResultService<T> {
    fn get_key_results(&self) -> Result<Vec<KeyResultWithMetrics>> {
        let key_results = self.key_result_repo.load_key_results()?;
        Ok(key_results
            .into_iter()
            .map(|kr| self.with_metrics(kr))
            .collect())
    }

    fn get_key_results_for_objective(
        &self,
        objective_id: &str,
    ) -> Result<Vec<KeyResultWithMetrics>> {
        let key_results = self
            .key_result_repo
            .load_key_results_for_objective(objective_id)?;
        Ok(key_results
            .into_iter()
            .map(|kr| self.with_metrics(kr))
            .collect())
    }

    fn get_key_result(&self, key_result_id: &str) -> Result<KeyResultWithMetrics> {
        let key_result = self.load_or_not_found(key_result_id)?;
        Ok(self.with_metrics(key_result))
    }

    async fn create_key_result(
        &self,
        new_key_result: NewKeyResult,
    ) -> Result<KeyResultWithMetrics> {
        let mut key_result = new_key_result.into_key_result();
        key_result.sanitize_by_type();
        let inserted = self.key_result_repo.insert_new_key_result(key_result).await?;
        Ok(self.with_metrics(inserted))
    }

    async fn update_key_result(&self, key_result: KeyResult) -> Result<KeyResultWithMetrics> {
        // Full-record replace. Sanitizing here covers type switches: fields
        // owned by the previous type are nulled before they hit storage.
        let existing = self.load_or_not_found(&key_result.id)?;

        let mut updated = key_result;
        updated.created_at = existing.created_at;
        updated.updated_at = chrono::Utc::now().naive_utc();
        updated.sanitize_by_type();

        let saved = self.key_result_repo.update_key_result(updated).await?;
        Ok(self.with_metrics(saved))
    }

    async fn update_current_value(
        &self,
        key_result_id: &str,
        current_value: f64,
    ) -> Result<KeyResultWithMetrics> {
        let mut key_result = self.load_or_not_found(key_result_id)?;

        match KrType::parse(&key_result.kr_type) {
            Some(KrType::Aumento) | Some(KrType::Reducao) | Some(KrType::Limiar) => {}
            _ => {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Key result '{}' of type '{}' does not track a current value",
                    key_result_id, key_result.kr_type
                ))));
            }
        }

        key_result.current_value = Some(current_value);
        key_result.updated_at = chrono::Utc::now().naive_utc();
        let saved = self.key_result_repo.update_key_result(key_result).await?;
        Ok(self.with_metrics(saved))
    }

    async fn set_checklist_item_done(
        &self,
        key_result_id: &str,
        item_id: &str,
        done: bool,
    ) -> Result<KeyResultWithMetrics> {
        let mut key_result = self.load_or_not_found(key_result_id)?;

        if KrType::parse(&key_result.kr_type) != Some(KrType::Entregavel) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Key result '{}' of type '{}' has no checklist",
                key_result_id, key_result.kr_type
            ))));
        }

        let mut items = parse_checklist(key_result.checklist_json.as_deref());
        let item = items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| {
                Error::Validation(ValidationError::NotFound(format!(
                    "Checklist item '{}' not found on key result '{}'",
                    item_id, key_result_id
                )))
            })?;
        item.done = done;

        key_result.checklist_json = Some(serde_json::to_string(&items).map_err(|e| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Failed to serialize checklist: {}",
                e
            )))
        })?);
        key_result.updated_at = chrono::Utc::now().naive_utc();

        let saved = self.key_result_repo.update_key_result(key_result).await?;
        Ok(self.with_metrics(saved))
    }

    async fn delete_key_result(&self, key_result_id: String) -> Result<usize> {
        self.key_result_repo.delete_key_result(key_result_id).await
    }
}
