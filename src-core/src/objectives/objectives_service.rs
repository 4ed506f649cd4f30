use crate::errors::{Error, Result, ValidationError};
use crate::objectives::objectives_model::{NewObjective, Objective};
use crate::objectives::objectives_traits::{ObjectiveRepositoryTrait, ObjectiveServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct ObjectiveService<T: ObjectiveRepositoryTrait> {
    objective_repo: Arc<T>,
}

impl<T: ObjectiveRepositoryTrait> ObjectiveService<T> {
    pub fn new(objective_repo: Arc<T>) -> Self {
        ObjectiveService { objective_repo }
    }
}

#[async_trait]
impl<T: ObjectiveRepositoryTrait + Send + Sync> ObjectiveServiceTrait for ObjectiveService<T> {
    fn get_objectives(&self) -> Result<Vec<Objective>> {
        self.objective_repo.load_objectives()
    }

    fn get_objective(&self, objective_id: &str) -> Result<Objective> {
        self.objective_repo.get_objective(objective_id)?.ok_or_else(|| {
            Error::Validation(ValidationError::NotFound(format!(
                "Objective '{}' not found",
                objective_id
            )))
        })
    }

    async fn create_objective(&self, new_objective: NewObjective) -> Result<Objective> {
        if new_objective.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Objective title must not be empty".to_string(),
            )));
        }
        self.objective_repo
            .insert_new_objective(new_objective.into_objective())
            .await
    }

    async fn update_objective(&self, objective: Objective) -> Result<Objective> {
        let existing = self.get_objective(&objective.id)?;

        let mut updated = objective;
        updated.created_at = existing.created_at;
        updated.updated_at = chrono::Utc::now().naive_utc();
        self.objective_repo.update_objective(updated).await
    }

    async fn delete_objective(&self, objective_id: String) -> Result<usize> {
        self.objective_repo.delete_objective(objective_id).await
    }
}
