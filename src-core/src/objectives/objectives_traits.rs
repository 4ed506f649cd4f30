use async_trait::async_trait;

use crate::errors::Result;
use crate::objectives::objectives_model::{NewObjective, Objective};

#[async_trait]
pub trait ObjectiveRepositoryTrait: Send + Sync {
    fn load_objectives(&self) -> Result<Vec<Objective>>;
    fn get_objective(&self, objective_id: &str) -> Result<Option<Objective>>;
    async fn insert_new_objective(&self, objective: Objective) -> Result<Objective>;
    async fn update_objective(&self, objective: Objective) -> Result<Objective>;
    async fn delete_objective(&self, objective_id: String) -> Result<usize>;
}

#[async_trait]
pub trait ObjectiveServiceTrait: Send + Sync {
    fn get_objectives(&self) -> Result<Vec<Objective>>;
    fn get_objective(&self, objective_id: &str) -> Result<Objective>;
    async fn create_objective(&self, new_objective: NewObjective) -> Result<Objective>;
    async fn update_objective(&self, objective: Objective) -> Result<Objective>;
    async fn delete_objective(&self, objective_id: String) -> Result<usize>;
}
