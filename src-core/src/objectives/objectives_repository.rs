use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::DbPool;
use crate::errors::Result;
use crate::objectives::objectives_model::Objective;
use crate::objectives::objectives_traits::ObjectiveRepositoryTrait;
use crate::schema::objectives;

pub struct ObjectiveRepository {
    pool: Arc<DbPool>,
}

impl ObjectiveRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ObjectiveRepository { pool }
    }
}

#[async_trait]
impl ObjectiveRepositoryTrait for ObjectiveRepository {
    fn load_objectives(&self) -> Result<Vec<Objective>> {
        let mut conn = self.pool.get()?;
        Ok(objectives::table
            .order(objectives::created_at.asc())
            .load::<Objective>(&mut conn)?)
    }

    fn get_objective(&self, objective_id: &str) -> Result<Option<Objective>> {
        let mut conn = self.pool.get()?;
        Ok(objectives::table
            .find(objective_id)
            .first::<Objective>(&mut conn)
            .optional()?)
    }

    async fn insert_new_objective(&self, objective: Objective) -> Result<Objective> {
        let mut conn = self.pool.get()?;
        Ok(diesel::insert_into(objectives::table)
            .values(&objective)
            .get_result(&mut conn)?)
    }

    async fn update_objective(&self, objective: Objective) -> Result<Objective> {
        let mut conn = self.pool.get()?;
        Ok(diesel::update(objectives::table.find(objective.id.clone()))
            .set(&objective)
            .get_result(&mut conn)?)
    }

    async fn delete_objective(&self, objective_id: String) -> Result<usize> {
        let mut conn = self.pool.get()?;
        Ok(diesel::delete(objectives::table.find(objective_id)).execute(&mut conn)?)
    }
}
