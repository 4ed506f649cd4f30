use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::DbPool;
use crate::errors::Result;
use crate::key_results::key_results_model::KeyResult;
use crate::key_results::key_results_traits::KeyResultRepositoryTrait;
use crate::schema::key_results;

pub struct KeyResultRepository {
    pool: Arc<DbPool>,
}

impl KeyResultRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        KeyResultRepository { pool }
    }
}

#[async_trait]
impl KeyResultRepositoryTrait for KeyResultRepository {
    fn load_key_results(&self) -> Result<Vec<KeyResult>> {
        let mut conn = self.pool.get()?;
        Ok(key_results::table
            .order(key_results::created_at.asc())
            .load::<KeyResult>(&mut conn)?)
    }

    fn load_key_results_for_objective(&self, objective_id: &str) -> Result<Vec<KeyResult>> {
        let mut conn = self.pool.get()?;
        Ok(key_results::table
            .filter(key_results::objective_id.eq(objective_id))
            .order(key_results::created_at.asc())
            .load::<KeyResult>(&mut conn)?)
    }

    fn get_key_result(&self, key_result_id: &str) -> Result<Option<KeyResult>> {
        let mut conn = self.pool.get()?;
        Ok(key_results::table
            .find(key_result_id)
            .first::<KeyResult>(&mut conn)
            .optional()?)
    }

    async fn insert_new_key_result(&self, key_result: KeyResult) -> Result<KeyResult> {
        let mut conn = self.pool.get()?;
        Ok(diesel::insert_into(key_results::table)
            .values(&key_result)
            .get_result(&mut conn)?)
    }

    async fn update_key_result(&self, key_result: KeyResult) -> Result<KeyResult> {
        let mut conn = self.pool.get()?;
        Ok(diesel::update(key_results::table.find(key_result.id.clone()))
            .set(&key_result)
            .get_result(&mut conn)?)
    }

    async fn delete_key_result(&self, key_result_id: String) -> Result<usize> {
        let mut conn = self.pool.get()?;
        Ok(diesel::delete(key_results::table.find(key_result_id)).execute(&mut conn)?)
    }
}
