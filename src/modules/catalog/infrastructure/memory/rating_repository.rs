use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::catalog::domain::{Mpa, MpaId, RatingRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::MemoryStore;

pub struct InMemoryRatingRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryRatingRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn all_ratings(&self) -> AppResult<Vec<Mpa>> {
        let state = self.store.read().await;
        Ok(state.ratings.values().cloned().collect())
    }

    async fn rating_by_id(&self, id: MpaId) -> AppResult<Mpa> {
        let state = self.store.read().await;
        state
            .ratings
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("MPA rating with ID {} not found", id)))
    }
}
