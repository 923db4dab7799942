use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::film::domain::{FilmId, LikeRepository};
use crate::modules::user::domain::UserId;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::MemoryStore;

pub struct InMemoryLikeRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryLikeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        let mut state = self.store.write().await;
        if !state.films.contains_key(&film_id) {
            return Err(AppError::film_not_found(film_id));
        }
        if !state.users.contains_key(&user_id) {
            return Err(AppError::user_not_found(user_id));
        }

        state.likes.insert((film_id, user_id));
        LogContext::edge_change("like", "add", film_id, user_id);
        Ok(())
    }

    async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        let mut state = self.store.write().await;
        if !state.likes.remove(&(film_id, user_id)) {
            return Err(AppError::NotFound(format!(
                "User with ID {} has not liked film with ID {}",
                user_id, film_id
            )));
        }

        LogContext::edge_change("like", "remove", film_id, user_id);
        Ok(())
    }

    async fn likes_of(&self, film_id: FilmId) -> AppResult<BTreeSet<UserId>> {
        let state = self.store.read().await;
        Ok(state.likes_of(film_id))
    }

    async fn like_count_of(&self, film_id: FilmId) -> AppResult<usize> {
        let state = self.store.read().await;
        Ok(state.likes_of(film_id).len())
    }

    async fn like_counts(&self) -> AppResult<HashMap<FilmId, usize>> {
        let state = self.store.read().await;
        let mut counts = HashMap::new();
        for (film_id, _) in state.likes.iter() {
            *counts.entry(*film_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
