use std::sync::Arc;

use async_trait::async_trait;

use crate::log_debug;
use crate::modules::user::domain::{NewUser, User, UserId, UserRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::MemoryStore;

pub struct InMemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut state = self.store.write().await;
        let user = user.into_user(self.store.next_user_id());
        state.users.insert(user.id, user.clone());

        log_debug!("Stored user {} in memory", user.id);
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut state = self.store.write().await;
        match state.users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(AppError::user_not_found(user.id)),
        }
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        let state = self.store.read().await;
        state
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::user_not_found(id))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        let state = self.store.read().await;
        let mut users: Vec<User> = ids
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect();
        users.sort_by_key(|u| u.id);
        users.dedup_by_key(|u| u.id);
        Ok(users)
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let state = self.store.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn clear(&self) -> AppResult<()> {
        self.store.write().await.clear_users();
        Ok(())
    }
}
