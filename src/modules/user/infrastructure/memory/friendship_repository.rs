use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::user::domain::{FriendshipRepository, UserId};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::MemoryState;
use crate::shared::utils::logger::LogContext;
use crate::shared::MemoryStore;

pub struct InMemoryFriendshipRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryFriendshipRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

fn ensure_users_exist(state: &MemoryState, ids: &[UserId]) -> AppResult<()> {
    match ids.iter().find(|id| !state.users.contains_key(*id)) {
        Some(missing) => Err(AppError::user_not_found(*missing)),
        None => Ok(()),
    }
}

fn edge_not_found(owner: UserId, friend: UserId) -> AppError {
    AppError::NotFound(format!(
        "User with ID {} has no friend with ID {}",
        owner, friend
    ))
}

#[async_trait]
impl FriendshipRepository for InMemoryFriendshipRepository {
    async fn add_edge(&self, owner: UserId, friend: UserId) -> AppResult<()> {
        let mut state = self.store.write().await;
        ensure_users_exist(&state, &[owner, friend])?;

        state.friendships.insert((owner, friend));
        LogContext::edge_change("friendship", "add", owner, friend);
        Ok(())
    }

    async fn remove_edge(&self, owner: UserId, friend: UserId) -> AppResult<()> {
        let mut state = self.store.write().await;
        if !state.friendships.remove(&(owner, friend)) {
            return Err(edge_not_found(owner, friend));
        }

        LogContext::edge_change("friendship", "remove", owner, friend);
        Ok(())
    }

    async fn friends_of(&self, owner: UserId) -> AppResult<BTreeSet<UserId>> {
        let state = self.store.read().await;
        Ok(state.friends_of(owner))
    }

    async fn add_mutual(&self, a: UserId, b: UserId) -> AppResult<()> {
        let mut state = self.store.write().await;
        ensure_users_exist(&state, &[a, b])?;

        state.friendships.insert((a, b));
        state.friendships.insert((b, a));
        LogContext::edge_change("friendship", "add mutual", a, b);
        Ok(())
    }

    async fn remove_mutual(&self, a: UserId, b: UserId) -> AppResult<()> {
        let mut state = self.store.write().await;
        if !state.friendships.remove(&(a, b)) {
            return Err(edge_not_found(a, b));
        }
        state.friendships.remove(&(b, a));

        LogContext::edge_change("friendship", "remove mutual", a, b);
        Ok(())
    }
}
