use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::modules::user::domain::entities::user::UserId;
use crate::shared::errors::AppResult;

/// Directed friendship edges `(owner, friend)`.
///
/// Single-edge operations store exactly what they are told. The `*_mutual`
/// operations touch both directions as one unit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Idempotent; `NotFound` if either user is missing
    async fn add_edge(&self, owner: UserId, friend: UserId) -> AppResult<()>;
    /// `NotFound` if the edge is absent
    async fn remove_edge(&self, owner: UserId, friend: UserId) -> AppResult<()>;
    async fn friends_of(&self, owner: UserId) -> AppResult<BTreeSet<UserId>>;

    /// Store `(a, b)` and `(b, a)` together
    async fn add_mutual(&self, a: UserId, b: UserId) -> AppResult<()>;
    /// Remove `(a, b)`, which must exist, and `(b, a)` if present
    async fn remove_mutual(&self, a: UserId, b: UserId) -> AppResult<()>;
}
