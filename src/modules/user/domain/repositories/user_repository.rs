use async_trait::async_trait;

use crate::modules::user::domain::entities::user::{NewUser, User, UserId};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under the next identifier
    async fn create(&self, user: NewUser) -> AppResult<User>;
    /// Full overwrite of an existing record; `NotFound` if the id is absent
    async fn update(&self, user: User) -> AppResult<User>;
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;
    /// Users among `ids` that exist, ascending by id
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;
    async fn get_all(&self) -> AppResult<Vec<User>>;
    /// Remove every user and, transitively, every friendship and like
    async fn clear(&self) -> AppResult<()>;
}
