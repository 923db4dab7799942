use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::modules::film::domain::entities::film::FilmId;
use crate::modules::user::domain::UserId;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Idempotent; `NotFound` if the film or the user is missing
    async fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()>;
    /// `NotFound` if the user never liked the film
    async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()>;
    async fn likes_of(&self, film_id: FilmId) -> AppResult<BTreeSet<UserId>>;
    async fn like_count_of(&self, film_id: FilmId) -> AppResult<usize>;
    /// Like counts of every film that has at least one like
    async fn like_counts(&self) -> AppResult<HashMap<FilmId, usize>>;
}
