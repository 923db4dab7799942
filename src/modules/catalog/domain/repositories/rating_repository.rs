use async_trait::async_trait;

use crate::modules::catalog::domain::entities::mpa::{Mpa, MpaId};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn all_ratings(&self) -> AppResult<Vec<Mpa>>;
    async fn rating_by_id(&self, id: MpaId) -> AppResult<Mpa>;
}
