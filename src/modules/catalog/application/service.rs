use super::super::domain::{Genre, GenreId, GenreRepository, Mpa, MpaId, RatingRepository};
use crate::log_debug;
use crate::shared::errors::AppResult;
use std::sync::Arc;

/// Read access to the fixed genre and MPA rating catalog
pub struct CatalogService {
    genre_repo: Arc<dyn GenreRepository>,
    rating_repo: Arc<dyn RatingRepository>,
}

impl CatalogService {
    pub fn new(genre_repo: Arc<dyn GenreRepository>, rating_repo: Arc<dyn RatingRepository>) -> Self {
        Self {
            genre_repo,
            rating_repo,
        }
    }

    pub async fn genres(&self) -> AppResult<Vec<Genre>> {
        let genres = self.genre_repo.all_genres().await?;
        log_debug!("Loaded {} genres", genres.len());
        Ok(genres)
    }

    pub async fn genre(&self, id: GenreId) -> AppResult<Genre> {
        self.genre_repo.genre_by_id(id).await
    }

    pub async fn ratings(&self) -> AppResult<Vec<Mpa>> {
        self.rating_repo.all_ratings().await
    }

    pub async fn rating(&self, id: MpaId) -> AppResult<Mpa> {
        self.rating_repo.rating_by_id(id).await
    }
}
