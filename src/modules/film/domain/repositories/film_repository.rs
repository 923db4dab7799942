use async_trait::async_trait;

use crate::modules::film::domain::entities::film::{Film, FilmId, NewFilm};
use crate::shared::errors::AppResult;

/// Entity store for films.
///
/// Writes store the film row and its genre links together: either both land
/// or neither does, and the written film comes back with catalog names.
/// Reads return the MPA rating only; genre sets are read through
/// `GenreRepository`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// `NotFound` for an unknown rating or genre
    async fn create(&self, film: NewFilm) -> AppResult<Film>;
    /// Full overwrite of an existing record including its genre set;
    /// `NotFound` if the id is absent
    async fn update(&self, film: Film) -> AppResult<Film>;
    async fn get_by_id(&self, id: FilmId) -> AppResult<Film>;
    /// Ascending by id
    async fn get_all(&self) -> AppResult<Vec<Film>>;
    /// Remove every film together with its likes and genre links
    async fn clear(&self) -> AppResult<()>;
}
