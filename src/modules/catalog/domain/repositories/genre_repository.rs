use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::modules::catalog::domain::entities::genre::{Genre, GenreId};
use crate::modules::film::domain::FilmId;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Whole catalog, ascending by id
    async fn all_genres(&self) -> AppResult<Vec<Genre>>;
    /// Fails with `NotFound` for an unknown id
    async fn genre_by_id(&self, id: GenreId) -> AppResult<Genre>;

    /// Replace the genre set of a film. An empty set removes every link.
    /// The old set is never partially visible next to the new one.
    /// `FilmRepository` writes do the same as part of the film write.
    async fn replace_film_genres(&self, film_id: FilmId, genres: &BTreeSet<Genre>) -> AppResult<()>;
    async fn genres_of_film(&self, film_id: FilmId) -> AppResult<BTreeSet<Genre>>;
    /// Batched variant used when materializing film lists; films without
    /// genres may be absent from the map
    async fn genres_of_films(&self, film_ids: &[FilmId])
        -> AppResult<HashMap<FilmId, BTreeSet<Genre>>>;
}
