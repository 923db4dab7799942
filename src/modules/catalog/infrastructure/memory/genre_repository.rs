use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::catalog::domain::{Genre, GenreId, GenreRepository};
use crate::modules::film::domain::FilmId;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::MemoryStore;

pub struct InMemoryGenreRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryGenreRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn all_genres(&self) -> AppResult<Vec<Genre>> {
        let state = self.store.read().await;
        Ok(state.genres.values().cloned().collect())
    }

    async fn genre_by_id(&self, id: GenreId) -> AppResult<Genre> {
        let state = self.store.read().await;
        state
            .genres
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Genre with ID {} not found", id)))
    }

    async fn replace_film_genres(&self, film_id: FilmId, genres: &BTreeSet<Genre>) -> AppResult<()> {
        let mut state = self.store.write().await;

        if !state.films.contains_key(&film_id) {
            return Err(AppError::film_not_found(film_id));
        }
        let genres = state.resolve_genres(genres)?;
        state.replace_genre_links(film_id, &genres);
        Ok(())
    }

    async fn genres_of_film(&self, film_id: FilmId) -> AppResult<BTreeSet<Genre>> {
        let state = self.store.read().await;
        Ok(state.genres_of(film_id))
    }

    async fn genres_of_films(
        &self,
        film_ids: &[FilmId],
    ) -> AppResult<HashMap<FilmId, BTreeSet<Genre>>> {
        let state = self.store.read().await;
        Ok(film_ids
            .iter()
            .map(|id| (*id, state.genres_of(*id)))
            .filter(|(_, genres)| !genres.is_empty())
            .collect())
    }
}
