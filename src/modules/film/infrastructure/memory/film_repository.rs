use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::log_debug;
use crate::modules::catalog::domain::Mpa;
use crate::modules::film::domain::{Film, FilmId, FilmRepository, NewFilm};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::MemoryState;
use crate::shared::MemoryStore;

pub struct InMemoryFilmRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryFilmRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

fn catalog_rating(state: &MemoryState, mpa: &Mpa) -> AppResult<Mpa> {
    state
        .ratings
        .get(&mpa.id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("MPA rating with ID {} not found", mpa.id)))
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn create(&self, film: NewFilm) -> AppResult<Film> {
        let mut state = self.store.write().await;
        let mpa = catalog_rating(&state, &film.mpa)?;
        let genres = state.resolve_genres(&film.genres)?;

        let mut film = film.into_film(self.store.next_film_id());
        film.mpa = mpa;
        film.genres = BTreeSet::new();
        state.films.insert(film.id, film.clone());
        state.replace_genre_links(film.id, &genres);

        log_debug!("Stored film {} in memory", film.id);
        film.genres = genres;
        Ok(film)
    }

    async fn update(&self, mut film: Film) -> AppResult<Film> {
        let mut state = self.store.write().await;
        if !state.films.contains_key(&film.id) {
            return Err(AppError::film_not_found(film.id));
        }

        film.mpa = catalog_rating(&state, &film.mpa)?;
        let genres = state.resolve_genres(&film.genres)?;

        film.genres = BTreeSet::new();
        state.films.insert(film.id, film.clone());
        state.replace_genre_links(film.id, &genres);

        film.genres = genres;
        Ok(film)
    }

    async fn get_by_id(&self, id: FilmId) -> AppResult<Film> {
        let state = self.store.read().await;
        state
            .films
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::film_not_found(id))
    }

    async fn get_all(&self) -> AppResult<Vec<Film>> {
        let state = self.store.read().await;
        Ok(state.films.values().cloned().collect())
    }

    async fn clear(&self) -> AppResult<()> {
        self.store.write().await.clear_films();
        Ok(())
    }
}
