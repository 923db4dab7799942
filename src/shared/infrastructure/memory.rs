use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::log_debug;
use crate::modules::catalog::domain::entities::fixtures::{default_genres, default_ratings};
use crate::modules::catalog::domain::{Genre, GenreId, Mpa, MpaId};
use crate::modules::film::domain::{Film, FilmId};
use crate::modules::user::domain::{User, UserId};
use crate::shared::errors::{AppError, AppResult};

/// Every table of the memory backend.
///
/// Edge sets are keyed `(from, to)` so range scans over a prefix return one
/// owner's edges in id order.
#[derive(Debug, Default)]
pub struct MemoryState {
    pub users: BTreeMap<UserId, User>,
    /// Film records without their genre set; see `film_genres`
    pub films: BTreeMap<FilmId, Film>,
    /// Directed `(user, friend)` edges
    pub friendships: BTreeSet<(UserId, UserId)>,
    /// `(film, user)` pairs
    pub likes: BTreeSet<(FilmId, UserId)>,
    pub film_genres: BTreeSet<(FilmId, GenreId)>,
    pub genres: BTreeMap<GenreId, Genre>,
    pub ratings: BTreeMap<MpaId, Mpa>,
}

impl MemoryState {
    /// Drop all users together with every friendship and like that references them
    pub fn clear_users(&mut self) {
        self.users.clear();
        self.friendships.clear();
        self.likes.clear();
    }

    /// Drop all films together with their likes and genre links
    pub fn clear_films(&mut self) {
        self.films.clear();
        self.likes.clear();
        self.film_genres.clear();
    }

    pub fn friends_of(&self, owner: UserId) -> BTreeSet<UserId> {
        self.friendships
            .range((owner, UserId::MIN)..=(owner, UserId::MAX))
            .map(|(_, friend)| *friend)
            .collect()
    }

    pub fn likes_of(&self, film: FilmId) -> BTreeSet<UserId> {
        self.likes
            .range((film, UserId::MIN)..=(film, UserId::MAX))
            .map(|(_, user)| *user)
            .collect()
    }

    /// Catalog entries for caller-supplied genre references
    pub fn resolve_genres(&self, genres: &BTreeSet<Genre>) -> AppResult<BTreeSet<Genre>> {
        genres
            .iter()
            .map(|genre| {
                self.genres.get(&genre.id).cloned().ok_or_else(|| {
                    AppError::NotFound(format!("Genre with ID {} not found", genre.id))
                })
            })
            .collect()
    }

    pub fn replace_genre_links(&mut self, film: FilmId, genres: &BTreeSet<Genre>) {
        self.film_genres.retain(|(linked, _)| *linked != film);
        self.film_genres
            .extend(genres.iter().map(|genre| (film, genre.id)));
        log_debug!("Film {} now has {} genres", film, genres.len());
    }

    pub fn genres_of(&self, film: FilmId) -> BTreeSet<Genre> {
        self.film_genres
            .range((film, GenreId::MIN)..=(film, GenreId::MAX))
            .filter_map(|(_, genre_id)| self.genres.get(genre_id).cloned())
            .collect()
    }
}

/// In-process storage shared by all memory repositories.
///
/// One lock guards every table, so a multi-table change (both friendship
/// edges, a cascading clear) is observed whole or not at all. Id counters
/// live outside the lock and are never reset by a clear.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
    next_user_id: AtomicI64,
    next_film_id: AtomicI64,
}

impl MemoryStore {
    /// Empty store seeded with the built-in genre and rating catalog
    pub fn new() -> Self {
        Self::with_catalog(default_genres(), default_ratings())
    }

    pub fn with_catalog(genres: Vec<Genre>, ratings: Vec<Mpa>) -> Self {
        log_debug!(
            "Seeding memory store with {} genres and {} ratings",
            genres.len(),
            ratings.len()
        );

        let state = MemoryState {
            genres: genres.into_iter().map(|g| (g.id, g)).collect(),
            ratings: ratings.into_iter().map(|m| (m.id, m)).collect(),
            ..MemoryState::default()
        };

        Self {
            state: RwLock::new(state),
            next_user_id: AtomicI64::new(1),
            next_film_id: AtomicI64::new(1),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, MemoryState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, MemoryState> {
        self.state.write().await
    }

    pub fn next_user_id(&self) -> UserId {
        self.next_user_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn next_film_id(&self) -> FilmId {
        self.next_film_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
