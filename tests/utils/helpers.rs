/// Test helper functions and service builders
use super::test_db::TestDb;
use filmorate::modules::film::{Film, FilmId};
use filmorate::modules::user::{User, UserId};
use filmorate::shared::{FilmPolicy, MemoryStore};
use filmorate::AppServices;
use std::sync::Arc;

/// Services over a fresh in-memory store
pub fn build_memory_services() -> AppServices {
    filmorate::shared::utils::init_logger();
    AppServices::in_memory_with_store(Arc::new(MemoryStore::new()), FilmPolicy::default())
}

/// Services over an isolated, migrated PostgreSQL database
pub fn build_postgres_services(test_db: &TestDb) -> AppServices {
    filmorate::shared::utils::init_logger();
    AppServices::postgres(test_db.database(), FilmPolicy::default())
}

pub fn user_ids(users: &[User]) -> Vec<UserId> {
    users.iter().map(|u| u.id).collect()
}

pub fn film_ids(films: &[Film]) -> Vec<FilmId> {
    films.iter().map(|f| f.id).collect()
}
