pub mod modules;
mod schema;
pub mod shared;

use modules::{
    catalog::{
        infrastructure::{
            InMemoryGenreRepository, InMemoryRatingRepository, GenreRepositoryImpl,
            RatingRepositoryImpl,
        },
        CatalogService, GenreRepository, RatingRepository,
    },
    film::{
        infrastructure::{
            FilmRepositoryImpl, InMemoryFilmRepository, InMemoryLikeRepository,
            LikeRepositoryImpl,
        },
        FilmRepository, FilmService, LikeRepository,
    },
    user::{
        infrastructure::{
            FriendshipRepositoryImpl, InMemoryFriendshipRepository, InMemoryUserRepository,
            UserRepositoryImpl,
        },
        FriendshipRepository, UserRepository, UserService,
    },
};
use shared::errors::{AppError, AppResult};
use shared::utils::logger::init_logger;
use shared::{AppConfig, Database, FilmPolicy, MemoryStore, StorageBackend};
use std::sync::Arc;

/// Every repository port, bound to one storage backend
struct Repositories {
    users: Arc<dyn UserRepository>,
    friendships: Arc<dyn FriendshipRepository>,
    films: Arc<dyn FilmRepository>,
    likes: Arc<dyn LikeRepository>,
    genres: Arc<dyn GenreRepository>,
    ratings: Arc<dyn RatingRepository>,
}

/// The services callers work with, wired to a storage backend
pub struct AppServices {
    pub users: Arc<UserService>,
    pub films: Arc<FilmService>,
    pub catalog: Arc<CatalogService>,
    backend: StorageBackend,
}

impl AppServices {
    /// Services backed by a fresh in-process store
    pub fn in_memory(policy: FilmPolicy) -> Self {
        Self::in_memory_with_store(Arc::new(MemoryStore::new()), policy)
    }

    pub fn in_memory_with_store(store: Arc<MemoryStore>, policy: FilmPolicy) -> Self {
        let repositories = Repositories {
            users: Arc::new(InMemoryUserRepository::new(Arc::clone(&store))),
            friendships: Arc::new(InMemoryFriendshipRepository::new(Arc::clone(&store))),
            films: Arc::new(InMemoryFilmRepository::new(Arc::clone(&store))),
            likes: Arc::new(InMemoryLikeRepository::new(Arc::clone(&store))),
            genres: Arc::new(InMemoryGenreRepository::new(Arc::clone(&store))),
            ratings: Arc::new(InMemoryRatingRepository::new(store)),
        };
        Self::assemble(repositories, policy, StorageBackend::Memory)
    }

    /// Services backed by PostgreSQL. The schema must already be migrated.
    pub fn postgres(database: Arc<Database>, policy: FilmPolicy) -> Self {
        let repositories = Repositories {
            users: Arc::new(UserRepositoryImpl::new(Arc::clone(&database))),
            friendships: Arc::new(FriendshipRepositoryImpl::new(Arc::clone(&database))),
            films: Arc::new(FilmRepositoryImpl::new(Arc::clone(&database))),
            likes: Arc::new(LikeRepositoryImpl::new(Arc::clone(&database))),
            genres: Arc::new(GenreRepositoryImpl::new(Arc::clone(&database))),
            ratings: Arc::new(RatingRepositoryImpl::new(database)),
        };
        Self::assemble(repositories, policy, StorageBackend::Postgres)
    }

    /// Build the backend selected by `config`, running migrations for PostgreSQL
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        match config.storage {
            StorageBackend::Memory => Ok(Self::in_memory(config.film_policy)),
            StorageBackend::Postgres => {
                let url = config.database_url.as_deref().ok_or_else(|| {
                    AppError::ConfigError("DATABASE_URL is required for postgres storage".to_string())
                })?;
                let database = Database::new(url, config.pool_size)?;
                database.run_migrations()?;
                Ok(Self::postgres(Arc::new(database), config.film_policy))
            }
        }
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }

    fn assemble(repos: Repositories, policy: FilmPolicy, backend: StorageBackend) -> Self {
        let users = Arc::new(UserService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.friendships),
        ));
        let films = Arc::new(FilmService::new(
            Arc::clone(&repos.films),
            Arc::clone(&repos.likes),
            Arc::clone(&repos.users),
            Arc::clone(&repos.genres),
            Arc::clone(&repos.ratings),
            policy,
        ));
        let catalog = Arc::new(CatalogService::new(repos.genres, repos.ratings));

        log::info!("Filmorate services ready ({} storage)", backend);

        Self {
            users,
            films,
            catalog,
            backend,
        }
    }
}

/// Initialize logging, read configuration from the environment and build the services
pub fn run() -> AppResult<AppServices> {
    init_logger();

    let config = AppConfig::from_env()?;
    AppServices::from_config(&config)
}
