pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::film::{Film, FilmId, NewFilm};
pub use repositories::film_repository::FilmRepository;
pub use repositories::like_repository::LikeRepository;

#[cfg(test)]
pub use repositories::film_repository::MockFilmRepository;
#[cfg(test)]
pub use repositories::like_repository::MockLikeRepository;
