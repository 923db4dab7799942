pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::genre::{Genre, GenreId};
pub use entities::mpa::{Mpa, MpaId};
pub use repositories::genre_repository::GenreRepository;
pub use repositories::rating_repository::RatingRepository;

#[cfg(test)]
pub use repositories::genre_repository::MockGenreRepository;
#[cfg(test)]
pub use repositories::rating_repository::MockRatingRepository;
