pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::{InMemoryGenreRepository, InMemoryRatingRepository};
pub use persistence::{GenreRepositoryImpl, RatingRepositoryImpl};
