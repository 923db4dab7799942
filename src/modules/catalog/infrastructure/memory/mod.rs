mod genre_repository;
mod rating_repository;

pub use genre_repository::InMemoryGenreRepository;
pub use rating_repository::InMemoryRatingRepository;
