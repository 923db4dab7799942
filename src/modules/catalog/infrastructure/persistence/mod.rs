pub mod genre_repository_impl;
pub mod rating_repository_impl;

pub use genre_repository_impl::GenreRepositoryImpl;
pub use rating_repository_impl::RatingRepositoryImpl;
