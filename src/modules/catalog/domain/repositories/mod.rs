pub mod genre_repository;
pub mod rating_repository;
