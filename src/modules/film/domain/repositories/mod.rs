pub mod film_repository;
pub mod like_repository;
