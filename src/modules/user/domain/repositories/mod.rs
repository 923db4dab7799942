pub mod friendship_repository;
pub mod user_repository;
