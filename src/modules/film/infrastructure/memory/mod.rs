mod film_repository;
mod like_repository;

pub use film_repository::InMemoryFilmRepository;
pub use like_repository::InMemoryLikeRepository;
