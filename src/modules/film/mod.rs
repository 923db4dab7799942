pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::FilmService;
pub use domain::{Film, FilmId, FilmRepository, LikeRepository, NewFilm};
