// Bounded contexts

pub mod catalog; // Genre and MPA reference data, film-genre links
pub mod film; // Films, likes, popularity
pub mod user; // Users and friendships
