/// Reference data shipped with every backend.
///
/// The PostgreSQL migration seeds exactly these rows; keep both in sync.
use super::genre::Genre;
use super::mpa::Mpa;

pub fn default_genres() -> Vec<Genre> {
    vec![
        Genre::new(1, "Comedy"),
        Genre::new(2, "Drama"),
        Genre::new(3, "Animation"),
        Genre::new(4, "Thriller"),
        Genre::new(5, "Documentary"),
        Genre::new(6, "Action"),
    ]
}

pub fn default_ratings() -> Vec<Mpa> {
    vec![
        Mpa::new(1, "G"),
        Mpa::new(2, "PG"),
        Mpa::new(3, "PG-13"),
        Mpa::new(4, "R"),
        Mpa::new(5, "NC-17"),
    ]
}
