pub mod popularity;

pub use popularity::rank_by_popularity;
