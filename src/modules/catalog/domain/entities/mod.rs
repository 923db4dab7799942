pub mod fixtures;
pub mod genre;
pub mod mpa;
