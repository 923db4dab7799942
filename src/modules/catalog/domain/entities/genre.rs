use serde::{Deserialize, Serialize};

pub type GenreId = i32;

/// A genre tag from the fixed catalog.
///
/// Callers may reference a genre by id alone (`name` left empty); the film
/// service replaces such references with the catalog entry before storing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Genre {
    pub id: GenreId,
    #[serde(default)]
    pub name: String,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Reference by id only, as sent by API callers
    pub fn reference(id: GenreId) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
