use serde::{Deserialize, Serialize};

pub type MpaId = i32;

/// Motion Picture Association rating. Every film carries exactly one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mpa {
    pub id: MpaId,
    #[serde(default)]
    pub name: String,
}

impl Mpa {
    pub fn new(id: MpaId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn reference(id: MpaId) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }
}

impl std::fmt::Display for Mpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
