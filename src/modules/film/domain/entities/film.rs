use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{Genre, Mpa};

pub type FilmId = i64;

/// A film with its MPA rating and genre set.
///
/// Genres are kept ordered by id so a film reads back identically however
/// the set was supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: FilmId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    /// Minutes
    pub duration: i64,
    pub mpa: Mpa,
    #[serde(default)]
    pub genres: BTreeSet<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewFilm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub mpa: Mpa,
    #[serde(default)]
    pub genres: BTreeSet<Genre>,
}

impl NewFilm {
    pub fn new(name: impl Into<String>, release_date: NaiveDate, duration: i64, mpa: Mpa) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            release_date,
            duration,
            mpa,
            genres: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = Genre>) -> Self {
        self.genres = genres.into_iter().collect();
        self
    }

    pub fn into_film(self, id: FilmId) -> Film {
        Film {
            id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            mpa: self.mpa,
            genres: self.genres,
        }
    }
}
