use crate::modules::catalog::domain::Mpa;
use crate::modules::catalog::infrastructure::models::MpaModel;
use crate::modules::film::domain::{Film, NewFilm};
use crate::schema::{films, likes};
use chrono::NaiveDate;
use diesel::prelude::*;
use std::collections::BTreeSet;

// ============= FILM MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = films)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FilmModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub mpa_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = films)]
pub struct NewFilmModel {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub mpa_id: i32,
}

// Full overwrite of an existing film (excludes id)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = films)]
pub struct FilmChangeset {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub mpa_id: i32,
}

// ============= LIKES =============

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = likes)]
pub struct NewLike {
    pub film_id: i64,
    pub user_id: i64,
}

impl FilmModel {
    /// Film record joined with its rating; genres are attached by the caller
    pub fn into_film(self, mpa: MpaModel) -> Film {
        Film {
            id: self.id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            mpa: Mpa::from(mpa),
            genres: BTreeSet::new(),
        }
    }
}

impl From<NewFilm> for NewFilmModel {
    fn from(film: NewFilm) -> Self {
        NewFilmModel {
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
            mpa_id: film.mpa.id,
        }
    }
}

impl From<Film> for FilmChangeset {
    fn from(film: Film) -> Self {
        FilmChangeset {
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
            mpa_id: film.mpa.id,
        }
    }
}
