use crate::modules::catalog::domain::{Genre, Mpa};
use crate::schema::{film_genres, genres, mpa};
use diesel::prelude::*;

// ============= CATALOG MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenreModel {
    pub id: i32,
    pub name: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = mpa)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MpaModel {
    pub id: i32,
    pub name: String,
}

// ============= FILM-GENRE ASSOCIATION =============

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = film_genres)]
pub struct NewFilmGenre {
    pub film_id: i64,
    pub genre_id: i32,
}

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre::new(model.id, model.name)
    }
}

impl From<MpaModel> for Mpa {
    fn from(model: MpaModel) -> Self {
        Mpa::new(model.id, model.name)
    }
}
