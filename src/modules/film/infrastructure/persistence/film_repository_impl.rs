use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::catalog::domain::{Genre, GenreId};
use crate::modules::catalog::infrastructure::models::MpaModel;
use crate::modules::catalog::infrastructure::persistence::genre_repository_impl::replace_genre_links;
use crate::modules::film::domain::{Film, FilmId, FilmRepository, NewFilm};
use crate::modules::film::infrastructure::models::{FilmChangeset, FilmModel, NewFilmModel};
use crate::schema::{films, mpa};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct FilmRepositoryImpl {
    db: Arc<Database>,
}

impl FilmRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn load_rating(conn: &mut PgConnection, mpa_id: i32) -> AppResult<MpaModel> {
    mpa::table
        .find(mpa_id)
        .select(MpaModel::as_select())
        .first::<MpaModel>(conn)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("MPA rating with ID {} not found", mpa_id)))
}

fn linked_genre_ids(genre_set: &BTreeSet<Genre>) -> Vec<GenreId> {
    genre_set.iter().map(|g| g.id).collect()
}

#[async_trait]
impl FilmRepository for FilmRepositoryImpl {
    async fn create(&self, film: NewFilm) -> AppResult<Film> {
        let db = Arc::clone(&self.db);
        let genre_ids = linked_genre_ids(&film.genres);
        let new_model = NewFilmModel::from(film);

        task::spawn_blocking(move || -> AppResult<Film> {
            let start = std::time::Instant::now();
            let mut conn = db.get_connection()?;

            let created = conn.transaction::<_, AppError, _>(|conn| {
                let rating = load_rating(conn, new_model.mpa_id)?;
                let model = diesel::insert_into(films::table)
                    .values(&new_model)
                    .returning(FilmModel::as_returning())
                    .get_result::<FilmModel>(conn)?;
                log_debug!("Inserted film {}", model.id);

                let linked = replace_genre_links(conn, model.id, &genre_ids)?;
                let mut film = model.into_film(rating);
                film.genres = linked;
                Ok(film)
            })?;

            LogContext::db_operation(
                "insert",
                "films",
                Some(start.elapsed().as_millis() as u64),
            );
            Ok(created)
        })
        .await?
    }

    async fn update(&self, film: Film) -> AppResult<Film> {
        let db = Arc::clone(&self.db);
        let id = film.id;
        let genre_ids = linked_genre_ids(&film.genres);
        let changeset = FilmChangeset::from(film);

        task::spawn_blocking(move || -> AppResult<Film> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let exists = films::table
                    .filter(films::id.eq(id))
                    .count()
                    .get_result::<i64>(conn)?;
                if exists == 0 {
                    return Err(AppError::film_not_found(id));
                }

                let rating = load_rating(conn, changeset.mpa_id)?;
                let model = diesel::update(films::table.find(id))
                    .set(&changeset)
                    .returning(FilmModel::as_returning())
                    .get_result::<FilmModel>(conn)?;

                let linked = replace_genre_links(conn, id, &genre_ids)?;
                let mut film = model.into_film(rating);
                film.genres = linked;
                Ok(film)
            })
        })
        .await?
    }

    async fn get_by_id(&self, id: FilmId) -> AppResult<Film> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Film> {
            let mut conn = db.get_connection()?;

            films::table
                .inner_join(mpa::table)
                .filter(films::id.eq(id))
                .select((FilmModel::as_select(), MpaModel::as_select()))
                .first::<(FilmModel, MpaModel)>(&mut conn)
                .optional()?
                .map(|(film, rating)| film.into_film(rating))
                .ok_or_else(|| AppError::film_not_found(id))
        })
        .await?
    }

    async fn get_all(&self) -> AppResult<Vec<Film>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Film>> {
            let mut conn = db.get_connection()?;

            let rows = films::table
                .inner_join(mpa::table)
                .order(films::id.asc())
                .select((FilmModel::as_select(), MpaModel::as_select()))
                .load::<(FilmModel, MpaModel)>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|(film, rating)| film.into_film(rating))
                .collect())
        })
        .await?
    }

    async fn clear(&self) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let start = std::time::Instant::now();
            let mut conn = db.get_connection()?;

            // likes and film_genres go with their films (ON DELETE CASCADE)
            let deleted = diesel::delete(films::table).execute(&mut conn)?;

            LogContext::db_operation(
                "clear",
                "films",
                Some(start.elapsed().as_millis() as u64),
            );
            log_debug!("Deleted {} films", deleted);
            Ok(())
        })
        .await?
    }
}
