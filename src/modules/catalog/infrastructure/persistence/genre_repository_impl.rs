use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::catalog::domain::{Genre, GenreId, GenreRepository};
use crate::modules::catalog::infrastructure::models::{GenreModel, NewFilmGenre};
use crate::modules::film::domain::FilmId;
use crate::schema::{film_genres, films, genres};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct GenreRepositoryImpl {
    db: Arc<Database>,
}

impl GenreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Swap the film's genre links for `genre_ids` and return the linked genres.
/// Runs inside the caller's transaction, so an unknown genre rolls back
/// whatever else that transaction wrote.
pub(crate) fn replace_genre_links(
    conn: &mut PgConnection,
    film_id: FilmId,
    genre_ids: &[GenreId],
) -> AppResult<BTreeSet<Genre>> {
    let known = genres::table
        .filter(genres::id.eq_any(genre_ids))
        .select(GenreModel::as_select())
        .load::<GenreModel>(conn)?;
    if let Some(unknown) = genre_ids
        .iter()
        .find(|id| !known.iter().any(|model| model.id == **id))
    {
        return Err(AppError::NotFound(format!(
            "Genre with ID {} not found",
            unknown
        )));
    }

    diesel::delete(film_genres::table.filter(film_genres::film_id.eq(film_id))).execute(conn)?;

    if !genre_ids.is_empty() {
        let rows: Vec<NewFilmGenre> = genre_ids
            .iter()
            .map(|genre_id| NewFilmGenre {
                film_id,
                genre_id: *genre_id,
            })
            .collect();
        diesel::insert_into(film_genres::table)
            .values(&rows)
            .execute(conn)?;
    }

    log_debug!("Film {} now has {} genres", film_id, genre_ids.len());
    Ok(known.into_iter().map(Genre::from).collect())
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn all_genres(&self) -> AppResult<Vec<Genre>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Genre>> {
            let mut conn = db.get_connection()?;

            let models = genres::table
                .order(genres::id.asc())
                .select(GenreModel::as_select())
                .load::<GenreModel>(&mut conn)?;

            Ok(models.into_iter().map(Genre::from).collect())
        })
        .await?
    }

    async fn genre_by_id(&self, id: GenreId) -> AppResult<Genre> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Genre> {
            let mut conn = db.get_connection()?;

            genres::table
                .find(id)
                .select(GenreModel::as_select())
                .first::<GenreModel>(&mut conn)
                .optional()?
                .map(Genre::from)
                .ok_or_else(|| AppError::NotFound(format!("Genre with ID {} not found", id)))
        })
        .await?
    }

    async fn replace_film_genres(
        &self,
        film_id: FilmId,
        genre_set: &BTreeSet<Genre>,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let genre_ids: Vec<GenreId> = genre_set.iter().map(|g| g.id).collect();

        task::spawn_blocking(move || -> AppResult<()> {
            let start = std::time::Instant::now();
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let film_count = films::table
                    .filter(films::id.eq(film_id))
                    .count()
                    .get_result::<i64>(conn)?;
                if film_count == 0 {
                    return Err(AppError::film_not_found(film_id));
                }

                replace_genre_links(conn, film_id, &genre_ids)
            })?;

            LogContext::db_operation(
                "replace",
                "film_genres",
                Some(start.elapsed().as_millis() as u64),
            );
            Ok(())
        })
        .await?
    }

    async fn genres_of_film(&self, film_id: FilmId) -> AppResult<BTreeSet<Genre>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<BTreeSet<Genre>> {
            let mut conn = db.get_connection()?;

            let models = film_genres::table
                .inner_join(genres::table)
                .filter(film_genres::film_id.eq(film_id))
                .select(GenreModel::as_select())
                .load::<GenreModel>(&mut conn)?;

            Ok(models.into_iter().map(Genre::from).collect())
        })
        .await?
    }

    async fn genres_of_films(
        &self,
        film_ids: &[FilmId],
    ) -> AppResult<HashMap<FilmId, BTreeSet<Genre>>> {
        if film_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let film_ids = film_ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashMap<FilmId, BTreeSet<Genre>>> {
            let mut conn = db.get_connection()?;

            let rows = film_genres::table
                .inner_join(genres::table)
                .filter(film_genres::film_id.eq_any(&film_ids))
                .select((film_genres::film_id, GenreModel::as_select()))
                .load::<(i64, GenreModel)>(&mut conn)?;

            let mut by_film: HashMap<FilmId, BTreeSet<Genre>> = HashMap::new();
            for (film_id, model) in rows {
                by_film.entry(film_id).or_default().insert(Genre::from(model));
            }
            Ok(by_film)
        })
        .await?
    }
}
