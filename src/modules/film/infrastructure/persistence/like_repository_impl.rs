use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::count;
use diesel::prelude::*;
use tokio::task;

use crate::modules::film::domain::{FilmId, LikeRepository};
use crate::modules::film::infrastructure::models::NewLike;
use crate::modules::user::domain::UserId;
use crate::schema::{films, likes, users};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct LikeRepositoryImpl {
    db: Arc<Database>,
}

impl LikeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for LikeRepositoryImpl {
    async fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let film_count = films::table
                    .filter(films::id.eq(film_id))
                    .count()
                    .get_result::<i64>(conn)?;
                if film_count == 0 {
                    return Err(AppError::film_not_found(film_id));
                }
                let user_count = users::table
                    .filter(users::id.eq(user_id))
                    .count()
                    .get_result::<i64>(conn)?;
                if user_count == 0 {
                    return Err(AppError::user_not_found(user_id));
                }

                diesel::insert_into(likes::table)
                    .values(&NewLike { film_id, user_id })
                    .on_conflict_do_nothing()
                    .execute(conn)?;
                Ok(())
            })?;

            LogContext::edge_change("like", "add", film_id, user_id);
            Ok(())
        })
        .await?
    }

    async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            let deleted = diesel::delete(
                likes::table
                    .filter(likes::film_id.eq(film_id))
                    .filter(likes::user_id.eq(user_id)),
            )
            .execute(&mut conn)?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "User with ID {} has not liked film with ID {}",
                    user_id, film_id
                )));
            }

            LogContext::edge_change("like", "remove", film_id, user_id);
            Ok(())
        })
        .await?
    }

    async fn likes_of(&self, film_id: FilmId) -> AppResult<BTreeSet<UserId>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<BTreeSet<UserId>> {
            let mut conn = db.get_connection()?;

            let user_ids = likes::table
                .filter(likes::film_id.eq(film_id))
                .select(likes::user_id)
                .load::<i64>(&mut conn)?;

            Ok(user_ids.into_iter().collect())
        })
        .await?
    }

    async fn like_count_of(&self, film_id: FilmId) -> AppResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;

            let total = likes::table
                .filter(likes::film_id.eq(film_id))
                .count()
                .get_result::<i64>(&mut conn)?;

            Ok(total as usize)
        })
        .await?
    }

    async fn like_counts(&self) -> AppResult<HashMap<FilmId, usize>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<HashMap<FilmId, usize>> {
            let mut conn = db.get_connection()?;

            let rows = likes::table
                .group_by(likes::film_id)
                .select((likes::film_id, count(likes::user_id)))
                .load::<(i64, i64)>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|(film_id, total)| (film_id, total as usize))
                .collect())
        })
        .await?
    }
}
