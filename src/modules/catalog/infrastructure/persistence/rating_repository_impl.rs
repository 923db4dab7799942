use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::catalog::domain::{Mpa, MpaId, RatingRepository};
use crate::modules::catalog::infrastructure::models::MpaModel;
use crate::schema::mpa;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn all_ratings(&self) -> AppResult<Vec<Mpa>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Mpa>> {
            let mut conn = db.get_connection()?;

            let models = mpa::table
                .order(mpa::id.asc())
                .select(MpaModel::as_select())
                .load::<MpaModel>(&mut conn)?;

            Ok(models.into_iter().map(Mpa::from).collect())
        })
        .await?
    }

    async fn rating_by_id(&self, id: MpaId) -> AppResult<Mpa> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Mpa> {
            let mut conn = db.get_connection()?;

            mpa::table
                .find(id)
                .select(MpaModel::as_select())
                .first::<MpaModel>(&mut conn)
                .optional()?
                .map(Mpa::from)
                .ok_or_else(|| AppError::NotFound(format!("MPA rating with ID {} not found", id)))
        })
        .await?
    }
}
