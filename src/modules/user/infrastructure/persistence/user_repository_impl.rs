use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::user::domain::{NewUser, User, UserId, UserRepository};
use crate::modules::user::infrastructure::models::{NewUserModel, UserChangeset, UserModel};
use crate::schema::users;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let new_model = NewUserModel::from(user);

        task::spawn_blocking(move || -> AppResult<User> {
            let mut conn = db.get_connection()?;

            let model = diesel::insert_into(users::table)
                .values(&new_model)
                .returning(UserModel::as_returning())
                .get_result::<UserModel>(&mut conn)?;

            log_debug!("Inserted user {}", model.id);
            Ok(User::from(model))
        })
        .await?
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let id = user.id;
        let changeset = UserChangeset::from(user);

        task::spawn_blocking(move || -> AppResult<User> {
            let mut conn = db.get_connection()?;

            diesel::update(users::table.find(id))
                .set(&changeset)
                .returning(UserModel::as_returning())
                .get_result::<UserModel>(&mut conn)
                .optional()?
                .map(User::from)
                .ok_or_else(|| AppError::user_not_found(id))
        })
        .await?
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<User> {
            let mut conn = db.get_connection()?;

            users::table
                .find(id)
                .select(UserModel::as_select())
                .first::<UserModel>(&mut conn)
                .optional()?
                .map(User::from)
                .ok_or_else(|| AppError::user_not_found(id))
        })
        .await?
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        task::spawn_blocking(move || -> AppResult<Vec<User>> {
            let mut conn = db.get_connection()?;

            let models = users::table
                .filter(users::id.eq_any(&ids))
                .order(users::id.asc())
                .select(UserModel::as_select())
                .load::<UserModel>(&mut conn)?;

            Ok(models.into_iter().map(User::from).collect())
        })
        .await?
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<User>> {
            let mut conn = db.get_connection()?;

            let models = users::table
                .order(users::id.asc())
                .select(UserModel::as_select())
                .load::<UserModel>(&mut conn)?;

            Ok(models.into_iter().map(User::from).collect())
        })
        .await?
    }

    async fn clear(&self) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let start = std::time::Instant::now();
            let mut conn = db.get_connection()?;

            // friendships and likes go with their users (ON DELETE CASCADE)
            let deleted = diesel::delete(users::table).execute(&mut conn)?;

            LogContext::db_operation(
                "clear",
                "users",
                Some(start.elapsed().as_millis() as u64),
            );
            log_debug!("Deleted {} users", deleted);
            Ok(())
        })
        .await?
    }
}
