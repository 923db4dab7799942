use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tokio::task;

use crate::modules::user::domain::{FriendshipRepository, UserId};
use crate::modules::user::infrastructure::models::NewFriendship;
use crate::schema::{friendships, users};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct FriendshipRepositoryImpl {
    db: Arc<Database>,
}

impl FriendshipRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn ensure_users_exist(conn: &mut PgConnection, ids: &[UserId]) -> AppResult<()> {
    let existing: Vec<UserId> = users::table
        .filter(users::id.eq_any(ids))
        .select(users::id)
        .load(conn)?;

    match ids.iter().find(|id| !existing.contains(*id)) {
        Some(missing) => Err(AppError::user_not_found(*missing)),
        None => Ok(()),
    }
}

fn insert_edge(conn: &mut PgConnection, owner: UserId, friend: UserId) -> AppResult<()> {
    diesel::insert_into(friendships::table)
        .values(&NewFriendship {
            user_id: owner,
            friend_id: friend,
        })
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

fn delete_edge(conn: &mut PgConnection, owner: UserId, friend: UserId) -> AppResult<usize> {
    let deleted = diesel::delete(
        friendships::table
            .filter(friendships::user_id.eq(owner))
            .filter(friendships::friend_id.eq(friend)),
    )
    .execute(conn)?;
    Ok(deleted)
}

/// Both directions of a pair, lower owner first. Every mutual write walks
/// the edges in this order so concurrent requests for one pair lock alike.
fn ordered_edges(a: UserId, b: UserId) -> [(UserId, UserId); 2] {
    let (lo, hi) = (a.min(b), a.max(b));
    [(lo, hi), (hi, lo)]
}

fn edge_not_found(owner: UserId, friend: UserId) -> AppError {
    AppError::NotFound(format!(
        "User with ID {} has no friend with ID {}",
        owner, friend
    ))
}

#[async_trait]
impl FriendshipRepository for FriendshipRepositoryImpl {
    async fn add_edge(&self, owner: UserId, friend: UserId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                ensure_users_exist(conn, &[owner, friend])?;
                insert_edge(conn, owner, friend)
            })?;

            LogContext::edge_change("friendship", "add", owner, friend);
            Ok(())
        })
        .await?
    }

    async fn remove_edge(&self, owner: UserId, friend: UserId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            if delete_edge(&mut conn, owner, friend)? == 0 {
                return Err(edge_not_found(owner, friend));
            }

            LogContext::edge_change("friendship", "remove", owner, friend);
            Ok(())
        })
        .await?
    }

    async fn friends_of(&self, owner: UserId) -> AppResult<BTreeSet<UserId>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<BTreeSet<UserId>> {
            let mut conn = db.get_connection()?;

            let friend_ids = friendships::table
                .filter(friendships::user_id.eq(owner))
                .select(friendships::friend_id)
                .load::<i64>(&mut conn)?;

            Ok(friend_ids.into_iter().collect())
        })
        .await?
    }

    async fn add_mutual(&self, a: UserId, b: UserId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                ensure_users_exist(conn, &[a, b])?;
                for (owner, friend) in ordered_edges(a, b) {
                    insert_edge(conn, owner, friend)?;
                }
                Ok(())
            })?;

            LogContext::edge_change("friendship", "add mutual", a, b);
            Ok(())
        })
        .await?
    }

    async fn remove_mutual(&self, a: UserId, b: UserId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let mut requested_removed = false;
                for (owner, friend) in ordered_edges(a, b) {
                    let deleted = delete_edge(conn, owner, friend)?;
                    if (owner, friend) == (a, b) && deleted > 0 {
                        requested_removed = true;
                    }
                }

                // the requested direction must have existed
                if !requested_removed {
                    return Err(edge_not_found(a, b));
                }
                Ok(())
            })?;

            LogContext::edge_change("friendship", "remove mutual", a, b);
            Ok(())
        })
        .await?
    }
}
