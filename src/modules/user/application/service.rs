use super::super::domain::{
    services::resolve_display_name, FriendshipRepository, NewUser, User, UserId, UserRepository,
};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info, log_warn};
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    friendship_repo: Arc<dyn FriendshipRepository>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        friendship_repo: Arc<dyn FriendshipRepository>,
    ) -> Self {
        Self {
            user_repo,
            friendship_repo,
        }
    }

    pub async fn create_user(&self, mut user: NewUser) -> AppResult<User> {
        user.name = Some(resolve_display_name(&user.login, user.name.as_deref()));

        let created = self.user_repo.create(user).await?;
        log_info!("Created user {} ({})", created.id, created.login);

        Ok(created)
    }

    pub async fn update_user(&self, mut user: User) -> AppResult<User> {
        user.name = resolve_display_name(&user.login, Some(&user.name));

        let updated = self
            .user_repo
            .update(user)
            .await
            .inspect_err(|e| log_warn!("User update rejected: {}", e))?;
        log_info!("Updated user {}", updated.id);

        Ok(updated)
    }

    pub async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.user_repo.get_by_id(id).await
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.get_all().await
    }

    /// Remove every user together with their friendships and likes
    pub async fn clear_users(&self) -> AppResult<()> {
        self.user_repo.clear().await?;
        log_info!("Cleared all users");
        Ok(())
    }

    /// Make `id` and `friend_id` friends of each other. Returns the requesting user.
    pub async fn add_friend(&self, id: UserId, friend_id: UserId) -> AppResult<User> {
        let user = self.require_pair(id, friend_id).await?;

        self.friendship_repo.add_mutual(id, friend_id).await?;
        log_info!("Users {} and {} are now friends", id, friend_id);

        Ok(user)
    }

    /// Undo `add_friend`. The edge `id -> friend_id` must exist.
    pub async fn remove_friend(&self, id: UserId, friend_id: UserId) -> AppResult<User> {
        let user = self.require_pair(id, friend_id).await?;

        self.friendship_repo
            .remove_mutual(id, friend_id)
            .await
            .inspect_err(|e| log_warn!("Friend removal rejected: {}", e))?;
        log_info!("Users {} and {} are no longer friends", id, friend_id);

        Ok(user)
    }

    pub async fn friends(&self, id: UserId) -> AppResult<Vec<User>> {
        self.user_repo.get_by_id(id).await?;

        let friend_ids: Vec<UserId> = self.friendship_repo.friends_of(id).await?.into_iter().collect();
        log_debug!("User {} has {} friends", id, friend_ids.len());

        self.user_repo.find_by_ids(&friend_ids).await
    }

    /// Users that both `id` and `other_id` count as friends, ascending by id
    pub async fn common_friends(&self, id: UserId, other_id: UserId) -> AppResult<Vec<User>> {
        self.require_pair(id, other_id).await?;

        let (mine, theirs): (BTreeSet<UserId>, BTreeSet<UserId>) = futures::try_join!(
            self.friendship_repo.friends_of(id),
            self.friendship_repo.friends_of(other_id)
        )?;
        let common: Vec<UserId> = mine.intersection(&theirs).copied().collect();
        log_debug!(
            "Users {} and {} share {} friends",
            id,
            other_id,
            common.len()
        );

        self.user_repo.find_by_ids(&common).await
    }

    /// Both users must exist; returns the first one
    async fn require_pair(&self, id: UserId, other_id: UserId) -> AppResult<User> {
        let (user, _) = futures::try_join!(
            self.user_repo.get_by_id(id),
            self.user_repo.get_by_id(other_id)
        )
        .inspect_err(|e| log_warn!("{}", e))?;
        Ok(user)
    }
}
