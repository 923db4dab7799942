pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::user::{NewUser, User, UserId};
pub use repositories::friendship_repository::FriendshipRepository;
pub use repositories::user_repository::UserRepository;

#[cfg(test)]
pub use repositories::friendship_repository::MockFriendshipRepository;
#[cfg(test)]
pub use repositories::user_repository::MockUserRepository;
