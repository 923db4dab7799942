pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::{InMemoryFriendshipRepository, InMemoryUserRepository};
pub use persistence::{FriendshipRepositoryImpl, UserRepositoryImpl};
