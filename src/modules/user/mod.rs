pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::UserService;
pub use domain::{FriendshipRepository, NewUser, User, UserId, UserRepository};
