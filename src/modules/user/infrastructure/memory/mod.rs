mod friendship_repository;
mod user_repository;

pub use friendship_repository::InMemoryFriendshipRepository;
pub use user_repository::InMemoryUserRepository;
