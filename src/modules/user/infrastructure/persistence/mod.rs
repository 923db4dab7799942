pub mod friendship_repository_impl;
pub mod user_repository_impl;

pub use friendship_repository_impl::FriendshipRepositoryImpl;
pub use user_repository_impl::UserRepositoryImpl;
