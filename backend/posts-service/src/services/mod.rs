/// Business logic layer for posts-service
pub mod posts;

pub use posts::PostStore;
