/// HTTP handlers for posts-service endpoints
///
/// This module contains handlers for:
/// - Posts: list, create, update, delete and search
/// - Health: liveness and summary checks
pub mod health;
pub mod posts;

// Re-export handler functions at module level
pub use health::{health_summary, liveness_check};
pub use posts::{create_post, delete_post, list_posts, search_posts, update_post};
