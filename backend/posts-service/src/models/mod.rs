/// Data models for posts-service
///
/// This module defines structures for:
/// - Post: a stored blog post with open extension fields
/// - NewPost / PostUpdate: create and merge payloads
/// - Query types for listing, sorting and searching
pub mod post;
pub mod query;

pub use post::{seed_posts, NewPost, Post, PostUpdate};
pub use query::{ListPostsQuery, SearchQuery, SortDirection, SortField};
