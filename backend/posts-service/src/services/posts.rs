/// Post store - owns the in-memory collection and implements every post operation
use crate::error::{AppError, Result};
use crate::models::{seed_posts, NewPost, Post, PostUpdate, SearchQuery, SortDirection, SortField};
use parking_lot::RwLock;
use std::cmp::Reverse;

/// In-memory post collection.
///
/// Reads take the shared lock; create, update and delete hold the exclusive
/// lock for their whole read-modify-write, so concurrent creates never
/// compute the same id.
#[derive(Debug, Default)]
pub struct PostStore {
    inner: RwLock<Collection>,
}

#[derive(Debug, Default)]
struct Collection {
    posts: Vec<Post>,
    /// Highest id ever handed out. Survives deletions so ids are never reused.
    last_id: u64,
}

impl PostStore {
    /// Empty store; the first post gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the four seed posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Collection { posts, last_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All posts, optionally sorted case-insensitively by `sort`.
    ///
    /// Without a sort field the insertion order is kept and `direction` has
    /// no effect. Posts with equal keys keep their relative order.
    pub fn list(&self, sort: Option<SortField>, direction: SortDirection) -> Vec<Post> {
        let mut posts = self.inner.read().posts.clone();

        if let Some(field) = sort {
            match direction {
                SortDirection::Asc => posts.sort_by_cached_key(|p| field.key(p)),
                SortDirection::Desc => posts.sort_by_cached_key(|p| Reverse(field.key(p))),
            }
        }

        posts
    }

    /// Append a new post and return it with its assigned id.
    pub fn create(&self, payload: NewPost) -> Result<Post> {
        let missing = payload.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation { missing });
        }

        let mut inner = self.inner.write();
        let id = inner.last_id + 1;
        let post = payload
            .into_post(id)
            .ok_or_else(|| AppError::Internal("post payload lost a required field".into()))?;

        inner.last_id = id;
        inner.posts.push(post.clone());

        tracing::info!(post_id = id, "post created");
        Ok(post)
    }

    /// Merge `update` into the post with `id` and return the result.
    pub fn update(&self, id: u64, update: PostUpdate) -> Result<Post> {
        let mut inner = self.inner.write();
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound)?;

        post.apply(update);

        tracing::info!(post_id = id, "post updated");
        Ok(post.clone())
    }

    /// Remove the post with `id` and return it.
    pub fn delete(&self, id: u64) -> Result<Post> {
        let mut inner = self.inner.write();
        let index = inner
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::NotFound)?;

        let removed = inner.posts.remove(index);

        tracing::info!(post_id = id, "post deleted");
        Ok(removed)
    }

    /// Posts whose title contains the title term OR whose content contains
    /// the content term, ordered by id. No terms match nothing.
    pub fn search(&self, query: &SearchQuery) -> Vec<Post> {
        let title = query.title_term();
        let content = query.content_term();
        if title.is_none() && content.is_none() {
            return Vec::new();
        }

        let mut found: Vec<Post> = self
            .inner
            .read()
            .posts
            .iter()
            .filter(|post| {
                let title_matches = title
                    .as_deref()
                    .is_some_and(|term| post.title.to_lowercase().contains(term));
                let content_matches = content
                    .as_deref()
                    .is_some_and(|term| post.content.to_lowercase().contains(term));
                title_matches || content_matches
            })
            .cloned()
            .collect();

        found.sort_by_key(|p| p.id);
        found
    }
}
