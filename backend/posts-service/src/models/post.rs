use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Keys managed by the store itself; never accepted into `extra`.
const RESERVED_KEYS: [&str; 3] = ["id", "title", "content"];

/// A stored blog post.
///
/// `title` and `content` are always present. Anything else a client sends
/// is kept in `extra` and serialized back at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            extra: Map::new(),
        }
    }

    /// Shallow merge: every key present in `update` overwrites the stored one.
    pub fn apply(&mut self, update: PostUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        for (key, value) in strip_reserved(update.extra) {
            self.extra.insert(key, value);
        }
    }
}

/// Request body for creating a post
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewPost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewPost {
    /// Required fields absent from the payload, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.content.is_none() {
            missing.push("content");
        }
        missing
    }

    /// Turn the payload into a stored post with the given id.
    ///
    /// Returns `None` when a required field is missing; callers check
    /// [`NewPost::missing_fields`] first to report them all at once.
    pub fn into_post(self, id: u64) -> Option<Post> {
        Some(Post {
            id,
            title: self.title?,
            content: self.content?,
            extra: strip_reserved(self.extra),
        })
    }
}

/// Request body for a partial update
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PostUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn strip_reserved(mut extra: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        extra.remove(key);
    }
    extra
}

/// Posts every process starts with.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(1, "First post about Flask", "This is the first post."),
        Post::new(2, "Second post", "This is the second post about Python."),
        Post::new(3, "Flask API Development", "Learn how to build APIs with Flask."),
        Post::new(
            4,
            "Python Basics",
            "Understanding the basics of Python programming.",
        ),
    ]
}
