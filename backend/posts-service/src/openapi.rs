/// OpenAPI documentation for Posts Service
use crate::error::{ErrorBody, MessageBody};
use crate::handlers::{health, posts};
use crate::models::{NewPost, Post, PostUpdate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posts Service API",
        version = "1.0.0",
        description = "In-memory blog post store. Create, list, sort, update, delete and search posts.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5002", description = "Development server"),
    ),
    paths(
        posts::list_posts,
        posts::create_post,
        posts::search_posts,
        posts::update_post,
        posts::delete_post,
        health::health_summary,
        health::liveness_check,
    ),
    components(schemas(Post, NewPost, PostUpdate, ErrorBody, MessageBody)),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post creation, listing, search, updates and deletion"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/openapi.json"
    }
}
