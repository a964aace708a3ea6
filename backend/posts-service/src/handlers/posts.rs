/// Post handlers - HTTP endpoints for post operations
use crate::error::{ErrorBody, MessageBody, Result};
use crate::metrics::{record_store_operation, STORE_OPERATIONS_TOTAL};
use crate::models::{ListPostsQuery, NewPost, Post, PostUpdate, SearchQuery};
use crate::services::PostStore;
use actix_web::{web, HttpResponse};

/// List all posts, optionally sorted
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "All posts", body = [Post]),
        (status = 400, description = "Invalid sort field or direction", body = ErrorBody),
    )
)]
pub async fn list_posts(
    store: web::Data<PostStore>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse> {
    let result = ListPostsQuery::from_pairs(&query).parse();
    record_store_operation("list", &result);
    let (sort, direction) = result?;

    Ok(HttpResponse::Ok().json(store.list(sort, direction)))
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = NewPost,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Missing required fields", body = ErrorBody),
    )
)]
pub async fn create_post(
    store: web::Data<PostStore>,
    req: web::Json<NewPost>,
) -> Result<HttpResponse> {
    let result = store.create(req.into_inner());
    record_store_operation("create", &result);

    Ok(HttpResponse::Created().json(result?))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = MessageBody),
        (status = 404, description = "Post not found", body = MessageBody),
    )
)]
pub async fn delete_post(
    store: web::Data<PostStore>,
    post_id: web::Path<u64>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    let result = store.delete(post_id);
    record_store_operation("delete", &result);
    result?;

    Ok(HttpResponse::Ok().json(MessageBody {
        message: format!("Post with id - {} - has been deleted successfully.", post_id),
    }))
}

/// Merge fields into an existing post
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    request_body = PostUpdate,
    responses(
        (status = 200, description = "Updated post", body = Post),
        (status = 404, description = "Post not found", body = MessageBody),
    )
)]
pub async fn update_post(
    store: web::Data<PostStore>,
    post_id: web::Path<u64>,
    req: web::Json<Option<PostUpdate>>,
) -> Result<HttpResponse> {
    // A `null` body merges nothing.
    let update = req.into_inner().unwrap_or_default();
    let result = store.update(post_id.into_inner(), update);
    record_store_operation("update", &result);

    Ok(HttpResponse::Ok().json(result?))
}

/// Search posts by title and/or content
#[utoipa::path(
    get,
    path = "/api/posts/search",
    tag = "posts",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching posts ordered by id", body = [Post]),
    )
)]
pub async fn search_posts(
    store: web::Data<PostStore>,
    query: web::Query<Vec<(String, String)>>,
) -> HttpResponse {
    let query = SearchQuery::from_pairs(&query);
    let found = store.search(&query);
    STORE_OPERATIONS_TOTAL
        .with_label_values(&["search", "ok"])
        .inc();
    tracing::debug!(
        title = ?query.title,
        content = ?query.content,
        matches = found.len(),
        "post search"
    );
    HttpResponse::Ok().json(found)
}
