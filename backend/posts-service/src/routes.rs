/// Route table shared by the binary and the integration tests
use crate::error::AppError;
use crate::handlers;
use crate::metrics;
use crate::openapi::ApiDoc;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Register every route plus the JSON and query extractor configs.
///
/// The store itself is registered by the caller as `web::Data<PostStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        // Swagger also serves the OpenAPI document, so it goes before the /api scope.
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
        )
        .route("/metrics", web::get().to(metrics::serve_metrics))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health_summary))
                .route("/health/live", web::get().to(handlers::liveness_check))
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(handlers::list_posts))
                                .route(web::post().to(handlers::create_post)),
                        )
                        // Must precede /{id}, which would otherwise claim "search".
                        .service(
                            web::resource("/search").route(web::get().to(handlers::search_posts)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::put().to(handlers::update_post))
                                .route(web::delete().to(handlers::delete_post)),
                        ),
                ),
        );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
