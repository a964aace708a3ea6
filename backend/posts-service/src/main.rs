use actix_web::{web, App, HttpServer};
use posts_service::middleware::{self, MetricsMiddleware};
use posts_service::{logging, routes, Config, PostStore};
use std::io;

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
        }
    }
}

/// Probe the local health endpoint; used as the container health check.
async fn run_healthcheck(port: u16) -> io::Result<()> {
    let url = format!("http://127.0.0.1:{}/api/health", port);
    match reqwest::Client::new().get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

/// Posts Service
///
/// Serves the blog post API over an in-memory store that is re-seeded with
/// four posts on every start.
///
/// # Routes
///
/// - `GET|POST /api/posts` - list (optionally sorted) and create posts
/// - `PUT|DELETE /api/posts/{id}` - update and delete posts
/// - `GET /api/posts/search` - search by title and/or content
/// - `/api/health`, `/metrics`, `/swagger-ui/` - operations
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Support container healthchecks via CLI subcommand
    if let Some(cmd) = std::env::args().nth(1) {
        if cmd == "healthcheck" {
            return run_healthcheck(config.app.port).await;
        }
    }

    logging::init(&config.logging);

    tracing::info!("Starting posts-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = web::Data::new(PostStore::seeded());
    tracing::info!(posts = store.len(), "Post store seeded");

    let bind_address = config.bind_address();
    let allowed_origins = config.cors.allowed_origins.clone();

    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(middleware::cors(&allowed_origins))
            .wrap(MetricsMiddleware)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure)
    })
    .bind(&bind_address)?
    .workers(config.app.workers)
    .disable_signals()
    .run();

    let server_handle = server.handle();

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let result = tokio::select! {
        result = server => result,
        _ = &mut shutdown => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            Ok(())
        }
    };

    tracing::info!("Posts-service shutting down");
    result
}
