/// Posts Service Library
///
/// Serves create, list, update, delete and search operations over an
/// in-memory collection of blog posts.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Post and query data structures
/// - `services`: the post store
/// - `routes`: route table shared by the binary and tests
/// - `middleware`: CORS policy and request metrics
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `logging`: tracing subscriber setup
/// - `metrics`: Prometheus collectors
/// - `openapi`: API documentation
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use services::PostStore;
