//! Prometheus metrics for posts-service.
//!
//! Exposes request and store collectors and an HTTP handler for the `/metrics` endpoint.

use crate::error::Result;
use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// HTTP request latency by method, matched route pattern and status.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "posts_http_request_duration_seconds",
        "HTTP request duration segmented by method, route and status",
        &["method", "path", "status"]
    )
    .expect("failed to register posts_http_request_duration_seconds");

    /// Store operations by name and outcome (ok, invalid, not_found).
    pub static ref STORE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_store_operations_total",
        "Post store operations segmented by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("failed to register posts_store_operations_total");
}

pub fn record_store_operation<T>(operation: &str, result: &Result<T>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(crate::error::AppError::NotFound) => "not_found",
        Err(_) => "invalid",
    };
    STORE_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> Result<HttpResponse> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}
