use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static USERS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("wlog_users_created_total", "Total users created")
        .expect("register users_created_total")
});

pub static TOPICS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("wlog_topics_created_total", "Total topics created")
        .expect("register topics_created_total")
});

pub static REJECTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "wlog_rejected_requests_total",
        "Requests rejected, by error kind",
        &["kind"]
    )
    .expect("register rejected_requests_total")
});

/// Render the default registry in the Prometheus text format.
pub fn render_metrics() -> (StatusCode, String) {
    // touch the counters so they appear even before the first event
    Lazy::force(&USERS_CREATED_TOTAL);
    Lazy::force(&TOPICS_CREATED_TOTAL);
    Lazy::force(&REJECTED_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buf) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("encode error: {e}"));
    }
    match String::from_utf8(buf) {
        Ok(s) => (StatusCode::OK, s),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("utf8 error: {e}")),
    }
}
