//! Prometheus metrics: HTTP traffic plus a handful of business counters.
//!
//! Everything here is a no-op when `METRICS_ENABLED` is `false` or `0`.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

const REQUEST_DURATION: &str = "http_request_duration_seconds";
const REQUESTS_ACTIVE: &str = "http_requests_active";

const LATENCY_BUCKETS: &[f64] = &[
    0.002, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

static METRICS_ENABLED: OnceLock<bool> = OnceLock::new();

fn parse_enabled(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => v != "false" && v != "0",
        None => true,
    }
}

pub fn is_metrics_enabled() -> bool {
    *METRICS_ENABLED
        .get_or_init(|| parse_enabled(std::env::var("METRICS_ENABLED").ok().as_deref()))
}

fn when_enabled(record: impl FnOnce()) {
    if is_metrics_enabled() {
        record();
    }
}

/// Installs the global recorder and spawns its upkeep task. `None` when
/// metrics are disabled.
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_metrics_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(REQUEST_DURATION.to_string()), LATENCY_BUCKETS)?
        .install_recorder()?;

    let upkeep = handle.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(5));
        loop {
            interval.tick().await;
            upkeep.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Keeps `http_requests_active` accurate even if the inner service panics.
struct InFlight;

impl InFlight {
    fn enter() -> Self {
        gauge!(REQUESTS_ACTIVE).increment(1.0);
        InFlight
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        gauge!(REQUESTS_ACTIVE).decrement(1.0);
    }
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_metrics_enabled() {
        return next.run(req).await;
    }

    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let started = Instant::now();
    let in_flight = InFlight::enter();
    let response = next.run(req).await;
    drop(in_flight);

    let status = response.status().as_u16().to_string();
    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    histogram!(REQUEST_DURATION, "method" => method, "path" => path)
        .record(started.elapsed().as_secs_f64());

    response
}

/// `GET /metrics` in the Prometheus text format.
pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_login_success() {
    when_enabled(|| counter!("logins_total", "outcome" => "success").increment(1));
}

pub fn track_login_failure(reason: &'static str) {
    when_enabled(|| {
        counter!("logins_total", "outcome" => "failure", "reason" => reason).increment(1)
    });
}

pub fn track_signup(role: &'static str) {
    when_enabled(|| counter!("signups_total", "role" => role).increment(1));
}

/// `kind` is `lesson` or `total`; `operation` is `insert`, `update` or `delete`.
pub fn track_grade_recorded(kind: &'static str, operation: &'static str) {
    when_enabled(|| {
        counter!("grade_writes_total", "kind" => kind, "operation" => operation).increment(1)
    });
}

pub fn track_room_token_issued() {
    when_enabled(|| counter!("room_tokens_issued_total").increment(1));
}

pub fn track_authorization_check(allowed: bool) {
    let outcome = if allowed { "allowed" } else { "denied" };
    when_enabled(|| counter!("authorization_checks_total", "outcome" => outcome).increment(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_enabled_by_default() {
        assert!(parse_enabled(None));
        assert!(parse_enabled(Some("true")));
        assert!(parse_enabled(Some("yes")));
    }

    #[test]
    fn test_metrics_can_be_switched_off() {
        assert!(!parse_enabled(Some("false")));
        assert!(!parse_enabled(Some("FALSE")));
        assert!(!parse_enabled(Some(" 0 ")));
    }
}
