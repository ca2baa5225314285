//! Tracing setup and per-request access logging.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{Level, error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_DIR: &str = "storage/logs";

/// Where logs go and how chatty the console is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub dir: PathBuf,
    pub level: String,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self {
            dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR)),
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Console directives used when `RUST_LOG` is not set.
    pub fn console_directives(&self) -> String {
        let level = &self.level;
        format!(
            "{}={level},learnlive_db={level},learnlive_auth={level},tower_http=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME")
        )
    }
}

/// Installs the global subscriber: a compact console layer, a daily plain
/// text file for errors and a daily JSON file for everything from info up.
pub fn init_tracing() -> anyhow::Result<()> {
    let settings = LogSettings::from_env();
    std::fs::create_dir_all(&settings.dir)?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.console_directives()));

    let console = fmt::layer()
        .compact()
        .with_target(false)
        .with_line_number(true)
        .with_filter(console_filter);

    let errors = fmt::layer()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &settings.dir,
            "learnlive.log",
        ))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(EnvFilter::new("error"));

    let json = fmt::layer()
        .json()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &settings.dir,
            "learnlive.json",
        ))
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console)
        .with(errors)
        .with(json)
        .try_init()?;

    info!(log_dir = %settings.dir.display(), "tracing initialized");
    Ok(())
}

fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

struct AccessLog {
    request_id: String,
    method: String,
    path: String,
    started: Instant,
}

impl AccessLog {
    fn begin(req: &Request) -> Self {
        let path = req
            .extensions()
            .get::<MatchedPath>()
            .map(|p| p.as_str().to_owned())
            .unwrap_or_else(|| req.uri().path().to_owned());

        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            method: req.method().to_string(),
            path,
            started: Instant::now(),
        }
    }

    fn finish(self, status: StatusCode) {
        let latency: Duration = self.started.elapsed();
        let latency_ms = latency.as_millis() as u64;
        let status_code = status.as_u16();
        let (request_id, method, path) = (&self.request_id, &self.method, &self.path);

        let level = level_for(status);
        if level == Level::ERROR {
            error!(%request_id, %method, %path, status = status_code, latency_ms, "request failed");
        } else if level == Level::WARN {
            warn!(%request_id, %method, %path, status = status_code, latency_ms, "request rejected");
        } else {
            info!(%request_id, %method, %path, status = status_code, latency_ms, "request completed");
        }
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let log = AccessLog::begin(&req);
    info!(request_id = %log.request_id, method = %log.method, path = %log.path, "request started");

    let response = next.run(req).await;
    log.finish(response.status());
    response
}
