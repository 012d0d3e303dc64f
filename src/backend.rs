use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_NOT_FOUND_PAGE: &str = "404.html";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

/// Runtime settings for the static host, read once at startup.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    port: u16,
    static_dir: PathBuf,
    not_found_page: PathBuf,
    cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let port = parse_env_non_empty_string("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let not_found_page = parse_env_non_empty_string("NOT_FOUND_PAGE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOT_FOUND_PAGE));
        let cache_max_age_seconds = parse_env_u64_with_bounds(
            "STATIC_CACHE_MAX_AGE_SECONDS",
            DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            not_found_page,
            cache_max_age_seconds,
            log_level,
        }
    }

    fn not_found_path(&self) -> PathBuf {
        self.static_dir.join(&self.not_found_page)
    }

    fn cache_control(&self) -> HeaderValue {
        cache_control(&format!("public, max-age={}", self.cache_max_age_seconds))
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);

    if !config.not_found_path().is_file() {
        log_event(
            &config,
            LogLevel::Info,
            "not_found_page_missing",
            serde_json::json!({ "path": config.not_found_path().display().to_string() }),
        );
    }

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "static_dir": config.static_dir.display().to_string(),
        }),
    );
    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// Static assets with the error page as the 404 body, plus a health check.
pub fn router(config: SiteConfig) -> Router {
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(config.not_found_path()));
    let config = Arc::new(config);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config.clone(), annotate_response))
        .with_state(config)
}

async fn healthz() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(serde_json::json!({ "ok": true })),
    )
}

async fn annotate_response(
    State(config): State<Arc<SiteConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(header::CACHE_CONTROL, config.cache_control());
    }

    log_event(
        &config,
        LogLevel::Info,
        "request_complete",
        serde_json::json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );
    response
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &SiteConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, net::SocketAddr, path::Path};

    fn test_config(static_dir: &Path) -> SiteConfig {
        SiteConfig {
            port: 0,
            static_dir: static_dir.to_path_buf(),
            not_found_page: PathBuf::from(DEFAULT_NOT_FOUND_PAGE),
            cache_max_age_seconds: 60,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn write_site(dir: &Path) {
        fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index");
        fs::write(
            dir.join(DEFAULT_NOT_FOUND_PAGE),
            "<h1>Chapter Not Found</h1><div id=\"error-app\"></div>",
        )
        .expect("write 404 page");
    }

    async fn spawn_site(config: SiteConfig) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let address = listener.local_addr().expect("listener address");
        let app = router(config);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        address
    }

    #[test]
    fn bounded_env_values_fall_back_when_out_of_range() {
        std::env::set_var("FOLIO_TEST_MAX_AGE_OVER", "99999999999");
        std::env::set_var("FOLIO_TEST_MAX_AGE_GARBAGE", "soon");
        std::env::set_var("FOLIO_TEST_MAX_AGE_OK", " 120 ");

        let bounds = STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS;
        assert_eq!(parse_env_u64_with_bounds("FOLIO_TEST_MAX_AGE_OVER", 7, bounds), 7);
        assert_eq!(parse_env_u64_with_bounds("FOLIO_TEST_MAX_AGE_GARBAGE", 7, bounds), 7);
        assert_eq!(parse_env_u64_with_bounds("FOLIO_TEST_MAX_AGE_OK", 7, bounds), 120);
        assert_eq!(parse_env_u64_with_bounds("FOLIO_TEST_MAX_AGE_UNSET", 7, bounds), 7);
    }

    #[test]
    fn log_level_parsing_is_case_insensitive_with_default() {
        std::env::set_var("FOLIO_TEST_LOG_LEVEL_DEBUG", "DEBUG");
        std::env::set_var("FOLIO_TEST_LOG_LEVEL_BOGUS", "verbose");

        assert_eq!(parse_log_level("FOLIO_TEST_LOG_LEVEL_DEBUG", LogLevel::Info), LogLevel::Debug);
        assert_eq!(parse_log_level("FOLIO_TEST_LOG_LEVEL_BOGUS", LogLevel::Info), LogLevel::Info);
        assert_eq!(parse_log_level("FOLIO_TEST_LOG_LEVEL_UNSET", LogLevel::Info), LogLevel::Info);
        assert_eq!(LogLevel::Debug < LogLevel::Info, true);
    }

    #[test]
    fn request_id_prefers_client_value() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  client-42  "));
        assert_eq!(resolve_request_id(&headers), "client-42");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        let generated = resolve_request_id(&headers);
        assert_eq!(generated.starts_with("req-"), true);
        assert_ne!(generated, resolve_request_id(&headers));
    }

    #[tokio::test]
    async fn index_is_served_with_cache_headers() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        write_site(dir.path());
        let address = spawn_site(test_config(dir.path())).await;

        let response = reqwest::get(format!("http://{address}/"))
            .await
            .expect("index request");

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response
                .headers()
                .get("cache-control")
                .and_then(|value| value.to_str().ok()),
            Some("public, max-age=60")
        );
        assert_eq!(response.headers().contains_key(REQUEST_ID_HEADER), true);
        let body = response.text().await.expect("index body");
        assert_eq!(body.contains("id=\"app\""), true);
    }

    #[tokio::test]
    async fn unknown_path_returns_error_page_with_not_found_status() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        write_site(dir.path());
        let address = spawn_site(test_config(dir.path())).await;

        let response = reqwest::get(format!("http://{address}/chapters/missing"))
            .await
            .expect("missing page request");

        assert_eq!(response.status().as_u16(), 404);
        let body = response.text().await.expect("404 body");
        assert_eq!(body.contains("Chapter Not Found"), true);
    }

    #[tokio::test]
    async fn client_request_id_is_echoed() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        write_site(dir.path());
        let address = spawn_site(test_config(dir.path())).await;

        let response = reqwest::Client::new()
            .get(format!("http://{address}/index.html"))
            .header(REQUEST_ID_HEADER, "trace-abc")
            .send()
            .await
            .expect("request with id");

        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("trace-abc")
        );
    }

    #[tokio::test]
    async fn healthz_reports_ok_without_caching() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let address = spawn_site(test_config(dir.path())).await;

        let response = reqwest::get(format!("http://{address}/healthz"))
            .await
            .expect("health request");

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response
                .headers()
                .get("cache-control")
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let payload: serde_json::Value = response.json().await.expect("health payload");
        assert_eq!(payload, serde_json::json!({ "ok": true }));
    }
}
