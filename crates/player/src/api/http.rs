//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use milkbutton_domain::{PlayerConfig, PlayerConfigPatch};
use milkbutton_shared::routes::{ANNOUNCE_PATH, CONFIG_PATH, FILES_PATH, HEALTH_PATH};
use milkbutton_shared::FILE_PARAM;

use crate::app::App;
use crate::use_cases::{AnnounceError, AnnounceOutcome};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(ANNOUNCE_PATH, get(announce).post(announce))
        .route(FILES_PATH, get(list_files))
        .route(HEALTH_PATH, get(health))
        .route(CONFIG_PATH, get(get_config).patch(update_config))
}

async fn health() -> &'static str {
    "OK"
}

/// `?file=a&file=b` - every `file` parameter, in order, duplicates kept.
async fn announce(
    State(app): State<Arc<App>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<&'static str, ApiError> {
    let files: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == FILE_PARAM)
        .map(|(_, value)| value)
        .collect();

    // read per request so config edits apply to the next announce
    let config = app.load_config();

    match app.announce.execute(&files, &config)? {
        AnnounceOutcome::Launched { entries } => {
            tracing::debug!(entries, "Announce accepted");
        }
        AnnounceOutcome::Throttled => {
            tracing::debug!(delay = config.delay, "Announce accepted without playback");
        }
    }
    Ok("OK\n")
}

async fn list_files(State(app): State<Arc<App>>) -> Json<Vec<String>> {
    Json(app.library.list())
}

// =============================================================================
// Config
// =============================================================================

async fn get_config(State(app): State<Arc<App>>) -> Json<PlayerConfig> {
    Json(app.load_config())
}

async fn update_config(
    State(app): State<Arc<App>>,
    payload: Result<Json<PlayerConfigPatch>, JsonRejection>,
) -> Result<Json<PlayerConfig>, ApiError> {
    let Json(patch) = payload?;
    let mut config = app.load_config();
    config.apply(&patch);
    app.save_config(&config)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::info!(
        repeats = config.repeats,
        delay = config.delay,
        volume = config.volume,
        "Player config updated"
    );
    Ok(Json(config))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

impl From<AnnounceError> for ApiError {
    fn from(e: AnnounceError) -> Self {
        match e {
            AnnounceError::NoFiles | AnnounceError::UnknownFile(_) => {
                ApiError::BadRequest(e.to_string())
            }
            AnnounceError::Launch(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::library::AudioLibrary;
    use crate::infrastructure::testing::{ManualClock, RecordingLauncher};
    use axum::body::Body;
    use axum::http::{Method, Request};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use milkbutton_shared::JsonFileStore;
    use std::fs;
    use tower::ServiceExt;

    struct Fixture {
        _dir: tempfile::TempDir,
        app: Arc<App>,
        launcher: RecordingLauncher,
        clock: ManualClock,
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
    }

    fn fixture(files: &[&str], config: PlayerConfig) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("audio");
        fs::create_dir(&audio).unwrap();
        for name in files {
            fs::write(audio.join(name), b"ID3").unwrap();
        }
        let store = JsonFileStore::new(dir.path().join("config.json"));
        store.save(&config).unwrap();

        let launcher = RecordingLauncher::new();
        let clock = ManualClock::new(t0());
        let app = Arc::new(App::new(
            store,
            AudioLibrary::new(audio),
            Arc::new(launcher.clone()),
            Arc::new(clock.clone()),
        ));
        Fixture {
            _dir: dir,
            app,
            launcher,
            clock,
        }
    }

    fn router(app: &Arc<App>) -> Router {
        routes().with_state(app.clone())
    }

    async fn call(app: &Arc<App>, method: Method, uri: &str, body: Body) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let response = router(app).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn get(app: &Arc<App>, uri: &str) -> (StatusCode, String) {
        call(app, Method::GET, uri, Body::empty()).await
    }

    fn config(repeats: u32, delay: u32, volume: u32) -> PlayerConfig {
        PlayerConfig {
            repeats,
            delay,
            volume,
        }
    }

    #[tokio::test]
    async fn announce_launches_and_throttles() {
        let f = fixture(&["bell.mp3", "horn.mp3"], config(2, 10, 1000));

        let (status, body) = get(&f.app, "/announce?file=bell.mp3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK\n");
        assert_eq!(f.app.throttle.last_played_at(), t0());

        f.clock.advance(Duration::seconds(5));
        let (status, body) = get(&f.app, "/announce?file=bell.mp3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK\n");
        assert_eq!(f.launcher.launches().len(), 1);

        f.clock.advance(Duration::seconds(10));
        let (status, _) = call(&f.app, Method::POST, "/announce?file=bell.mp3", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);

        let launches = f.launcher.launches();
        assert_eq!(launches.len(), 2);
        assert_eq!(launches[0].file_names(), vec!["bell.mp3", "bell.mp3"]);
        assert_eq!(launches[0].volume, 1000);
        assert_eq!(f.app.throttle.last_played_at(), t0() + Duration::seconds(15));
    }

    #[tokio::test]
    async fn announce_preserves_order_and_duplicates() {
        let f = fixture(&["a.mp3", "b.mp3"], config(2, 0, 10));

        let (status, _) = get(&f.app, "/announce?file=b.mp3&file=a.mp3&file=b.mp3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            f.launcher.launches()[0].file_names(),
            vec!["b.mp3", "a.mp3", "b.mp3", "b.mp3", "a.mp3", "b.mp3"]
        );
    }

    #[tokio::test]
    async fn announce_decodes_spaces() {
        let f = fixture(&["horn 1.mp3"], config(1, 0, 10));
        let (status, _) = get(&f.app, "/announce?file=horn+1.mp3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(f.launcher.launches()[0].file_names(), vec!["horn 1.mp3"]);
    }

    #[tokio::test]
    async fn unknown_file_is_bad_request_without_launch() {
        let f = fixture(&["bell.mp3"], config(2, 10, 1000));

        let (status, body) = get(&f.app, "/announce?file=bell.mp3&file=missing.mp3").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("missing.mp3"));
        assert!(f.launcher.launches().is_empty());
        assert_eq!(f.app.throttle.last_played_at(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn missing_file_param_is_bad_request() {
        let f = fixture(&["bell.mp3"], config(2, 10, 1000));
        let (status, _) = get(&f.app, "/announce").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get(&f.app, "/announce?other=bell.mp3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn files_lists_sorted_names() {
        let f = fixture(&["horn.mp3", "bell.mp3"], PlayerConfig::default());
        let (status, body) = get(&f.app, "/files").await;
        assert_eq!(status, StatusCode::OK);
        let files: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(files, vec!["bell.mp3", "horn.mp3"]);
    }

    #[tokio::test]
    async fn config_edit_applies_to_next_announce() {
        let f = fixture(&["bell.mp3"], config(2, 10, 1000));

        let (status, body) = call(
            &f.app,
            Method::PATCH,
            "/api/config",
            Body::from(r#"{"repeats": 99, "volume": 5}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let updated: PlayerConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(updated, config(10, 10, 5));

        let (_, body) = get(&f.app, "/api/config").await;
        let stored: PlayerConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(stored, updated);

        get(&f.app, "/announce?file=bell.mp3").await;
        let launch = &f.launcher.launches()[0];
        assert_eq!(launch.files.len(), 10);
        assert_eq!(launch.volume, 5);
    }

    #[tokio::test]
    async fn files_leaves_out_names_announce_would_refuse() {
        let f = fixture(&["bell (1).mp3", "bell.mp3"], PlayerConfig::default());
        let (_, body) = get(&f.app, "/files").await;
        let files: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(files, vec!["bell.mp3"]);
    }

    #[tokio::test]
    async fn malformed_config_patch_is_bad_request() {
        let f = fixture(&["bell.mp3"], config(2, 10, 1000));
        let (status, _) = call(&f.app, Method::PATCH, "/api/config", Body::from("{repeats")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(
            &f.app,
            Method::PATCH,
            "/api/config",
            Body::from(r#"{"repeats": "many"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(f.app.load_config(), config(2, 10, 1000));
    }

    #[tokio::test]
    async fn stored_out_of_range_value_is_clamped_on_load() {
        let f = fixture(&["bell.mp3"], PlayerConfig::default());
        fs::write(
            f.app.config.path(),
            r#"{"repeats": 3, "delay": -1, "volume": 1000}"#,
        )
        .unwrap();
        assert_eq!(f.app.load_config(), config(3, 0, 1000));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let f = fixture(&[], PlayerConfig::default());
        assert_eq!(get(&f.app, "/health").await, (StatusCode::OK, "OK".to_string()));
    }
}
