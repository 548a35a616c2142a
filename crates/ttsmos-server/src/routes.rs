use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{debug, error, warn};
use ttsmos_core::TableResponse;

use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub ratings_table_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(ratings_table_path: PathBuf) -> Self {
        Self {
            ratings_table_path: Arc::new(ratings_table_path),
        }
    }
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/ratings-table", get(get_ratings_table))
        .with_state(state)
}

/// Relay the precomputed snapshot. The file is re-read on every request and
/// sent byte for byte once it decodes as a `TableResponse`.
async fn get_ratings_table(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.ratings_table_path.as_path();

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Ratings table snapshot missing: {}", path.display());
            return Err(AppError::NotFound("Ratings table not available".to_string()));
        }
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            return Err(AppError::Internal("Failed to read ratings table".to_string()));
        }
    };

    let table = TableResponse::from_json(&raw).map_err(|e| {
        error!("Malformed ratings table {}: {}", path.display(), e);
        AppError::Internal(format!("Malformed ratings table: {}", e))
    })?;

    debug!(
        rows = table.table_data.len(),
        categories = table.categories.len(),
        "Serving ratings table"
    );
    Ok(([(header::CONTENT_TYPE, "application/json")], raw).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::io::Write;
    use tower::ServiceExt;

    async fn get_table(path: PathBuf) -> (StatusCode, serde_json::Value) {
        let app = Router::new().nest("/api", api_routes(AppState::new(path)));
        let resp = app
            .oneshot(Request::get("/api/ratings-table").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_relays_snapshot() {
        let file = snapshot(
            r#"{
                "tableData": [{"modelId": "1", "modelName": "A", "Male-Seen Thai": {"avg": 3.5, "count": 4}}],
                "categories": ["Male-Seen Thai"],
                "totalRatings": 4
            }"#,
        );

        let (status, body) = get_table(file.path().to_path_buf()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalRatings"], 4);
        assert_eq!(body["tableData"][0]["modelId"], "1");
        assert_eq!(body["tableData"][0]["Male-Seen Thai"]["count"], 4);
    }

    #[tokio::test]
    async fn test_relay_keeps_snapshot_verbatim() {
        let file = snapshot(
            r#"{
                "tableData": [{
                    "modelId": "2",
                    "modelName": "B",
                    "Female-Seen Thai": {"avg": 4.1},
                    "Male-Seen Thai": "n/a",
                    "notes": {"checkpoint": "step-40k"}
                }],
                "categories": ["Female-Seen Thai", "Male-Seen Thai"],
                "totalRatings": 0
            }"#,
        );

        let (status, body) = get_table(file.path().to_path_buf()).await;
        assert_eq!(status, StatusCode::OK);
        let row = &body["tableData"][0];
        assert_eq!(row["Female-Seen Thai"], serde_json::json!({"avg": 4.1}));
        assert_eq!(row["Male-Seen Thai"], "n/a");
        assert_eq!(row["notes"]["checkpoint"], "step-40k");
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_table(dir.path().join("absent.json")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Ratings table not available");
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_500() {
        let file = snapshot(r#"{"tableData": "oops"}"#);
        let (status, body) = get_table(file.path().to_path_buf()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("Malformed ratings table"));
    }
}
