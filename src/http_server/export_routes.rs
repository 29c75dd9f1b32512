//! Combined export download route.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    extract::State,
    Router,
};

use crate::export::{self, EXPORT_FILE_NAME};

use super::asset_routes::AssetState;
use super::errors::ApiError;

/// Export state shared across handlers
pub struct ExportState {
    pub assets: Arc<AssetState>,
    pub data_dir: PathBuf,
}

/// `GET /export`, mounted under `/api` by the server.
pub fn export_routes(state: Arc<ExportState>) -> Router {
    Router::new()
        .route("/export", get(export_handler))
        .with_state(state)
}

async fn export_handler(State(state): State<Arc<ExportState>>) -> Result<Response, ApiError> {
    // Each snapshot is taken under its store's lock.
    let spindle_rows = state.assets.spindle()?.list_all()?;
    let yedek_rows = state.assets.yedek()?.list_all()?;

    let body = export::write_export(&state.data_dir, &spindle_rows, &yedek_rows)?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_routes_build() {
        let dir = TempDir::new().unwrap();
        let assets = Arc::new(AssetState::open(dir.path()).unwrap());
        let state = Arc::new(ExportState {
            assets,
            data_dir: dir.path().to_path_buf(),
        });
        let _router = export_routes(state);
    }

    #[test]
    fn test_download_name_matches_output_file() {
        assert_eq!(EXPORT_FILE_NAME, "takip_export.csv");
    }
}
