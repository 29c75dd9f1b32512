//! CRUD routes for the two entity kinds.
//!
//! Request bodies keep the camelCase keys the browser client already sends;
//! they are mapped onto the canonical Turkish field names before reaching
//! the store. Responses are records serialized as JSON objects in declared
//! field order.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::store::{EntityKind, FieldPatch, Record, RecordStore, StoreResult, REFERENCE_FIELD};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Both record stores, each behind its own mutex.
///
/// The mutex scopes the whole read-mutate-write sequence of one backing
/// file, so concurrent requests cannot lose updates to each other.
pub struct AssetState {
    spindle: Mutex<RecordStore>,
    yedek: Mutex<RecordStore>,
}

impl AssetState {
    /// Open both stores under the given data directory.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        Ok(Self {
            spindle: Mutex::new(RecordStore::open(data_dir, EntityKind::Spindle)?),
            yedek: Mutex::new(RecordStore::open(data_dir, EntityKind::Yedek)?),
        })
    }

    /// Lock the spindle store for one operation.
    pub fn spindle(&self) -> ApiResult<MutexGuard<'_, RecordStore>> {
        self.spindle
            .lock()
            .map_err(|_| ApiError::Internal("spindle store lock poisoned".to_string()))
    }

    /// Lock the yedek store for one operation.
    pub fn yedek(&self) -> ApiResult<MutexGuard<'_, RecordStore>> {
        self.yedek
            .lock()
            .map_err(|_| ApiError::Internal("yedek store lock poisoned".to_string()))
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Spindle create/update body; absent fields are left untouched on update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpindleBody {
    pub referans_id: Option<String>,
    pub calisma_saati: Option<String>,
    pub makine: Option<String>,
    pub takilma_tarihi: Option<String>,
}

impl SpindleBody {
    fn into_patch(self) -> FieldPatch {
        let pairs = [
            (REFERENCE_FIELD, self.referans_id),
            ("Çalışma Saati", self.calisma_saati),
            ("Takılı Olduğu Makine", self.makine),
            ("Makinaya Takıldığı Tarih", self.takilma_tarihi),
        ];
        collect_patch(pairs)
    }
}

/// Yedek create/update body; absent fields are left untouched on update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YedekBody {
    pub referans_id: Option<String>,
    pub aciklama: Option<String>,
    pub tamirde_mi: Option<String>,
    pub bakima_gonderilme: Option<String>,
    pub geri_donme: Option<String>,
    pub sokuldugu_makine: Option<String>,
    pub sokulme_tarihi: Option<String>,
}

impl YedekBody {
    fn into_patch(self) -> FieldPatch {
        let pairs = [
            (REFERENCE_FIELD, self.referans_id),
            ("Açıklama", self.aciklama),
            ("Tamirde mi", self.tamirde_mi),
            ("Bakıma Gönderilme", self.bakima_gonderilme),
            ("Geri Dönme", self.geri_donme),
            ("Söküldüğü Makine", self.sokuldugu_makine),
            ("Sökülme Tarihi", self.sokulme_tarihi),
        ];
        collect_patch(pairs)
    }
}

fn collect_patch<const N: usize>(pairs: [(&str, Option<String>); N]) -> FieldPatch {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
}

/// Unwrap a JSON body, mapping extractor rejections to the malformed-input
/// error instead of axum's plain-text reply.
fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(inner)| inner)
        .map_err(|_| ApiError::InvalidBody)
}

// ==================
// Router
// ==================

/// CRUD routes for both kinds, mounted under `/api` by the server.
pub fn asset_routes(state: Arc<AssetState>) -> Router {
    Router::new()
        .route("/spindle", get(list_spindle).post(create_spindle))
        .route("/spindle/:id", put(update_spindle).delete(delete_spindle))
        .route("/yedek", get(list_yedek).post(create_yedek))
        .route("/yedek/:id", put(update_yedek).delete(delete_yedek))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_spindle(
    State(state): State<Arc<AssetState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Record>>> {
    let store = state.spindle()?;
    Ok(Json(store.filter_by_reference(query.search.as_deref())?))
}

async fn create_spindle(
    State(state): State<Arc<AssetState>>,
    body: Result<Json<SpindleBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let patch = parse_body(body)?.into_patch();
    let store = state.spindle()?;
    let record = store.insert(&patch)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_spindle(
    State(state): State<Arc<AssetState>>,
    UrlPath(id): UrlPath<String>,
    body: Result<Json<SpindleBody>, JsonRejection>,
) -> ApiResult<Json<Record>> {
    let patch = parse_body(body)?.into_patch();
    let store = state.spindle()?;
    Ok(Json(store.update(&id, &patch)?))
}

async fn delete_spindle(
    State(state): State<Arc<AssetState>>,
    UrlPath(id): UrlPath<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let store = state.spindle()?;
    store.delete(&id)?;
    Ok(Json(DeleteResponse { success: true }))
}

async fn list_yedek(
    State(state): State<Arc<AssetState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Record>>> {
    let store = state.yedek()?;
    Ok(Json(store.filter_by_reference(query.search.as_deref())?))
}

async fn create_yedek(
    State(state): State<Arc<AssetState>>,
    body: Result<Json<YedekBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let patch = parse_body(body)?.into_patch();
    let store = state.yedek()?;
    let record = store.insert(&patch)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_yedek(
    State(state): State<Arc<AssetState>>,
    UrlPath(id): UrlPath<String>,
    body: Result<Json<YedekBody>, JsonRejection>,
) -> ApiResult<Json<Record>> {
    let patch = parse_body(body)?.into_patch();
    let store = state.yedek()?;
    Ok(Json(store.update(&id, &patch)?))
}

async fn delete_yedek(
    State(state): State<Arc<AssetState>>,
    UrlPath(id): UrlPath<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let store = state.yedek()?;
    store.delete(&id)?;
    Ok(Json(DeleteResponse { success: true }))
}
