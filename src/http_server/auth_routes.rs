//! Login route.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::auth::CredentialVerifier;

use super::errors::ApiError;

/// Login state shared across handlers
pub struct AuthState {
    pub verifier: Arc<dyn CredentialVerifier>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body; failures carry `success: false` plus a message, so
/// the client can render it inline next to the form.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
        }
    }
}

/// `POST /login`
pub fn auth_routes(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .with_state(state)
}

async fn login_handler(
    State(state): State<Arc<AuthState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> (StatusCode, Json<LoginResponse>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(LoginResponse::rejected(ApiError::InvalidBody.to_string())),
            );
        }
    };

    if state.verifier.verify(&request.username, &request.password) {
        (StatusCode::OK, Json(LoginResponse::ok()))
    } else {
        tracing::warn!(username = %request.username, "login rejected");
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::rejected(
                ApiError::InvalidCredentials.to_string(),
            )),
        )
    }
}
