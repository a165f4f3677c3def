use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;

use crate::models::{Activity, ErrorDetail, MessageResponse};
use crate::registry::{ActivityRegistry, RegistryError};

/// Map a registry error onto its HTTP status and `{"detail": ...}` body.
///
/// Precondition failures are expected client errors, so they log at warn
/// rather than error.
fn registry_error(e: RegistryError) -> (StatusCode, Json<ErrorDetail>) {
    tracing::warn!("Rejected request: {}", e);

    let status = match e {
        RegistryError::ActivityNotFound => StatusCode::NOT_FOUND,
        RegistryError::AlreadySignedUp | RegistryError::NotSignedUp => StatusCode::BAD_REQUEST,
    };

    (status, Json(ErrorDetail { detail: e.to_string() }))
}

/// The front-end lives under /static; the root just points there.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_activities(
    State(registry): State<ActivityRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    Json(registry.list_activities())
}

/// Query parameters shared by signup and unregister. The email rides in the
/// query string rather than a body, matching the published interface.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup(
    State(registry): State<ActivityRegistry>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorDetail>)> {
    registry
        .signup(&activity_name, &query.email)
        .map_err(registry_error)?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

pub async fn unregister(
    State(registry): State<ActivityRegistry>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorDetail>)> {
    registry
        .unregister(&activity_name, &query.email)
        .map_err(registry_error)?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
