use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{
    router::AppState,
    service::{self, ActivityError},
};

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = match &self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadyRegistered
            | ActivityError::CapacityExceeded
            | ActivityError::NotRegistered => StatusCode::BAD_REQUEST,
            ActivityError::Db(err) => {
                error!(%err, "database error");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ActivityError> {
    let activities = service::list_activities(&state.db).await?;
    Ok(Json(activities))
}

pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ActivityError> {
    let message = service::signup(&state.db, &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ActivityError> {
    let message = service::unregister(&state.db, &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}
