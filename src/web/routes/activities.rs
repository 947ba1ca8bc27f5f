use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::database::ActivityStore;
use crate::models::{ActivityCatalog, ActivityRecord};
use crate::services::signup_service::{self, SignupMessage};
use crate::web::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityCatalog> {
    Json(store.list())
}

pub async fn activity_handler(
    path: Result<Path<String>, PathRejection>,
    State(store): State<ActivityStore>,
) -> ApiResult<Json<ActivityRecord>> {
    let Path(activity_name) = path.map_err(path_rejected)?;
    Ok(Json(store.get(&activity_name)?))
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    State(store): State<ActivityStore>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> ApiResult<Json<SignupMessage>> {
    let Path(activity_name) = path.map_err(path_rejected)?;
    let Query(query) = query.map_err(|rejection| {
        warn!(activity = %activity_name, "signup query rejected: {}", rejection);
        ApiError::Unprocessable {
            message: rejection.body_text(),
        }
    })?;

    let msg = signup_service::sign_up(&store, &activity_name, &query.email)?;
    Ok(Json(msg))
}

pub async fn remove_participant_handler(
    path: Result<Path<(String, String)>, PathRejection>,
    State(store): State<ActivityStore>,
) -> ApiResult<Json<SignupMessage>> {
    let Path((activity_name, email)) = path.map_err(path_rejected)?;
    let msg = signup_service::unregister(&store, &activity_name, &email)?;
    Ok(Json(msg))
}

// Undecodable segments (bad percent-encoding, invalid UTF-8) never reach the store.
fn path_rejected(rejection: PathRejection) -> ApiError {
    warn!("path rejected: {}", rejection);
    ApiError::BadRequest {
        message: rejection.body_text(),
    }
}
