//! Router for the activities API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
};
use axum_extra::extract::Query;

use super::public::{self, Activities, MessageResponse};
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn list_activities(State(state): State<SharedState>) -> Json<Activities> {
    let activities = state
        .read()
        .expect("Unable to read share state")
        .activities
        .clone();
    Json(activities)
}

async fn signup(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Query(params): Query<public::EmailParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .write()
        .expect("Unable to write share state")
        .signup(&name, &params.email)?;
    Ok(Json(MessageResponse { message }))
}

async fn unregister(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Query(params): Query<public::EmailParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .write()
        .expect("Unable to write share state")
        .unregister(&name, &params.email)?;
    Ok(Json(MessageResponse { message }))
}

/// Create the activities router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/activities", axum::routing::get(list_activities))
        .route("/activities/{name}/signup", axum::routing::post(signup))
        .route(
            "/activities/{name}/unregister",
            axum::routing::post(unregister),
        )
}
