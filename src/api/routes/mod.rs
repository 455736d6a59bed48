//! API routes module

pub mod activities;
mod board;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Activities collection and signup/unregister
        .merge(activities::router())
        // Server rendered board
        .merge(board::router())
}
