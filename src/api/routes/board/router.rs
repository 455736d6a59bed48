//! Router serving the board page rendered from the current store. The
//! page's forms post back here and every outcome redirects to `/` with
//! the message to show.

use std::sync::{Arc, RwLock};

use axum::{
    Form, Router,
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::Query;
use serde::Deserialize;

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::board::render::{render_confirm, render_html};
use crate::board::{NoticeKind, ViewState};

type SharedState = Arc<RwLock<AppState>>;

#[derive(Deserialize)]
struct BoardForm {
    activity: String,
    email: String,
}

/// Outcome of the last form submission, carried through the redirect
#[derive(Deserialize)]
struct BoardQuery {
    kind: Option<String>,
    message: Option<String>,
    email: Option<String>,
    activity: Option<String>,
}

fn notice_kind(kind: &str) -> Option<NoticeKind> {
    match kind {
        "success" => Some(NoticeKind::Success),
        "error" => Some(NoticeKind::Error),
        _ => None,
    }
}

fn redirect_with(kind: NoticeKind, message: &str, form: Option<&BoardForm>) -> Redirect {
    let mut target = format!(
        "/?kind={}&message={}",
        kind.class(),
        urlencoding::encode(message)
    );
    // Rejected signups keep what was typed
    if let Some(form) = form {
        target.push_str(&format!(
            "&email={}&activity={}",
            urlencoding::encode(&form.email),
            urlencoding::encode(&form.activity)
        ));
    }
    Redirect::to(&target)
}

async fn board_page(
    State(state): State<SharedState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, ApiError> {
    let shared_state = state.read().expect("Unable to read share state");
    let mut view = ViewState::new();
    view.show_activities(&shared_state.activities);

    let kind = query.kind.as_deref().and_then(notice_kind);
    if let (Some(kind), Some(message)) = (kind, &query.message) {
        view.show_notice(kind, message);
    }
    view.form.email = query.email.unwrap_or_default();
    view.form.activity = query.activity.unwrap_or_default();

    let html = render_html(&shared_state.templates, &view)?;
    Ok(Html(html))
}

async fn submit_signup(
    State(state): State<SharedState>,
    Form(form): Form<BoardForm>,
) -> Result<Redirect, ApiError> {
    let activity = form.activity.trim();
    let email = form.email.trim();
    if activity.is_empty() || email.is_empty() {
        return Ok(Redirect::to("/"));
    }

    let result = state
        .write()
        .expect("Unable to write share state")
        .signup(activity, email);

    match result {
        Ok(message) => Ok(redirect_with(NoticeKind::Success, &message, None)),
        Err(ApiError::NotFound(detail)) | Err(ApiError::BadRequest(detail)) => {
            Ok(redirect_with(NoticeKind::Error, &detail, Some(&form)))
        }
        Err(err) => Err(err),
    }
}

async fn confirm_unregister(
    State(state): State<SharedState>,
    Query(form): Query<BoardForm>,
) -> Result<Html<String>, ApiError> {
    let shared_state = state.read().expect("Unable to read share state");
    let html = render_confirm(&shared_state.templates, &form.activity, &form.email)?;
    Ok(Html(html))
}

async fn submit_unregister(
    State(state): State<SharedState>,
    Form(form): Form<BoardForm>,
) -> Result<Redirect, ApiError> {
    let result = state
        .write()
        .expect("Unable to write share state")
        .unregister(&form.activity, &form.email);

    match result {
        Ok(message) => Ok(redirect_with(NoticeKind::Success, &message, None)),
        Err(ApiError::NotFound(detail)) | Err(ApiError::BadRequest(detail)) => {
            Ok(redirect_with(NoticeKind::Error, &detail, None))
        }
        Err(err) => Err(err),
    }
}

/// Create the board router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(board_page))
        .route("/board/signup", axum::routing::post(submit_signup))
        .route(
            "/board/unregister",
            axum::routing::get(confirm_unregister).post(submit_unregister),
        )
}
