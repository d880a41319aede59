//! Page handlers
//!
//! Each handler asks `PageService` which page to show and renders it. A
//! signed-out request for a protected page gets the login page with status
//! 200, not an HTTP redirect.

use axum::{
    extract::{Path, State},
    response::Html,
};
use chat_service::{paths, Page, PageService};

use crate::extractors::Session;
use crate::response::ApiResult;
use crate::state::AppState;

fn render(state: &AppState, page: &Page) -> ApiResult<Html<String>> {
    Ok(Html(state.renderer().render(page)?))
}

/// GET /
pub async fn index(State(state): State<AppState>, session: Session) -> ApiResult<Html<String>> {
    render(&state, &PageService::gate(paths::INDEX, session.user_id(), paths::LOGIN))
}

/// GET /chat
pub async fn chat(State(state): State<AppState>, session: Session) -> ApiResult<Html<String>> {
    render(&state, &PageService::gate(paths::CHAT, session.user_id(), paths::LOGIN))
}

/// GET /login
pub async fn login(State(state): State<AppState>, session: Session) -> ApiResult<Html<String>> {
    render(&state, &PageService::gate(paths::LOGIN, session.user_id(), paths::LOGIN))
}

/// GET /logon
pub async fn logon(State(state): State<AppState>, session: Session) -> ApiResult<Html<String>> {
    render(&state, &PageService::gate(paths::LOGON, session.user_id(), paths::LOGON))
}

/// GET /chat/:room_id
///
/// `room_id` may also be a username, which opens (or creates) the inbox room
/// shared with that user.
pub async fn chat_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<String>,
) -> ApiResult<Html<String>> {
    let page = PageService::new(state.service_context())
        .chat_room(&room_id, session.user_id())
        .await?;

    render(&state, &page)
}
