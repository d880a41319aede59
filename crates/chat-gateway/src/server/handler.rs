//! WebSocket handler
//!
//! Authenticates the upgrade request, keeps the session registered while the
//! socket is open and answers heartbeats.

use std::borrow::Cow;
use std::time::Duration;

use axum::{
    extract::{
        ws::{CloseFrame, Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chat_common::ACCESS_TOKEN_COOKIE;
use chat_core::ObjectId;
use serde::Deserialize;
use tokio::time::timeout;

use crate::protocol::{CloseCode, Inbound, PONG};
use crate::server::GatewayState;

/// Close the socket when the client sends nothing for this long
const IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Query string of the upgrade request
#[derive(Debug, Default, Deserialize)]
pub struct SocketQuery {
    pub token: Option<String>,
}

/// WebSocket upgrade handler
///
/// The access token is taken from `?token=`, the access token cookie or a
/// bearer header, in that order. Requests without a valid token get 401.
pub async fn socket_handler(
    State(state): State<GatewayState>,
    Query(query): Query<SocketQuery>,
    jar: CookieJar,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    ws: WebSocketUpgrade,
) -> Response {
    let token = query
        .token
        .or_else(|| jar.get(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string()))
        .or_else(|| bearer.map(|TypedHeader(Authorization(b))| b.token().to_string()));

    let Some(token) = token else {
        tracing::debug!("Socket upgrade without credentials");
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let user_id = match state.service_context().jwt_service().authenticate(&token) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected socket token");
            return StatusCode::UNAUTHORIZED.into_response();
        }
    };

    ws.on_upgrade(move |socket| handle_socket(state, socket, user_id))
}

/// Handle an upgraded WebSocket connection
async fn handle_socket(state: GatewayState, mut socket: WebSocket, user_id: ObjectId) {
    let session_id = state.connect(user_id);

    let close_code = loop {
        let Ok(next) = timeout(IDLE_TIMEOUT, socket.recv()).await else {
            tracing::warn!(session_id = %session_id, "Connection timed out (no frames)");
            break Some(CloseCode::Away);
        };

        let message = match next {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                tracing::warn!(session_id = %session_id, error = %e, "WebSocket error");
                break None;
            }
            None => break None,
        };

        match Inbound::classify(&message) {
            Inbound::Ping => {
                if socket.send(Message::Text(PONG.to_string())).await.is_err() {
                    tracing::warn!(session_id = %session_id, "Failed to send pong");
                    break None;
                }
            }
            Inbound::Ignore => {
                tracing::trace!(session_id = %session_id, "Frame ignored");
            }
            Inbound::Close(code) => {
                tracing::debug!(session_id = %session_id, close_code = %code, "Closing connection");
                break Some(code);
            }
            Inbound::Closed => {
                tracing::info!(session_id = %session_id, "Client closed connection");
                break None;
            }
        }
    };

    if let Some(code) = close_code {
        let frame = CloseFrame {
            code: code.as_u16(),
            reason: Cow::Borrowed(code.reason()),
        };
        let _ = socket.send(Message::Close(Some(frame))).await;
    }

    state.disconnect(user_id, &session_id).await;
}
