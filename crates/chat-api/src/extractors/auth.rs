//! Session extractor
//!
//! Reads the access token from the session cookie or the Authorization
//! header. Pages never fail on bad credentials; the request is simply
//! treated as signed out.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chat_common::ACCESS_TOKEN_COOKIE;
use chat_core::ObjectId;

use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: ObjectId,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: ObjectId) -> Self {
        Self { user_id }
    }
}

/// The requester, if signed in
#[derive(Debug, Clone, Copy, Default)]
pub struct Session(pub Option<AuthUser>);

impl Session {
    /// Current user's ID
    pub fn user_id(&self) -> Option<ObjectId> {
        self.0.map(|user| user.user_id)
    }
}

/// Candidate tokens, cookie first, then bearer header
async fn access_tokens<S>(parts: &mut Parts, state: &S) -> Vec<String>
where
    S: Send + Sync,
{
    let mut tokens = Vec::with_capacity(2);

    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        tokens.push(cookie.value().to_string());
    }

    if let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    {
        tokens.push(bearer.token().to_string());
    }

    tokens
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // A stale cookie does not shadow a valid bearer token
        for token in access_tokens(parts, state).await {
            match app_state.jwt_service().authenticate(&token) {
                Ok(user_id) => return Ok(Self(Some(AuthUser::new(user_id)))),
                Err(e) => tracing::warn!(error = %e, "Invalid access token"),
            }
        }

        Ok(Self(None))
    }
}
