use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};

use crate::{error::PortalError, sessions::Session, sessions::SessionState};

/// Name of the cookie carrying the opaque session token. The core never
/// inspects transport details beyond this one value in and out.
pub const SESSION_COOKIE: &str = "portal_session";

/// SessionUser
///
/// The resolved identity of an authenticated request: the server-side session
/// state plus the raw token (needed by logout to terminate it). Handlers take
/// this as an extractor argument; requests with no token, an unknown token,
/// or an expired token are rejected before the handler runs.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub session: Session,
    pub token: String,
}

/// Extracts the session token from the Cookie header, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Builds the Set-Cookie value issued on login. HttpOnly keeps the opaque
/// token out of reach of page scripts; Max-Age mirrors the server-side
/// absolute expiry.
pub fn session_cookie(token: &str, ttl_secs: i64) -> String {
    format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}",
        SESSION_COOKIE, token, ttl_secs
    )
}

/// Builds the Set-Cookie value that clears the session cookie on logout.
pub fn clear_session_cookie() -> String {
    format!("{}=; HttpOnly; Path=/; Max-Age=0", SESSION_COOKIE)
}

/// SessionUser Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making SessionUser usable as a
/// function argument in any protected handler. This keeps authentication
/// (extractor) cleanly separated from authorization and business logic (the
/// handler + guard).
///
/// Rejection: a missing/unknown/expired token resolves the session state to
/// Anonymous, which is rejected as `Unauthenticated` (401). The exact
/// required-role check is the handler's job, via the guard.
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    // Allows the extractor to pull the session store from the app state.
    SessionState: FromRef<S>,
{
    type Rejection = PortalError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = SessionState::from_ref(state);

        let token = token_from_headers(&parts.headers).ok_or(PortalError::Unauthenticated)?;

        // Expired and terminated tokens resolve to None; absence is a valid
        // state on the store's side but an authentication failure here.
        let session = sessions
            .resolve(&token)
            .await
            .ok_or(PortalError::Unauthenticated)?;

        Ok(SessionUser { session, token })
    }
}
