use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::SessionId;

pub const DEFAULT_COOKIE_NAME: &str = "mathcast_session";

/// Name of the cookie carrying the session id.
#[derive(Clone, Debug)]
pub struct SessionCookie(pub String);

impl Default for SessionCookie {
    fn default() -> Self {
        Self(DEFAULT_COOKIE_NAME.to_string())
    }
}

/// Resolves the caller's session from its cookie, minting a new id when
/// missing or malformed. The id is exposed as an `Extension<SessionId>`.
pub async fn session_middleware(
    State(SessionCookie(cookie_name)): State<SessionCookie>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| find_cookie(header, &cookie_name))
        .and_then(SessionId::parse);

    let (session_id, is_new) = match existing {
        Some(id) => (id, false),
        None => (SessionId::new(), true),
    };

    request.extensions_mut().insert(session_id);
    let mut response = next.run(request).await;

    if is_new {
        let cookie = format!("{cookie_name}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
        tracing::debug!(session_id = %session_id, "Started new session");
    }

    response
}

/// Value of `name` in a `Cookie` header (`a=1; b=2`).
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value.trim())
    })
}
