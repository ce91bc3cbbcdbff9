use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub username: String,
    pub password: String,
}

impl From<&configs::AuthConfig> for ServerAuthConfig {
    fn from(c: &configs::AuthConfig) -> Self {
        Self { username: c.username.clone(), password: c.password.clone() }
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

const REALM: &str = "Basic realm=\"storefront\"";

/// Parse an `Authorization: Basic ...` value into `(user, password)`.
///
/// The scheme token is matched case-insensitively.
pub fn decode_basic(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return None;
    }
    let raw = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(raw).ok()?;
    let (user, password) = text.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Reject requests without valid HTTP Basic credentials (401 + `WWW-Authenticate`).
pub async fn require_basic_auth(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let Some(value) = header_value else {
        tracing::warn!(path = %path, "missing Authorization header");
        return challenge();
    };

    match decode_basic(value) {
        Some((user, password))
            if credentials_match(&user, &state.auth.username)
                & credentials_match(&password, &state.auth.password) =>
        {
            next.run(req).await
        }
        Some((user, _)) => {
            tracing::warn!(path = %path, user = %user, "invalid basic credentials");
            challenge()
        }
        None => {
            tracing::warn!(path = %path, "malformed Authorization header (expect Basic)");
            challenge()
        }
    }
}

/// Compare without short-circuiting on the first differing byte.
fn credentials_match(given: &str, expected: &str) -> bool {
    let (a, b) = (given.as_bytes(), expected.as_bytes());
    let diff = a.iter().zip(b).fold(a.len() ^ b.len(), |acc, (x, y)| acc | usize::from(x ^ y));
    diff == 0
}

fn challenge() -> Response {
    (StatusCode::UNAUTHORIZED, [(header::WWW_AUTHENTICATE, REALM)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_user_and_password() {
        let value = format!("Basic {}", STANDARD.encode("user:password"));
        assert_eq!(decode_basic(&value), Some(("user".into(), "password".into())));
    }

    #[test]
    fn password_may_contain_colon() {
        let value = format!("Basic {}", STANDARD.encode("user:pa:ss"));
        assert_eq!(decode_basic(&value), Some(("user".into(), "pa:ss".into())));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let encoded = STANDARD.encode("user:password");
        for scheme in ["basic", "BASIC", "bAsIc"] {
            assert_eq!(
                decode_basic(&format!("{scheme} {encoded}")),
                Some(("user".into(), "password".into()))
            );
        }
    }

    #[test]
    fn credentials_match_requires_equal_bytes() {
        assert!(credentials_match("password", "password"));
        assert!(!credentials_match("passwore", "password"));
        assert!(!credentials_match("pass", "password"));
        assert!(!credentials_match("password1", "password"));
        assert!(credentials_match("", ""));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert_eq!(decode_basic("Bearer abc"), None);
        assert_eq!(decode_basic("Basic !!!not-base64"), None);
        let no_colon = format!("Basic {}", STANDARD.encode("userpassword"));
        assert_eq!(decode_basic(&no_colon), None);
    }
}
