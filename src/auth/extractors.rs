use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::claims::TokenKind;
use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// The authentication gate. Handlers that take an `AuthUser` argument
/// require a valid, unexpired access token; handlers that omit it stay open
/// to anonymous requests. Extraction failure rejects the request with 401
/// before the handler body runs.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header".into()))?;

        let claims = match keys.verify(token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired token");
                return Err(ApiError::Unauthorized("Invalid or expired token".into()));
            }
        };

        if claims.kind != TokenKind::Access {
            return Err(ApiError::Unauthorized("Access token required".into()));
        }

        Ok(AuthUser(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::http::{Request, StatusCode};

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/courses");
        if let Some(v) = value {
            builder = builder.header(axum::http::header::AUTHORIZATION, v);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    async fn extract(value: Option<&str>) -> Result<AuthUser, ApiError> {
        let state = AppState::fake();
        let mut parts = parts_with_auth(value);
        AuthUser::from_request_parts(&mut parts, &state).await
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_non_bearer_scheme() {
        let err = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let err = extract(Some("Bearer not-a-jwt")).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_refresh_token_as_access() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let refresh = keys.sign_refresh(Uuid::new_v4()).unwrap();
        let err = extract(Some(&format!("Bearer {}", refresh)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn accepts_valid_access_token() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let user_id = Uuid::new_v4();
        let access = keys.sign_access(user_id).unwrap();
        let AuthUser(extracted) = extract(Some(&format!("Bearer {}", access)))
            .await
            .expect("valid token accepted");
        assert_eq!(extracted, user_id);
    }
}
