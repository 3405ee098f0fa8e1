//! Authentication middleware
//!
//! Axum middleware for JWT authentication and superuser checks.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Whether a request may pass without a token.
///
/// Public surface:
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/` (plain 404s, `/health`)
/// - `POST /api/auth/login`
/// - `GET /api/musteri/...` (customer landing pages)
/// - `POST /api/reservations|applications|messages` (public forms)
fn is_public(method: &http::Method, path: &str) -> bool {
    if method == http::Method::OPTIONS {
        return true;
    }
    if !path.starts_with("/api/") {
        return true;
    }
    if path.starts_with("/api/musteri/") {
        return method == http::Method::GET;
    }
    if path == "/api/auth/login" {
        return method == http::Method::POST;
    }
    if matches!(path, "/api/reservations" | "/api/applications" | "/api/messages") {
        return method == http::Method::POST;
    }
    false
}

/// Auth middleware
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`.
/// On success [`CurrentUser`] is injected into the request extensions.
///
/// | Failure | HTTP status |
/// |---------|-------------|
/// | Missing Authorization header | 401 NotAuthenticated |
/// | Expired token | 401 TokenExpired |
/// | Invalid token | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_public(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|_| AppError::invalid_token("Invalid token subject"))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Superuser middleware
///
/// Returns 403 SuperuserRequired for regular operators. Must run inside
/// the global [`require_auth`] layer.
pub async fn require_superuser(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if !user.is_superuser {
        security_log!(
            "WARN",
            "superuser_required",
            user_id = user.id,
            username = user.username.clone()
        );
        return Err(AppError::new(shared::ErrorCode::SuperuserRequired));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[test]
    fn test_public_matrix() {
        assert!(is_public(&Method::OPTIONS, "/api/branches"));
        assert!(is_public(&Method::GET, "/health"));
        assert!(is_public(&Method::POST, "/api/auth/login"));
        assert!(is_public(&Method::GET, "/api/musteri/sube/kurttepe/table/7"));
        assert!(is_public(&Method::POST, "/api/reservations"));
        assert!(is_public(&Method::POST, "/api/messages"));

        assert!(!is_public(&Method::GET, "/api/reservations"));
        assert!(!is_public(&Method::GET, "/api/branches"));
        assert!(!is_public(&Method::POST, "/api/musteri/sube/x/table/1"));
        assert!(!is_public(&Method::DELETE, "/api/tables/3"));
    }
}
