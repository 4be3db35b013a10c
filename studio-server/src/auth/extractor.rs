//! JWT Extractor
//!
//! Custom extractor for automatically validating JWT tokens

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use shared::AppError;

use crate::auth::{CurrentAdmin, JwtError, JwtService};
use crate::core::ServerState;

/// JWT Auth Extractor
///
/// Use this extractor in protected handlers to automatically validate JWT
/// and extract CurrentAdmin
impl FromRequestParts<ServerState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted
        if let Some(admin) = parts.extensions.get::<CurrentAdmin>() {
            return Ok(admin.clone());
        }

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => {
                JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?
            }
            None => {
                tracing::warn!(uri = ?parts.uri, "auth header missing");
                return Err(AppError::Unauthorized);
            }
        };

        match state.jwt_service.validate_token(token) {
            Ok(claims) => {
                let admin = CurrentAdmin::from(claims);

                tracing::debug!(username = %admin.username, "admin authenticated");

                // Store in extensions for potential reuse
                parts.extensions.insert(admin.clone());

                Ok(admin)
            }
            Err(e) => {
                tracing::warn!(error = %e, uri = ?parts.uri, "auth failed");
                match e {
                    JwtError::ExpiredToken => Err(AppError::TokenExpired),
                    _ => Err(AppError::InvalidToken),
                }
            }
        }
    }
}
