//! Authentication Handlers
//!
//! Handles admin login and token introspection

use std::time::Duration;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use shared::{AppError, AppResult};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    /// 令牌有效期 (秒)
    pub expires_in: i64,
}

/// POST /api/auth/login - 管理员登录
///
/// 校验配置里的单管理员账号，成功返回 JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let config = &state.config;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // 未配置口令散列时拒绝所有登录
    let Some(password_hash) = config.admin_password_hash.as_deref() else {
        tracing::warn!("login rejected: ADMIN_PASSWORD_HASH not configured");
        return Err(AppError::invalid_credentials());
    };

    // 统一的错误消息，防止用户名枚举
    if req.username != config.admin_username {
        tracing::warn!(username = %req.username, "Login failed - unknown username");
        return Err(AppError::invalid_credentials());
    }

    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| AppError::internal(format!("Invalid ADMIN_PASSWORD_HASH: {}", e)))?;

    if Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&req.username)
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    tracing::info!(username = %req.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        username: req.username,
        expires_in: state.jwt_service.config.expiration_minutes * 60,
    }))
}

/// GET /api/auth/me - 当前管理员信息
pub async fn me(admin: CurrentAdmin) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "id": admin.id,
        "username": admin.username,
    }))
}
