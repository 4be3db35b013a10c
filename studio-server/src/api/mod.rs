//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`config`] - 预约页运行时配置
//! - [`auth`] - 管理员认证接口
//! - [`bookings`] - 预约接口 (公开创建 + 管理查询)
//! - [`packages`] - 套餐接口
//! - [`gallery`] - 作品集接口

pub mod auth;
pub mod bookings;
pub mod config;
pub mod gallery;
pub mod health;
pub mod packages;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Booking API - public create, admin reads
        .merge(bookings::router())
        // Package API - public list, admin CRUD
        .merge(packages::router())
        // Gallery API - public list, admin upload/delete
        .merge(gallery::router())
        // Auth API
        .merge(auth::router())
        // Client config - public route
        .merge(config::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
///
/// This is used by both the HTTP server and handler tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // 上传的图片作为静态文件直接服务
        .nest_service("/uploads", ServeDir::new(state.config.uploads_dir()))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}
