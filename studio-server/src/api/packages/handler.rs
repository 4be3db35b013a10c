//! Package API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use shared::{AppError, AppResult, Package, PackageCreate, PackageUpdate};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{PackageRepository, RepoError};

fn map_repo_error(e: RepoError) -> AppError {
    match e {
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::NotFound(msg) => AppError::not_found(msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}

/// GET /api/packages - 获取启用的套餐 (公开，按 sort_order 升序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Package>>> {
    let repo = PackageRepository::new(state.db.clone());
    let packages = repo.find_enabled().await.map_err(map_repo_error)?;
    Ok(Json(packages))
}

/// GET /api/packages/all - 获取全部套餐 (管理员，含停用)
pub async fn list_all(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<Package>>> {
    let repo = PackageRepository::new(state.db.clone());
    let packages = repo.find_all().await.map_err(map_repo_error)?;
    Ok(Json(packages))
}

/// GET /api/packages/:id - 获取单个套餐
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Package>> {
    let repo = PackageRepository::new(state.db.clone());
    let package = repo
        .find_by_id(&id)
        .await
        .map_err(map_repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Package {}", id)))?;
    Ok(Json(package))
}

/// POST /api/packages - 创建套餐 (管理员)
pub async fn create(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    Json(payload): Json<PackageCreate>,
) -> AppResult<Json<Package>> {
    let repo = PackageRepository::new(state.db.clone());
    let package = repo.create(payload).await.map_err(map_repo_error)?;
    tracing::info!(name = %package.name, "Package created");
    Ok(Json(package))
}

/// PUT /api/packages/:id - 更新套餐 (管理员，部分更新)
pub async fn update(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PackageUpdate>,
) -> AppResult<Json<Package>> {
    let repo = PackageRepository::new(state.db.clone());
    let package = repo
        .update(&id, payload)
        .await
        .map_err(map_repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Package {}", id)))?;
    Ok(Json(package))
}

/// PATCH /api/packages/:id/toggle - 翻转启用状态 (管理员)
pub async fn toggle(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Package>> {
    let repo = PackageRepository::new(state.db.clone());
    let package = repo
        .toggle_enabled(&id)
        .await
        .map_err(map_repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Package {}", id)))?;
    tracing::info!(name = %package.name, is_enabled = package.is_enabled, "Package toggled");
    Ok(Json(package))
}

/// DELETE /api/packages/:id - 删除套餐 (管理员)
pub async fn delete(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let repo = PackageRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await.map_err(map_repo_error)?;
    if !deleted {
        return Err(AppError::not_found(format!("Package {}", id)));
    }
    Ok(Json(json!({ "success": true })))
}
