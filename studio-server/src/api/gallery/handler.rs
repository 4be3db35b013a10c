//! Gallery API Handlers
//!
//! 公开列表按分类过滤；上传走 multipart，图片经校验压缩后
//! 存入对象存储再入库。

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use shared::{AppError, AppResult, GalleryCategory, GalleryImage, GalleryImageCreate};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{GalleryImageRepository, RepoError};

fn map_repo_error(e: RepoError) -> AppError {
    match e {
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::NotFound(msg) => AppError::not_found(msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<GalleryCategory>,
}

/// GET /api/gallery?category= - 公开作品集列表 (按 sort_order 升序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<GalleryQuery>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    let repo = GalleryImageRepository::new(state.db.clone());
    let images = repo
        .find_public(query.category)
        .await
        .map_err(map_repo_error)?;
    Ok(Json(images))
}

/// GET /api/gallery/all - 全部条目 (管理员，按创建时间倒序)
pub async fn list_all(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    let repo = GalleryImageRepository::new(state.db.clone());
    let images = repo.find_all().await.map_err(map_repo_error)?;
    Ok(Json(images))
}

/// POST /api/gallery - 上传作品 (管理员, multipart: title, category, image)
pub async fn upload(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<GalleryImage>> {
    let mut title: Option<String> = None;
    let mut category: Option<GalleryCategory> = None;
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {}", e)))?
    {
        match field.name() {
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(format!("Invalid title: {}", e)))?,
                );
            }
            Some("category") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid category: {}", e)))?;
                category = Some(
                    raw.parse()
                        .map_err(|e: String| AppError::validation(e))?,
                );
            }
            Some("image") => {
                image_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Invalid image field: {}", e)))?
                        .to_vec(),
                );
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::validation("Missing field: title"))?;
    let category = category.ok_or_else(|| AppError::validation("Missing field: category"))?;
    let image_data = image_data.ok_or_else(|| AppError::validation("Missing field: image"))?;

    let stored = state.gallery_store.save(&image_data)?;

    let repo = GalleryImageRepository::new(state.db.clone());
    let image = repo
        .create(GalleryImageCreate {
            title,
            category,
            image_url: stored.url,
            sort_order: None,
        })
        .await
        .map_err(map_repo_error)?;

    tracing::info!(
        title = %image.title,
        category = %image.category,
        deduplicated = stored.deduplicated,
        "Gallery image uploaded"
    );

    Ok(Json(image))
}

/// DELETE /api/gallery/:id - 删除条目 (管理员)
///
/// 先删存储对象再删行；对象删除失败时中止，行保留。
pub async fn delete(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let repo = GalleryImageRepository::new(state.db.clone());
    let image = repo
        .find_by_id(&id)
        .await
        .map_err(map_repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Gallery image {}", id)))?;

    state.gallery_store.delete(&image.image_url)?;

    repo.delete(&id).await.map_err(map_repo_error)?;
    Ok(Json(json!({ "success": true })))
}
