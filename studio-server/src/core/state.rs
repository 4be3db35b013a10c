//! 服务器状态

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::{AppError, AppResult};

use crate::auth::JwtService;
use crate::core::Config;
use crate::services::GalleryStore;

/// 服务器状态 - 持有所有服务的单例引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | gallery_store | Arc<GalleryStore> | 作品集图片存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 作品集图片存储
    pub gallery_store: Arc<GalleryStore>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开数据库、创建上传目录、构建 JWT 服务
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = crate::db::connect(&config.db_path()).await?;

        let uploads_dir = config.uploads_dir();
        std::fs::create_dir_all(uploads_dir.join("gallery"))
            .map_err(|e| AppError::internal(format!("Failed to create uploads dir: {}", e)))?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let gallery_store = Arc::new(GalleryStore::new(uploads_dir));

        Ok(Self {
            config: config.clone(),
            db,
            jwt_service,
            gallery_store,
        })
    }

    /// 内存数据库 + 临时目录的状态，用于测试
    pub async fn initialize_in_memory(config: &Config) -> AppResult<Self> {
        let db = crate::db::connect_memory().await?;

        let uploads_dir = config.uploads_dir();
        std::fs::create_dir_all(uploads_dir.join("gallery"))
            .map_err(|e| AppError::internal(format!("Failed to create uploads dir: {}", e)))?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let gallery_store = Arc::new(GalleryStore::new(uploads_dir));

        Ok(Self {
            config: config.clone(),
            db,
            jwt_service,
            gallery_store,
        })
    }
}
