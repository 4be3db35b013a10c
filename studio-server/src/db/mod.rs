//! Database Module
//!
//! 嵌入式 SurrealDB 连接管理

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use shared::{AppError, AppResult};

const NAMESPACE: &str = "sadeepa";
const DATABASE: &str = "studio";

/// 打开磁盘数据库 (RocksDB 后端)
pub async fn connect(path: &Path) -> AppResult<Surreal<Db>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::database(format!("Failed to create data dir: {}", e)))?;
    }

    let db = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

    tracing::info!("Database opened at {}", path.display());
    Ok(db)
}

/// 打开内存数据库，用于测试
pub async fn connect_memory() -> AppResult<Surreal<Db>> {
    let db = Surreal::new::<Mem>(())
        .await
        .map_err(|e| AppError::database(format!("Failed to open in-memory database: {}", e)))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

    Ok(db)
}
