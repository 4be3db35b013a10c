//! Sadeepa Studio Server - 摄影工作室预约与内容服务端
//!
//! # 架构概述
//!
//! 本模块是 Studio Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2 单管理员认证
//! - **HTTP API** (`api`): 预约、套餐、作品集接口
//! - **存储** (`services/storage`): 作品集图片对象存储
//!
//! # 模块结构
//!
//! ```text
//! studio-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! ├── services/      # 图片存储
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentAdmin, JwtService};
pub use core::{Config, Server, ServerState};
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____           __
  / ___/____ _____/ /__  ___  ____  ____ _
  \__ \/ __ `/ __  / _ \/ _ \/ __ \/ __ `/
 ___/ / /_/ / /_/ /  __/  __/ /_/ / /_/ /
/____/\__,_/\__,_/\___/\___/ .___/\__,_/
                          /_/  studio server
"#
    );
}

/// 进程启动前的环境准备: dotenv, 工作目录, 日志
pub fn setup_environment() -> std::io::Result<()> {
    // .env 不存在时静默忽略
    let _ = dotenv::dotenv();

    let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/sadeepa/studio".into());
    std::fs::create_dir_all(&work_dir)?;

    let log_dir = std::path::Path::new(&work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.to_str(),
    );

    Ok(())
}
