//! 服务器配置

use crate::auth::JwtConfig;

/// 服务器配置 - 工作室节点的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/sadeepa/studio | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | GOOGLE_MAPS_API_KEY | (无) | 地图静态图/街景 key |
/// | WHATSAPP_NUMBER | 94771234567 | 出站 WhatsApp 号码 |
/// | ADMIN_USERNAME | admin | 管理员用户名 |
/// | ADMIN_PASSWORD_HASH | (无) | 管理员口令的 Argon2 散列 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/studio HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、上传文件、日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// Google Maps API key (可选，缺失时定位预览降级)
    pub google_maps_api_key: Option<String>,
    /// 出站 WhatsApp 号码
    pub whatsapp_number: String,
    /// 管理员用户名
    pub admin_username: String,
    /// 管理员口令的 Argon2 散列 (未设置时登录接口始终拒绝)
    pub admin_password_hash: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/sadeepa/studio".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            google_maps_api_key: std::env::var("GOOGLE_MAPS_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            whatsapp_number: std::env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| shared::format::DEFAULT_WHATSAPP_NUMBER.into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH")
                .ok()
                .filter(|h| !h.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 上传文件根目录
    pub fn uploads_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("uploads")
    }

    /// 数据库文件路径
    pub fn db_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("data/studio.db")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
