//! 认证模块
//!
//! 单管理员账号: 用户名 + Argon2 口令散列来自配置，
//! 登录成功后签发 JWT，受保护接口用 [`CurrentAdmin`] 提取器校验。

mod extractor;
pub mod jwt;

pub use jwt::{Claims, CurrentAdmin, JwtConfig, JwtError, JwtService};
