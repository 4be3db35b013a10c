//! Package Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Package entity — 一个可售卖的拍摄套餐
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: Option<String>,
    pub name: String,
    /// 整币种单位的价格 (无小数位)
    pub price: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub description: String,
    /// 有序的卖点列表
    #[serde(default)]
    pub features: Vec<String>,
    /// 停用的套餐不出现在任何公开列表
    #[serde(default = "default_true")]
    pub is_enabled: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_currency() -> String {
    "LKR".to_string()
}

fn default_true() -> bool {
    true
}

/// Create package payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageCreate {
    pub name: String,
    pub price: i64,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Update package payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageUpdate {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_enabled: Option<bool>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}
