//! Gallery Image Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 作品集分类 (固定枚举)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryCategory {
    Wedding,
    PreShoot,
    Events,
    Modeling,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Wedding => "wedding",
            GalleryCategory::PreShoot => "pre-shoot",
            GalleryCategory::Events => "events",
            GalleryCategory::Modeling => "modeling",
        }
    }
}

impl std::fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wedding" => Ok(GalleryCategory::Wedding),
            "pre-shoot" => Ok(GalleryCategory::PreShoot),
            "events" => Ok(GalleryCategory::Events),
            "modeling" => Ok(GalleryCategory::Modeling),
            other => Err(format!("unknown gallery category: {other}")),
        }
    }
}

/// Gallery image entity — 一条作品集条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: Option<String>,
    pub title: String,
    pub category: GalleryCategory,
    /// 存储对象的公开 URL
    pub image_url: String,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Create gallery image payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImageCreate {
    pub title: String,
    pub category: GalleryCategory,
    pub image_url: String,
    pub sort_order: Option<i32>,
}
