//! Gallery Image 行模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{GalleryCategory, GalleryImage};

/// gallery_image 表的一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImageRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub category: GalleryCategory,
    pub image_url: String,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<GalleryImageRow> for GalleryImage {
    fn from(row: GalleryImageRow) -> Self {
        GalleryImage {
            id: row.id.map(|id| id.to_string()),
            title: row.title,
            category: row.category,
            image_url: row.image_url,
            sort_order: row.sort_order,
            created_at: row.created_at,
        }
    }
}
