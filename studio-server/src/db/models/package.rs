//! Package 行模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::Package;

/// package 表的一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub price: i64,
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub is_enabled: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PackageRow> for Package {
    fn from(row: PackageRow) -> Self {
        Package {
            id: row.id.map(|id| id.to_string()),
            name: row.name,
            price: row.price,
            currency: row.currency,
            description: row.description,
            features: row.features,
            is_enabled: row.is_enabled,
            is_featured: row.is_featured,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
