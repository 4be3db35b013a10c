//! Package Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::{Package, PackageCreate, PackageUpdate};

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::PackageRow;

const PACKAGE_TABLE: &str = "package";

#[derive(Clone)]
pub struct PackageRepository {
    base: BaseRepository,
}

impl PackageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 公开列表: 仅启用的套餐，按 sort_order 升序
    pub async fn find_enabled(&self) -> RepoResult<Vec<Package>> {
        let rows: Vec<PackageRow> = self
            .base
            .db()
            .query("SELECT * FROM package WHERE is_enabled = true ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Package::from).collect())
    }

    /// 管理列表: 全部套餐，按 sort_order 升序
    pub async fn find_all(&self) -> RepoResult<Vec<Package>> {
        let rows: Vec<PackageRow> = self
            .base
            .db()
            .query("SELECT * FROM package ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Package::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Package>> {
        let key = record_key(PACKAGE_TABLE, id);
        let row: Option<PackageRow> = self.base.db().select((PACKAGE_TABLE, key)).await?;
        Ok(row.map(Package::from))
    }

    pub async fn create(&self, data: PackageCreate) -> RepoResult<Package> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }
        if data.price < 0 {
            return Err(RepoError::Validation("price cannot be negative".into()));
        }

        let now = Utc::now();
        let row = PackageRow {
            id: None,
            name: data.name,
            price: data.price,
            currency: data.currency.unwrap_or_else(|| "LKR".to_string()),
            description: data.description.unwrap_or_default(),
            features: data.features.unwrap_or_default(),
            is_enabled: true,
            is_featured: data.is_featured.unwrap_or(false),
            sort_order: data.sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        let created: Option<PackageRow> = self
            .base
            .db()
            .create(PACKAGE_TABLE)
            .content(row)
            .await?;

        created
            .map(Package::from)
            .ok_or_else(|| RepoError::Database("Failed to create package".to_string()))
    }

    /// 部分更新，只写提供的字段并刷新 updated_at
    pub async fn update(&self, id: &str, data: PackageUpdate) -> RepoResult<Option<Package>> {
        if let Some(price) = data.price
            && price < 0
        {
            return Err(RepoError::Validation("price cannot be negative".into()));
        }

        #[derive(serde::Serialize)]
        struct Patch {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            price: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            features: Option<Vec<String>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_enabled: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_featured: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort_order: Option<i32>,
            updated_at: chrono::DateTime<Utc>,
        }

        let key = record_key(PACKAGE_TABLE, id);
        let row: Option<PackageRow> = self
            .base
            .db()
            .update((PACKAGE_TABLE, key))
            .merge(Patch {
                name: data.name,
                price: data.price,
                currency: data.currency,
                description: data.description,
                features: data.features,
                is_enabled: data.is_enabled,
                is_featured: data.is_featured,
                sort_order: data.sort_order,
                updated_at: Utc::now(),
            })
            .await?;
        Ok(row.map(Package::from))
    }

    /// 翻转启用状态
    pub async fn toggle_enabled(&self, id: &str) -> RepoResult<Option<Package>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        self.update(
            id,
            PackageUpdate {
                is_enabled: Some(!current.is_enabled),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = record_key(PACKAGE_TABLE, id);
        let deleted: Option<PackageRow> = self.base.db().delete((PACKAGE_TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_memory;

    fn create_payload(name: &str, price: i64, sort_order: i32) -> PackageCreate {
        PackageCreate {
            name: name.to_string(),
            price,
            currency: None,
            description: Some(format!("{} package", name)),
            features: Some(vec!["Edited photos".to_string()]),
            is_featured: None,
            sort_order: Some(sort_order),
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let db = connect_memory().await.unwrap();
        let repo = PackageRepository::new(db);

        let pkg = repo.create(create_payload("Premium", 95000, 2)).await.unwrap();
        assert!(pkg.is_enabled);
        assert!(!pkg.is_featured);
        assert_eq!(pkg.currency, "LKR");
        assert!(pkg.id.as_deref().unwrap().starts_with("package:"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid() {
        let db = connect_memory().await.unwrap();
        let repo = PackageRepository::new(db);

        assert!(matches!(
            repo.create(create_payload("  ", 1000, 0)).await,
            Err(RepoError::Validation(_))
        ));
        assert!(matches!(
            repo.create(create_payload("Basic", -1, 0)).await,
            Err(RepoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_public_list_hides_disabled_and_sorts() {
        let db = connect_memory().await.unwrap();
        let repo = PackageRepository::new(db);

        repo.create(create_payload("Premium", 95000, 2)).await.unwrap();
        let basic = repo.create(create_payload("Basic", 55000, 1)).await.unwrap();
        let hidden = repo.create(create_payload("Legacy", 10000, 0)).await.unwrap();
        repo.toggle_enabled(hidden.id.as_deref().unwrap()).await.unwrap();

        let public = repo.find_enabled().await.unwrap();
        assert_eq!(public.len(), 2);
        assert_eq!(public[0].name, "Basic");
        assert_eq!(public[1].name, "Premium");

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Legacy");

        // 再翻转一次恢复
        let restored = repo
            .toggle_enabled(basic.id.as_deref().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(!restored.is_enabled);
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let db = connect_memory().await.unwrap();
        let repo = PackageRepository::new(db);

        let pkg = repo.create(create_payload("Basic", 55000, 1)).await.unwrap();
        let id = pkg.id.unwrap();

        let updated = repo
            .update(
                &id,
                PackageUpdate {
                    price: Some(60000),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price, 60000);
        assert_eq!(updated.name, "Basic");
        assert!(updated.updated_at >= pkg.updated_at);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = connect_memory().await.unwrap();
        let repo = PackageRepository::new(db);

        let pkg = repo.create(create_payload("Basic", 55000, 1)).await.unwrap();
        let id = pkg.id.unwrap();
        assert!(repo.delete(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }
}
