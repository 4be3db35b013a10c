//! Gallery Image Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::{GalleryCategory, GalleryImage, GalleryImageCreate};

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::GalleryImageRow;

const GALLERY_TABLE: &str = "gallery_image";

#[derive(Clone)]
pub struct GalleryImageRepository {
    base: BaseRepository,
}

impl GalleryImageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 公开列表，可按分类过滤，按 sort_order 升序
    pub async fn find_public(
        &self,
        category: Option<GalleryCategory>,
    ) -> RepoResult<Vec<GalleryImage>> {
        let rows: Vec<GalleryImageRow> = match category {
            Some(cat) => {
                self.base
                    .db()
                    .query("SELECT * FROM gallery_image WHERE category = $category ORDER BY sort_order")
                    .bind(("category", cat))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM gallery_image ORDER BY sort_order")
                    .await?
                    .take(0)?
            }
        };
        Ok(rows.into_iter().map(GalleryImage::from).collect())
    }

    /// 管理列表，按创建时间倒序
    pub async fn find_all(&self) -> RepoResult<Vec<GalleryImage>> {
        let rows: Vec<GalleryImageRow> = self
            .base
            .db()
            .query("SELECT * FROM gallery_image ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(GalleryImage::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<GalleryImage>> {
        let key = record_key(GALLERY_TABLE, id);
        let row: Option<GalleryImageRow> = self.base.db().select((GALLERY_TABLE, key)).await?;
        Ok(row.map(GalleryImage::from))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        #[derive(serde::Deserialize)]
        struct Count {
            total: usize,
        }
        let counts: Vec<Count> = self
            .base
            .db()
            .query("SELECT count() AS total FROM gallery_image GROUP ALL")
            .await?
            .take(0)?;
        Ok(counts.first().map(|c| c.total).unwrap_or(0))
    }

    /// 插入条目; sort_order 未提供时排到末尾
    pub async fn create(&self, data: GalleryImageCreate) -> RepoResult<GalleryImage> {
        if data.title.trim().is_empty() {
            return Err(RepoError::Validation("title cannot be empty".into()));
        }

        let sort_order = match data.sort_order {
            Some(order) => order,
            None => self.count().await? as i32 + 1,
        };

        let row = GalleryImageRow {
            id: None,
            title: data.title,
            category: data.category,
            image_url: data.image_url,
            sort_order,
            created_at: Utc::now(),
        };

        let created: Option<GalleryImageRow> = self
            .base
            .db()
            .create(GALLERY_TABLE)
            .content(row)
            .await?;

        created
            .map(GalleryImage::from)
            .ok_or_else(|| RepoError::Database("Failed to create gallery image".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = record_key(GALLERY_TABLE, id);
        let deleted: Option<GalleryImageRow> = self.base.db().delete((GALLERY_TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_memory;

    fn payload(title: &str, category: GalleryCategory) -> GalleryImageCreate {
        GalleryImageCreate {
            title: title.to_string(),
            category,
            image_url: format!("/uploads/gallery/{}.jpg", title),
            sort_order: None,
        }
    }

    #[tokio::test]
    async fn test_create_appends_sort_order() {
        let db = connect_memory().await.unwrap();
        let repo = GalleryImageRepository::new(db);

        let first = repo.create(payload("a", GalleryCategory::Wedding)).await.unwrap();
        let second = repo.create(payload("b", GalleryCategory::Events)).await.unwrap();

        assert_eq!(first.sort_order, 1);
        assert_eq!(second.sort_order, 2);
    }

    #[tokio::test]
    async fn test_public_list_filters_by_category() {
        let db = connect_memory().await.unwrap();
        let repo = GalleryImageRepository::new(db);

        repo.create(payload("a", GalleryCategory::Wedding)).await.unwrap();
        repo.create(payload("b", GalleryCategory::PreShoot)).await.unwrap();
        repo.create(payload("c", GalleryCategory::Wedding)).await.unwrap();

        let weddings = repo.find_public(Some(GalleryCategory::Wedding)).await.unwrap();
        assert_eq!(weddings.len(), 2);
        assert!(weddings.iter().all(|i| i.category == GalleryCategory::Wedding));

        let all = repo.find_public(None).await.unwrap();
        assert_eq!(all.len(), 3);
        // sort_order 升序
        assert!(all.windows(2).all(|w| w[0].sort_order <= w[1].sort_order));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = connect_memory().await.unwrap();
        let repo = GalleryImageRepository::new(db);

        let image = repo.create(payload("a", GalleryCategory::Modeling)).await.unwrap();
        let id = image.id.unwrap();
        assert!(repo.delete(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let db = connect_memory().await.unwrap();
        let repo = GalleryImageRepository::new(db);
        assert!(matches!(
            repo.create(payload("  ", GalleryCategory::Events)).await,
            Err(RepoError::Validation(_))
        ));
    }
}
