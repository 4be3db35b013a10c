//! Booking Repository

use chrono::{NaiveDate, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::{Booking, BookingCreate, BookingStatus};

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::BookingRow;

const BOOKING_TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 插入一条预约，发票号和创建时间由服务端赋值
    ///
    /// 必填字段和日期格式由 handler 校验，这里只负责持久化。
    pub async fn create(
        &self,
        data: BookingCreate,
        event_date: NaiveDate,
        invoice_number: String,
    ) -> RepoResult<Booking> {
        let row = BookingRow {
            id: None,
            client_name: data.client_name.unwrap_or_default().trim().to_string(),
            phone_number: data.phone_number.unwrap_or_default().trim().to_string(),
            package_id: data.package_id.unwrap_or_default(),
            package_name: data.package_name.unwrap_or_default(),
            event_date,
            message: data.message.filter(|m| !m.trim().is_empty()),
            location_lat: data.location_lat,
            location_lng: data.location_lng,
            location_address: data.location_address,
            location_link: data.location_link,
            status: BookingStatus::Pending,
            invoice_number,
            created_at: Utc::now(),
        };

        let created: Option<BookingRow> = self
            .base
            .db()
            .create(BOOKING_TABLE)
            .content(row)
            .await?;

        created
            .map(Booking::from)
            .ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// 按创建时间倒序取全部预约 (管理端)
    pub async fn find_all(&self) -> RepoResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = self
            .base
            .db()
            .query("SELECT * FROM booking ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let key = record_key(BOOKING_TABLE, id);
        let row: Option<BookingRow> = self.base.db().select((BOOKING_TABLE, key)).await?;
        Ok(row.map(Booking::from))
    }

    /// 直接改写状态，无状态机护栏
    pub async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> RepoResult<Option<Booking>> {
        #[derive(serde::Serialize)]
        struct Patch {
            status: BookingStatus,
        }

        let key = record_key(BOOKING_TABLE, id);
        let row: Option<BookingRow> = self
            .base
            .db()
            .update((BOOKING_TABLE, key))
            .merge(Patch { status })
            .await?;
        Ok(row.map(Booking::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_memory;

    fn payload(name: &str) -> BookingCreate {
        BookingCreate {
            client_name: Some(name.to_string()),
            phone_number: Some("0771234567".to_string()),
            package_id: Some("package:premium".to_string()),
            package_name: Some("Premium".to_string()),
            event_date: Some("2025-12-20".to_string()),
            ..Default::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 20).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_defaults() {
        let db = connect_memory().await.unwrap();
        let repo = BookingRepository::new(db);

        let booking = repo
            .create(payload("Amali Perera"), date(), "SP-202512-1234".to_string())
            .await
            .unwrap();

        assert!(booking.id.as_deref().unwrap().starts_with("booking:"));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.invoice_number, "SP-202512-1234");
        assert_eq!(booking.client_name, "Amali Perera");
    }

    #[tokio::test]
    async fn test_find_all_orders_newest_first() {
        let db = connect_memory().await.unwrap();
        let repo = BookingRepository::new(db);

        for i in 0..3 {
            repo.create(payload(&format!("Client {}", i)), date(), format!("SP-202512-100{}", i))
                .await
                .unwrap();
            // created_at 必须严格递增
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].client_name, "Client 2");
        assert_eq!(all[2].client_name, "Client 0");
    }

    #[tokio::test]
    async fn test_update_status_keeps_row() {
        let db = connect_memory().await.unwrap();
        let repo = BookingRepository::new(db);

        let booking = repo
            .create(payload("Amali Perera"), date(), "SP-202512-1234".to_string())
            .await
            .unwrap();
        let id = booking.id.unwrap();

        let updated = repo
            .update_status(&id, BookingStatus::Confirmed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Confirmed);

        // 取消也只是改状态，预约记录永不删除
        let cancelled = repo
            .update_status(&id, BookingStatus::Cancelled)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_id_yields_none() {
        let db = connect_memory().await.unwrap();
        let repo = BookingRepository::new(db);
        assert!(repo.find_by_id("booking:missing").await.unwrap().is_none());
        assert!(
            repo.update_status("booking:missing", BookingStatus::Cancelled)
                .await
                .unwrap()
                .is_none()
        );
    }
}
