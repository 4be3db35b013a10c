//! Booking 行模型

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{Booking, BookingStatus};

/// booking 表的一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub client_name: String,
    pub phone_number: String,
    pub package_id: String,
    #[serde(default)]
    pub package_name: String,
    pub event_date: NaiveDate,
    pub message: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_address: Option<String>,
    pub location_link: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    pub invoice_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id.map(|id| id.to_string()),
            client_name: row.client_name,
            phone_number: row.phone_number,
            package_id: row.package_id,
            package_name: row.package_name,
            event_date: row.event_date,
            message: row.message,
            location_lat: row.location_lat,
            location_lng: row.location_lng,
            location_address: row.location_address,
            location_link: row.location_link,
            status: row.status,
            invoice_number: row.invoice_number,
            created_at: row.created_at,
        }
    }
}
