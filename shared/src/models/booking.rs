//! Booking Model
//!
//! 一条入站拍摄预约请求。公开预约接口创建，管理后台读取；
//! 状态只能由管理员直接改写，没有状态机护栏。

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 预约状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Option<String>,
    pub client_name: String,
    pub phone_number: String,
    /// Package reference (String ID) + denormalized display name
    pub package_id: String,
    #[serde(default)]
    pub package_name: String,
    pub event_date: NaiveDate,
    pub message: Option<String>,
    /// 经纬度成对出现: 要么都有，要么都没有
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_address: Option<String>,
    pub location_link: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    /// 插入时由服务端铸号
    pub invoice_number: String,
    /// 服务端赋值，不可变
    pub created_at: DateTime<Utc>,
}

/// Create booking payload (public endpoint request body)
///
/// 字段全部可选，必填校验在 handler 内完成，缺字段返回
/// 400 "Missing required fields" 而不是反序列化错误。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub client_name: Option<String>,
    pub phone_number: Option<String>,
    pub package_id: Option<String>,
    pub package_name: Option<String>,
    /// ISO 日期字符串 (yyyy-mm-dd)
    pub event_date: Option<String>,
    pub message: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_address: Option<String>,
    pub location_link: Option<String>,
}

impl BookingCreate {
    /// 必填字段是否齐全 (非空)
    pub fn has_required_fields(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.client_name)
            && present(&self.phone_number)
            && present(&self.package_id)
            && present(&self.event_date)
    }
}

/// Update booking status payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> BookingCreate {
        BookingCreate {
            client_name: Some("Amali Perera".into()),
            phone_number: Some("+94771112222".into()),
            package_id: Some("package:premium".into()),
            package_name: Some("Premium".into()),
            event_date: Some("2025-12-20".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_complete() {
        assert!(complete().has_required_fields());
    }

    #[test]
    fn test_required_fields_missing_each() {
        for strip in 0..4 {
            let mut payload = complete();
            match strip {
                0 => payload.client_name = None,
                1 => payload.phone_number = None,
                2 => payload.package_id = None,
                _ => payload.event_date = None,
            }
            assert!(!payload.has_required_fields(), "field {strip} should be required");
        }
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let mut payload = complete();
        payload.client_name = Some("   ".into());
        assert!(!payload.has_required_fields());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
