//! Location Types
//!
//! 表单内的临时定位 pin，不直接持久化；提交时把派生的
//! 链接和地址拷贝进 Booking。

use serde::{Deserialize, Serialize};

/// WGS84 坐标点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// 是否在有效坐标域内 (lat ∈ [-90,90], lng ∈ [-180,180])
    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// 用户为事件选定的单个地理点 (pin)
///
/// 地址在 pin 落点后异步解析补入；解析失败时仅保留坐标。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedLocation {
    pub point: GeoPoint,
    pub address: Option<String>,
}

impl SelectedLocation {
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            address: None,
        }
    }

    /// 规范分享链接
    pub fn link(&self) -> String {
        crate::format::maps_link(self.point)
    }

    /// 地址已知时返回地址，否则返回坐标链接
    pub fn display_label(&self) -> String {
        self.address.clone().unwrap_or_else(|| self.link())
    }
}
