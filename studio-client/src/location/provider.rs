//! 定位能力接口
//!
//! 地图、设备定位、反向地理编码各自抽成 trait，宿主环境
//! (桌面 webview、测试) 注入具体实现。

use async_trait::async_trait;
use shared::GeoPoint;

use crate::error::{ClientError, ClientResult};

/// 交互式地图能力
///
/// `ready` 在地图可用时返回 Ok；失败 (缺 key、脚本加载失败)
/// 时宿主降级到手动坐标输入。
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// 等待地图就绪
    async fn ready(&self) -> ClientResult<()>;

    /// 放置/替换唯一标记
    async fn place_marker(&self, point: GeoPoint) -> ClientResult<()>;

    /// 移除标记
    async fn clear_marker(&self) -> ClientResult<()>;
}

/// 设备一次性定位
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// 获取当前坐标，拒绝授权或无硬件时返回 Err
    async fn current_position(&self) -> ClientResult<GeoPoint>;
}

/// 反向地理编码
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// 坐标 → 人类可读地址
    async fn reverse(&self, point: GeoPoint) -> ClientResult<String>;
}

// ==========================================
// Google Geocoding API 实现
// ==========================================

/// Google Geocoding API 的反向地理编码实现
pub struct GoogleGeocoder {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, serde::Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn reverse(&self, point: GeoPoint) -> ClientResult<String> {
        let url = format!(
            "https://maps.googleapis.com/maps/api/geocode/json?latlng={},{}&key={}",
            point.lat, point.lng, self.api_key
        );
        let resp: GeocodeResponse = self.client.get(&url).send().await?.json().await?;

        if resp.status != "OK" {
            return Err(ClientError::Geocoding(format!(
                "geocode status: {}",
                resp.status
            )));
        }
        resp.results
            .into_iter()
            .next()
            .map(|r| r.formatted_address)
            .ok_or_else(|| ClientError::Geocoding("empty geocode result".to_string()))
    }
}
