//! 单 pin 定位状态机
//!
//! 组件实例持有唯一一个 pin：任何输入路径落点都替换前一个。
//! 地址解析异步进行且带超时；期间 pin 被替换或清除时解析结果作废。

use std::sync::Arc;
use std::time::Duration;

use shared::format::{static_map_url, street_view_url};
use shared::{GeoPoint, SelectedLocation};

use super::provider::{Geocoder, Geolocator, MapProvider};

/// 地址解析默认超时
const RESOLVE_TIMEOUT: Duration = Duration::from_secs(3);

/// 定位面板给宿主渲染的预览形态
#[derive(Debug, Clone, PartialEq)]
pub enum LocationPreview {
    /// 静态地图图片 URL (配置了 API key)
    StaticMap(String),
    /// 纯坐标文本回退
    Coordinates(String),
}

/// 预约表单里的定位捕获组件
pub struct LocationCapture {
    geocoder: Arc<dyn Geocoder>,
    api_key: Option<String>,
    pin: Option<SelectedLocation>,
    /// 地图不可用，降级到手动坐标输入
    manual_mode: bool,
    /// 设备定位失败的非致命 UI 标记
    geolocation_failed: bool,
    show_street_view: bool,
    resolve_timeout: Duration,
}

impl LocationCapture {
    pub fn new(geocoder: Arc<dyn Geocoder>, api_key: Option<String>) -> Self {
        Self {
            geocoder,
            api_key,
            pin: None,
            manual_mode: false,
            geolocation_failed: false,
            show_street_view: false,
            resolve_timeout: RESOLVE_TIMEOUT,
        }
    }

    /// 等地图就绪；失败时切换手动输入模式而不是报错
    pub async fn init(&mut self, map: &dyn MapProvider) {
        match map.ready().await {
            Ok(()) => self.manual_mode = false,
            Err(e) => {
                tracing::warn!("map unavailable, falling back to manual entry: {}", e);
                self.manual_mode = true;
            }
        }
    }

    /// 落点: 替换现有 pin，地址待解析
    pub fn set_pin(&mut self, point: GeoPoint) {
        self.pin = Some(SelectedLocation::new(point));
    }

    /// 落点并立即解析地址
    pub async fn place(&mut self, point: GeoPoint) {
        self.set_pin(point);
        self.resolve_address().await;
    }

    /// 设备一次性定位；失败只置标记，pin 不动
    pub async fn detect(&mut self, locator: &dyn Geolocator) {
        match locator.current_position().await {
            Ok(point) => {
                self.geolocation_failed = false;
                self.place(point).await;
            }
            Err(e) => {
                tracing::warn!("geolocation failed: {}", e);
                self.geolocation_failed = true;
            }
        }
    }

    /// 手动坐标输入；任一字段非数字或超出坐标域时整体 no-op
    pub async fn apply_manual(&mut self, lat: &str, lng: &str) -> bool {
        let (Ok(lat), Ok(lng)) = (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) else {
            return false;
        };
        let point = GeoPoint::new(lat, lng);
        if !point.in_bounds() {
            return false;
        }
        self.place(point).await;
        true
    }

    /// 反向解析当前 pin 的地址，带超时
    ///
    /// 解析结束时 pin 已被替换或清除则丢弃结果；失败保留纯坐标，
    /// 从不向调用方返回错误。
    pub async fn resolve_address(&mut self) {
        let Some(point) = self.pin.as_ref().map(|p| p.point) else {
            return;
        };
        let resolved =
            tokio::time::timeout(self.resolve_timeout, self.geocoder.reverse(point)).await;
        match resolved {
            Ok(Ok(address)) => {
                // 仅当 pin 未变时合并
                if let Some(pin) = self.pin.as_mut() {
                    if pin.point == point {
                        pin.address = Some(address);
                    }
                }
            }
            Ok(Err(e)) => tracing::debug!("reverse geocode failed: {}", e),
            Err(_) => tracing::debug!("reverse geocode timed out"),
        }
    }

    /// 清除 pin，同时收起街景
    pub fn clear(&mut self) {
        self.pin = None;
        self.show_street_view = false;
    }

    pub fn toggle_street_view(&mut self) {
        self.show_street_view = !self.show_street_view;
    }

    pub fn pin(&self) -> Option<&SelectedLocation> {
        self.pin.as_ref()
    }

    pub fn manual_mode(&self) -> bool {
        self.manual_mode
    }

    pub fn geolocation_failed(&self) -> bool {
        self.geolocation_failed
    }

    /// 当前 pin 的规范分享链接
    pub fn link(&self) -> Option<String> {
        self.pin.as_ref().map(|p| p.link())
    }

    /// 预览: 有 key 时静态地图，否则坐标文本
    pub fn preview(&self) -> Option<LocationPreview> {
        let pin = self.pin.as_ref()?;
        Some(match &self.api_key {
            Some(key) => LocationPreview::StaticMap(static_map_url(pin.point, key)),
            None => LocationPreview::Coordinates(format!(
                "{:.6}, {:.6}",
                pin.point.lat, pin.point.lng
            )),
        })
    }

    /// 街景嵌入 URL，仅在展开且配置了 key 时返回
    pub fn street_view(&self) -> Option<String> {
        if !self.show_street_view {
            return None;
        }
        let pin = self.pin.as_ref()?;
        let key = self.api_key.as_ref()?;
        Some(street_view_url(pin.point, key))
    }

    /// 单独分享定位的 wa.me 深链
    pub fn share_url(&self, whatsapp_number: &str) -> Option<String> {
        let link = self.link()?;
        let body = shared::format::location_share_message(&link);
        Some(shared::format::whatsapp_url(whatsapp_number, &body))
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = timeout;
        self
    }
}
