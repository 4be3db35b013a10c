//! 定位捕获
//!
//! 为事件选定单个地理点并产出规范分享链接。三种输入路径：
//! 地图点选、设备一次性定位、手动坐标输入 (地图不可用时的降级)。
//! pin 落点后异步反向解析地址，失败只降级不报错。

mod capture;
mod provider;

pub use capture::{LocationCapture, LocationPreview};
pub use provider::{Geocoder, Geolocator, GoogleGeocoder, MapProvider};
