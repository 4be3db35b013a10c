//! Studio Client - 预约表单客户端流程
//!
//! 把公开预约页的提交流程作为库提供：
//!
//! - **定位捕获** (`location`): 地图点选 / 设备定位 / 手动输入坐标，
//!   反向地理编码带超时，单 pin 所有权归组件实例
//! - **发票文档** (`invoice_pdf`): 固定版式 A4 发票 PDF
//! - **提交编排** (`booking_form`): 校验守卫 → 发票生成 → 消息组装 →
//!   WhatsApp 深链移交，返回显式结果

pub mod booking_form;
pub mod error;
pub mod invoice_pdf;
pub mod location;

// Re-export 公共类型
pub use booking_form::{BookingDraft, BookingForm, ChatHandoff, PackageOption, SubmitOutcome};
pub use error::{ClientError, ClientResult};
pub use invoice_pdf::InvoiceDocument;
pub use location::{
    Geocoder, Geolocator, GoogleGeocoder, LocationCapture, LocationPreview, MapProvider,
};
