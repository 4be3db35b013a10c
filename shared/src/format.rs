//! 纯格式化工具
//!
//! 货币、地图链接、长格式日期、WhatsApp 出站消息。
//! 全部为无副作用的纯函数，客户端表单流和服务端共用。

use chrono::NaiveDate;

use crate::invoice::InvoiceNumber;
use crate::models::GeoPoint;

/// 未配置出站号码时的默认 WhatsApp 目标号
pub const DEFAULT_WHATSAPP_NUMBER: &str = "94771234567";

/// 出站消息中未选定位时的占位文本
pub const LOCATION_PLACEHOLDER: &str = "Location not specified";

/// 发票 PDF 中未选定位时的占位文本
pub const LOCATION_NOT_AVAILABLE: &str = "N/A";

/// 格式化金额: 千位分隔，无小数，如 `LKR 55,000`
///
/// 价格按整币种单位存储, 不带小数位
pub fn format_currency(amount: i64, currency: &str) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    if negative {
        format!("{} -{}", currency, grouped)
    } else {
        format!("{} {}", currency, grouped)
    }
}

/// 事件坐标的规范分享链接
///
/// 经纬度固定 6 位小数: `https://maps.google.com/?q=<lat>,<lng>`
pub fn maps_link(point: GeoPoint) -> String {
    format!("https://maps.google.com/?q={:.6},{:.6}", point.lat, point.lng)
}

/// 静态地图预览 URL (需要 Google Maps API key)
pub fn static_map_url(point: GeoPoint, api_key: &str) -> String {
    format!(
        "https://maps.googleapis.com/maps/api/staticmap?center={lat},{lng}&zoom=15&size=600x200&maptype=roadmap&markers=color:0xc8a45e|{lat},{lng}&key={key}",
        lat = point.lat,
        lng = point.lng,
        key = api_key,
    )
}

/// 街景全景嵌入 URL (需要 Google Maps API key)
pub fn street_view_url(point: GeoPoint, api_key: &str) -> String {
    format!(
        "https://www.google.com/maps/embed/v1/streetview?key={key}&location={lat},{lng}&heading=210&pitch=10&fov=90",
        lat = point.lat,
        lng = point.lng,
        key = api_key,
    )
}

/// 长格式事件日期，如 `Saturday, 20 December 2025`
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// 发票抬头日期，如 `20 December 2025`
pub fn format_invoice_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// 发票 PDF 下载文件名: `Sadeepa-Invoice-<编号>.pdf`
pub fn invoice_file_name(number: &InvoiceNumber) -> String {
    format!("Sadeepa-Invoice-{}.pdf", number)
}

/// 出站 WhatsApp 消息的字段
#[derive(Debug, Clone)]
pub struct WhatsAppMessage<'a> {
    pub name: &'a str,
    pub package_name: &'a str,
    pub event_date: NaiveDate,
    pub location_link: &'a str,
    pub invoice_number: &'a InvoiceNumber,
}

/// 组装出站消息正文 (未经 URL 编码)
pub fn whatsapp_message(msg: &WhatsAppMessage<'_>) -> String {
    format!(
        "Hello Sadeepa Photography! \u{1F4F8}\n\n\
         I'd like to book a photography session.\n\n\
         *Invoice #:* {invoice}\n\
         *Name:* {name}\n\
         *Package:* {package}\n\
         *Event Date:* {date}\n\
         *Location:* {location}\n\n\
         Please confirm my booking. Thank you! \u{1F64F}",
        invoice = msg.invoice_number,
        name = msg.name,
        package = msg.package_name,
        date = format_event_date(msg.event_date),
        location = msg.location_link,
    )
}

/// 构造 wa.me 深链，消息正文作为预填草稿 URL 编码进 `text` 参数
pub fn whatsapp_url(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(text))
}

/// 定位面板的单独分享消息: `📍 Location: <link>`
pub fn location_share_message(link: &str) -> String {
    format!("\u{1F4CD} Location: {}", link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(55000, "LKR"), "LKR 55,000");
        assert_eq!(format_currency(95000, "LKR"), "LKR 95,000");
        assert_eq!(format_currency(1250000, "LKR"), "LKR 1,250,000");
        assert_eq!(format_currency(0, "LKR"), "LKR 0");
        assert_eq!(format_currency(999, "USD"), "USD 999");
    }

    #[test]
    fn test_maps_link_has_six_decimal_places() {
        let link = maps_link(GeoPoint::new(6.9271, 79.8612));
        assert_eq!(link, "https://maps.google.com/?q=6.927100,79.861200");

        // 域边界也必须是 6 位小数
        let link = maps_link(GeoPoint::new(-90.0, -180.0));
        assert_eq!(link, "https://maps.google.com/?q=-90.000000,-180.000000");
        let link = maps_link(GeoPoint::new(90.0, 180.0));
        assert_eq!(link, "https://maps.google.com/?q=90.000000,180.000000");
    }

    #[test]
    fn test_maps_link_rounds_excess_precision() {
        let link = maps_link(GeoPoint::new(6.123456789, 79.987654321));
        assert_eq!(link, "https://maps.google.com/?q=6.123457,79.987654");
    }

    #[test]
    fn test_format_event_date_long_form() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        assert_eq!(format_event_date(date), "Saturday, 20 December 2025");
    }

    #[test]
    fn test_whatsapp_message_contains_fields() {
        let number: InvoiceNumber = serde_json::from_str("\"SP-202512-1234\"").unwrap();
        let body = whatsapp_message(&WhatsAppMessage {
            name: "Amali Perera",
            package_name: "Premium",
            event_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            location_link: LOCATION_PLACEHOLDER,
            invoice_number: &number,
        });
        assert!(body.contains("*Invoice #:* SP-202512-1234"));
        assert!(body.contains("*Package:* Premium"));
        assert!(body.contains("*Event Date:* Saturday, 20 December 2025"));
        assert!(body.contains("*Location:* Location not specified"));
    }

    #[test]
    fn test_whatsapp_url_encodes_text() {
        let url = whatsapp_url("94771234567", "hello world & more");
        assert_eq!(
            url,
            "https://wa.me/94771234567?text=hello%20world%20%26%20more"
        );
    }

    #[test]
    fn test_invoice_file_name() {
        let number: InvoiceNumber = serde_json::from_str("\"SP-202512-9999\"").unwrap();
        assert_eq!(invoice_file_name(&number), "Sadeepa-Invoice-SP-202512-9999.pdf");
    }
}
