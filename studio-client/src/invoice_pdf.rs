//! 预约发票 PDF
//!
//! 固定版式单页 A4：黑色抬头条、品牌名、金色分隔线、明细行、
//! 可选备注块、页脚联系条。生成为字节，另存时使用规范文件名
//! `Sadeepa-Invoice-<编号>.pdf`。

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, Point, Rect, Rgb};

use shared::format::{
    self, LOCATION_NOT_AVAILABLE, format_currency, format_event_date, format_invoice_date,
};
use shared::{Booking, InvoiceNumber, Package, SelectedLocation};

use crate::error::{ClientError, ClientResult};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;

/// 明细值超长时截断到 57 字符加省略号
const VALUE_MAX_CHARS: usize = 60;

/// 品牌金色 (#c8a45e)
const GOLD: Rgb = Rgb {
    r: 200.0 / 255.0,
    g: 164.0 / 255.0,
    b: 94.0 / 255.0,
    icc_profile: None,
};

const BLACK: Rgb = Rgb {
    r: 0.05,
    g: 0.05,
    b: 0.05,
    icc_profile: None,
};

const WHITE: Rgb = Rgb {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    icc_profile: None,
};

/// 渲染发票所需的全部字段，与表单状态解耦
#[derive(Debug, Clone)]
pub struct InvoiceDocument {
    pub invoice_number: InvoiceNumber,
    pub issue_date: NaiveDate,
    pub client_name: String,
    pub phone_number: String,
    pub package_name: String,
    pub price_label: String,
    pub event_date: NaiveDate,
    pub location_label: String,
    /// 原始地图链接，选定位时与地址分行展示
    pub location_link: Option<String>,
    pub notes: Option<String>,
}

impl InvoiceDocument {
    /// 从表单提交的各部分组装
    pub fn compose(
        invoice_number: InvoiceNumber,
        issue_date: NaiveDate,
        client_name: &str,
        phone_number: &str,
        package: &Package,
        event_date: NaiveDate,
        location: Option<&SelectedLocation>,
        notes: Option<&str>,
    ) -> Self {
        Self {
            invoice_number,
            issue_date,
            client_name: client_name.to_string(),
            phone_number: phone_number.to_string(),
            package_name: package.name.clone(),
            price_label: format_currency(package.price, &package.currency),
            event_date,
            // 地址优先，无地址时退到坐标链接，无 pin 时为 N/A
            location_label: location
                .map(|l| l.display_label())
                .unwrap_or_else(|| LOCATION_NOT_AVAILABLE.to_string()),
            location_link: location.map(|l| l.link()),
            notes: notes
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }

    /// 从已持久化的预约重建 (管理端重新下载)
    pub fn from_booking(booking: &Booking, package: &Package) -> Self {
        Self {
            invoice_number: InvoiceNumber::from(booking.invoice_number.clone()),
            issue_date: booking.created_at.date_naive(),
            client_name: booking.client_name.clone(),
            phone_number: booking.phone_number.clone(),
            package_name: package.name.clone(),
            price_label: format_currency(package.price, &package.currency),
            event_date: booking.event_date,
            location_label: booking
                .location_address
                .clone()
                .or_else(|| booking.location_link.clone())
                .unwrap_or_else(|| LOCATION_NOT_AVAILABLE.to_string()),
            location_link: booking.location_link.clone(),
            notes: booking
                .message
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }

    /// 下载文件名
    pub fn file_name(&self) -> String {
        format::invoice_file_name(&self.invoice_number)
    }

    /// 渲染为 PDF 字节
    pub fn render(&self) -> ClientResult<Vec<u8>> {
        let (doc, page1, layer1) =
            PdfDocument::new("Booking Invoice", Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let layer = doc.get_page(page1).get_layer(layer1);

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ClientError::Document(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ClientError::Document(e.to_string()))?;

        // 抬头黑条 (页顶 40mm)
        layer.set_fill_color(Color::Rgb(BLACK));
        layer.add_rect(
            Rect::new(Mm(0.0), Mm(PAGE_H - 40.0), Mm(PAGE_W), Mm(PAGE_H)).with_mode(
                printpdf::path::PaintMode::Fill,
            ),
        );

        layer.set_fill_color(Color::Rgb(WHITE));
        layer.use_text("SADEEPA PHOTOGRAPHY", 24.0, Mm(20.0), Mm(PAGE_H - 22.0), &font_bold);
        layer.set_fill_color(Color::Rgb(GOLD));
        layer.use_text(
            "LUXURY PHOTOGRAPHY SERVICES",
            10.0,
            Mm(20.0),
            Mm(PAGE_H - 32.0),
            &font,
        );

        // 金色分隔线
        layer.set_outline_color(Color::Rgb(GOLD));
        layer.set_outline_thickness(1.5);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(20.0), Mm(PAGE_H - 48.0)), false),
                (Point::new(Mm(190.0), Mm(PAGE_H - 48.0)), false),
            ],
            is_closed: false,
        });

        // 标题块
        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text("BOOKING INVOICE", 18.0, Mm(20.0), Mm(PAGE_H - 60.0), &font_bold);
        layer.use_text(
            format!("Invoice #: {}", self.invoice_number),
            11.0,
            Mm(20.0),
            Mm(PAGE_H - 70.0),
            &font,
        );
        layer.use_text(
            format!("Date: {}", format_invoice_date(self.issue_date)),
            11.0,
            Mm(20.0),
            Mm(PAGE_H - 77.0),
            &font,
        );

        // 明细行: 标签 x=20, 值 x=65, 自 y=112 起每行 10mm
        let mut y = PAGE_H - 112.0;
        for (label, value) in self.detail_rows() {
            layer.use_text(label, 11.0, Mm(20.0), Mm(y), &font_bold);
            layer.use_text(value, 11.0, Mm(65.0), Mm(y), &font);
            y -= 10.0;
        }

        // 备注块，按约 80 字符软换行
        if let Some(notes) = &self.notes {
            y -= 4.0;
            layer.use_text("Notes:", 11.0, Mm(20.0), Mm(y), &font_bold);
            y -= 7.0;
            for line in wrap_text(notes, 80) {
                if y < 30.0 {
                    break;
                }
                layer.use_text(line, 10.0, Mm(20.0), Mm(y), &font);
                y -= 5.0;
            }
        }

        // 页脚黑条与联系行
        layer.set_fill_color(Color::Rgb(BLACK));
        layer.add_rect(
            Rect::new(Mm(0.0), Mm(0.0), Mm(PAGE_W), Mm(16.0))
                .with_mode(printpdf::path::PaintMode::Fill),
        );
        layer.set_fill_color(Color::Rgb(GOLD));
        layer.use_text(
            "Sadeepa Photography | hello@sadeepa.photography | +94 77 123 4567",
            9.0,
            Mm(20.0),
            Mm(7.0),
            &font,
        );

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| ClientError::Document(e.to_string()))?;
        Ok(bytes)
    }

    /// 明细区的行，固定顺序；定位链接缺失时渲染 N/A 占位
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Client Name:", truncate_value(&self.client_name)),
            ("Phone:", truncate_value(&self.phone_number)),
            ("Package:", truncate_value(&self.package_name)),
            ("Price:", self.price_label.clone()),
            ("Event Date:", format_event_date(self.event_date)),
            ("Location:", truncate_value(&self.location_label)),
            (
                "Map Link:",
                self.location_link
                    .as_deref()
                    .map(truncate_value)
                    .unwrap_or_else(|| LOCATION_NOT_AVAILABLE.to_string()),
            ),
        ]
    }

    /// 渲染并写入目录，返回完整路径
    pub fn save_to(&self, dir: &Path) -> ClientResult<PathBuf> {
        let bytes = self.render()?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// 超过 60 字符截断到 57 字符加 `...`
fn truncate_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > VALUE_MAX_CHARS {
        let mut out: String = chars[..VALUE_MAX_CHARS - 3].iter().collect();
        out.push_str("...");
        out
    } else {
        value.to_string()
    }
}

/// 按单词软换行；单词超长时整词独占一行
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() || paragraph.trim().is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GeoPoint;

    fn sample_package() -> Package {
        Package {
            id: Some("package:premium".to_string()),
            name: "Premium".to_string(),
            description: "Full day coverage".to_string(),
            price: 95000,
            currency: "LKR".to_string(),
            features: vec!["Two photographers".to_string()],
            is_enabled: true,
            is_featured: true,
            sort_order: 2,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn sample_doc() -> InvoiceDocument {
        let number = InvoiceNumber::from("SP-202512-1234".to_string());
        InvoiceDocument::compose(
            number,
            NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
            "Amali Perera",
            "0771234567",
            &sample_package(),
            NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            None,
            Some("Outdoor shoot, golden hour preferred."),
        )
    }

    #[test]
    fn test_compose_fills_labels() {
        let doc = sample_doc();
        assert_eq!(doc.price_label, "LKR 95,000");
        assert_eq!(doc.location_label, "N/A");
        assert!(doc.location_link.is_none());
        assert_eq!(doc.file_name(), "Sadeepa-Invoice-SP-202512-1234.pdf");
    }

    #[test]
    fn test_compose_prefers_resolved_address() {
        let number = InvoiceNumber::from("SP-202512-1234".to_string());
        let mut loc = SelectedLocation::new(GeoPoint::new(6.9271, 79.8612));
        loc.address = Some("Galle Face Green, Colombo".to_string());
        let doc = InvoiceDocument::compose(
            number,
            NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
            "Amali Perera",
            "0771234567",
            &sample_package(),
            NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            Some(&loc),
            None,
        );
        assert_eq!(doc.location_label, "Galle Face Green, Colombo");
        assert_eq!(
            doc.location_link.as_deref(),
            Some("https://maps.google.com/?q=6.927100,79.861200")
        );
        assert!(doc.notes.is_none());
    }

    #[test]
    fn test_map_link_row_always_present() {
        let rows = sample_doc().detail_rows();
        let map_link = rows.iter().find(|(label, _)| *label == "Map Link:").unwrap();
        assert_eq!(map_link.1, "N/A");

        let number = InvoiceNumber::from("SP-202512-1234".to_string());
        let loc = SelectedLocation::new(GeoPoint::new(6.9271, 79.8612));
        let doc = InvoiceDocument::compose(
            number,
            NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
            "Amali Perera",
            "0771234567",
            &sample_package(),
            NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            Some(&loc),
            None,
        );
        let rows = doc.detail_rows();
        let map_link = rows.iter().find(|(label, _)| *label == "Map Link:").unwrap();
        assert_eq!(map_link.1, "https://maps.google.com/?q=6.927100,79.861200");
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = sample_doc().render().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_save_to_uses_canonical_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_doc().save_to(dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Sadeepa-Invoice-SP-202512-1234.pdf"
        );
        assert!(path.exists());
    }

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("short"), "short");
        let long = "x".repeat(70);
        let truncated = truncate_value(&long);
        assert_eq!(truncated.chars().count(), 60);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("one two three four five six seven", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "one two three four five six seven");
    }
}
