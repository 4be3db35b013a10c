//! 预约表单提交编排
//!
//! 守卫校验 → 铸发票号 → 渲染保存 PDF → 组装 WhatsApp 消息 →
//! 打开 wa.me 深链。整条链路不落库；持久化是独立的服务端接口。
//! 提交结果用显式枚举返回，宿主据此提示用户。

use std::path::PathBuf;

use chrono::NaiveDate;
use rand::Rng;

use shared::format::{
    self, DEFAULT_WHATSAPP_NUMBER, LOCATION_PLACEHOLDER, WhatsAppMessage, format_currency,
};
use shared::{Clock, InvoiceNumber, Package, SystemClock};

use crate::invoice_pdf::InvoiceDocument;
use crate::location::LocationCapture;

/// 打开聊天深链的宿主能力 (浏览器 window.open 等)
pub trait ChatHandoff: Send + Sync {
    fn open(&self, url: &str) -> crate::error::ClientResult<()>;
}

/// 表单下拉里的一个套餐项
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOption {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub currency: String,
}

impl From<&Package> for PackageOption {
    fn from(p: &Package) -> Self {
        Self {
            id: p.id.clone().unwrap_or_default(),
            name: p.name.clone(),
            price: p.price,
            currency: p.currency.clone(),
        }
    }
}

impl PackageOption {
    /// 下拉显示文本，如 `Premium - LKR 95,000`
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, format_currency(self.price, &self.currency))
    }
}

/// 用户正在填写的表单字段
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub client_name: String,
    pub phone_number: String,
    pub package_id: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub message: String,
}

/// 一次提交的结果
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 发票已生成，聊天深链已打开
    Submitted {
        invoice_number: InvoiceNumber,
        chat_url: String,
        invoice_path: PathBuf,
    },
    /// 必填字段缺失或正在提交中，未产生任何副作用
    GuardFailed,
    /// 守卫之后的某一步失败
    Failed { reason: String },
}

/// 公开预约页的表单组件
pub struct BookingForm {
    packages: Vec<PackageOption>,
    pub draft: BookingDraft,
    pub location: LocationCapture,
    whatsapp_number: String,
    output_dir: PathBuf,
    busy: bool,
}

impl BookingForm {
    pub fn new(
        packages: Vec<PackageOption>,
        location: LocationCapture,
        whatsapp_number: Option<String>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            packages,
            draft: BookingDraft::default(),
            location,
            whatsapp_number: whatsapp_number
                .unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string()),
            output_dir,
            busy: false,
        }
    }

    pub fn packages(&self) -> &[PackageOption] {
        &self.packages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    fn selected_package(&self) -> Option<&PackageOption> {
        let id = self.draft.package_id.as_deref()?;
        self.packages.iter().find(|p| p.id == id)
    }

    /// 必填字段齐全且选中的套餐存在
    fn guard(&self) -> bool {
        !self.draft.client_name.trim().is_empty()
            && !self.draft.phone_number.trim().is_empty()
            && self.draft.event_date.is_some()
            && self.selected_package().is_some()
    }

    /// 提交表单 (系统时钟 + 线程随机源)
    pub fn submit(&mut self, handoff: &dyn ChatHandoff) -> SubmitOutcome {
        self.submit_with(&SystemClock, &mut rand::thread_rng(), handoff)
    }

    /// 提交表单，时钟和随机源注入
    pub fn submit_with(
        &mut self,
        clock: &dyn Clock,
        rng: &mut impl Rng,
        handoff: &dyn ChatHandoff,
    ) -> SubmitOutcome {
        if self.busy || !self.guard() {
            return SubmitOutcome::GuardFailed;
        }
        self.busy = true;
        let outcome = self.run_submission(clock, rng, handoff);
        self.busy = false;
        outcome
    }

    fn run_submission(
        &mut self,
        clock: &dyn Clock,
        rng: &mut impl Rng,
        handoff: &dyn ChatHandoff,
    ) -> SubmitOutcome {
        // guard 已验证过 Some
        let Some(package) = self.selected_package().cloned() else {
            return SubmitOutcome::GuardFailed;
        };
        let Some(event_date) = self.draft.event_date else {
            return SubmitOutcome::GuardFailed;
        };

        let invoice_number = InvoiceNumber::mint(clock, rng);

        let document = InvoiceDocument {
            invoice_number: invoice_number.clone(),
            issue_date: clock.today(),
            client_name: self.draft.client_name.trim().to_string(),
            phone_number: self.draft.phone_number.trim().to_string(),
            package_name: package.name.clone(),
            price_label: format_currency(package.price, &package.currency),
            event_date,
            location_label: self
                .location
                .pin()
                .map(|p| p.display_label())
                .unwrap_or_else(|| format::LOCATION_NOT_AVAILABLE.to_string()),
            location_link: self.location.link(),
            notes: Some(self.draft.message.clone())
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
        };

        let invoice_path = match document.save_to(&self.output_dir) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("invoice generation failed: {}", e);
                return SubmitOutcome::Failed {
                    reason: format!("invoice generation failed: {}", e),
                };
            }
        };

        // 消息里的定位: 有 pin 用链接，否则占位文本
        let location_link = self
            .location
            .link()
            .unwrap_or_else(|| LOCATION_PLACEHOLDER.to_string());
        let body = format::whatsapp_message(&WhatsAppMessage {
            name: self.draft.client_name.trim(),
            package_name: &package.name,
            event_date,
            location_link: &location_link,
            invoice_number: &invoice_number,
        });
        let chat_url = format::whatsapp_url(&self.whatsapp_number, &body);

        if let Err(e) = handoff.open(&chat_url) {
            tracing::error!("chat hand-off failed: {}", e);
            return SubmitOutcome::Failed {
                reason: format!("chat hand-off failed: {}", e),
            };
        }

        SubmitOutcome::Submitted {
            invoice_number,
            chat_url,
            invoice_path,
        }
    }
}
