//! 发票编号
//!
//! 规则: `SP-<4位年><2位月>-<4位随机数 1000..=9999>`，年/月取生成时刻的
//! 本地日历。客户端与服务端通过同一个 [`InvoiceNumber::mint`] 铸号，
//! 时钟和随机源注入，便于测试和未来统一两条铸号路径。
//!
//! 不做唯一性检查，碰撞概率是已接受的已知限制。

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 时钟抽象 (铸号只需要本地日历日期)
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 系统本地时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 人类可读的发票编号，每次预约尝试铸一个，不保证全局唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// 铸造一个新编号
    pub fn mint(clock: &dyn Clock, rng: &mut impl Rng) -> Self {
        let today = clock.today();
        let random: u32 = rng.gen_range(1000..=9999);
        Self(format!("SP-{}{:02}-{}", today.year(), today.month(), random))
    }

    /// 使用系统时钟和线程随机源铸号
    pub fn mint_now() -> Self {
        Self::mint(&SystemClock, &mut rand::thread_rng())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for InvoiceNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
