//! 数据库行模型
//!
//! 表内记录带 `RecordId` 主键；对外 API 使用 shared 里的实体类型，
//! 行模型负责两者之间的转换。

mod booking;
mod gallery_image;
mod package;

pub use booking::BookingRow;
pub use gallery_image::GalleryImageRow;
pub use package::PackageRow;
