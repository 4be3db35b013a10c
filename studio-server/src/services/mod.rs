//! 服务模块

pub mod storage;

pub use storage::{GalleryStore, StoredImage};
