//! 作品集图片存储
//!
//! 上传的图片统一转成 JPEG 存到 WORK_DIR/uploads/gallery，
//! 文件名取压缩后内容的 SHA-256，天然内容去重。

use std::io::Cursor;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use shared::{AppError, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// JPEG quality (85% - 在画质和体积之间折中)
const JPEG_QUALITY: u8 = 85;

/// 公开访问路径前缀
const PUBLIC_PREFIX: &str = "/uploads/gallery";

/// 一次保存的结果
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub file_name: String,
    /// 公开 URL (入库到 gallery_image.image_url)
    pub url: String,
    pub size: usize,
    /// 内容已存在，复用旧文件
    pub deduplicated: bool,
}

/// 作品集图片存储
#[derive(Debug)]
pub struct GalleryStore {
    uploads_dir: PathBuf,
}

impl GalleryStore {
    pub fn new(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    fn gallery_dir(&self) -> PathBuf {
        self.uploads_dir.join("gallery")
    }

    /// 校验并保存图片，返回公开 URL
    ///
    /// 任何格式的输入统一重编码为 JPEG；同内容重复上传复用旧文件。
    pub fn save(&self, data: &[u8]) -> AppResult<StoredImage> {
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        let img = image::load_from_memory(data)
            .map_err(|e| AppError::validation(format!("Invalid image: {}", e)))?;

        let mut buffer = Vec::new();
        {
            let mut cursor = Cursor::new(&mut buffer);
            let rgb_img = img.to_rgb8();
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
            rgb_img
                .write_with_encoder(encoder)
                .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
        }

        let hash = hex::encode(Sha256::digest(&buffer));
        let file_name = format!("{}.jpg", hash);
        let path = self.gallery_dir().join(&file_name);

        let deduplicated = path.exists();
        if !deduplicated {
            std::fs::create_dir_all(self.gallery_dir())
                .map_err(|e| AppError::internal(format!("Failed to create gallery dir: {}", e)))?;
            std::fs::write(&path, &buffer)
                .map_err(|e| AppError::internal(format!("Failed to write image: {}", e)))?;
        }

        Ok(StoredImage {
            url: format!("{}/{}", PUBLIC_PREFIX, file_name),
            size: buffer.len(),
            file_name,
            deduplicated,
        })
    }

    /// 删除 URL 对应的存储对象
    ///
    /// 只取 URL 的文件名部分，杜绝路径穿越。文件不存在视为已删除。
    pub fn delete(&self, image_url: &str) -> AppResult<bool> {
        let Some(file_name) = Path::new(image_url)
            .file_name()
            .and_then(|n| n.to_str())
        else {
            return Err(AppError::validation(format!(
                "Invalid image url: {}",
                image_url
            )));
        };

        let path = self.gallery_dir().join(file_name);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)
            .map_err(|e| AppError::internal(format!("Failed to delete image: {}", e)))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::from_fn(4, 4, |x, y| {
            image::Rgb([(x * 60) as u8, (y * 60) as u8, 128])
        });
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_save_converts_to_jpeg_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        let store = GalleryStore::new(dir.path().to_path_buf());

        let stored = store.save(&tiny_png()).unwrap();
        assert!(stored.file_name.ends_with(".jpg"));
        assert!(stored.url.starts_with("/uploads/gallery/"));
        assert!(!stored.deduplicated);
        assert!(dir.path().join("gallery").join(&stored.file_name).exists());

        // 同内容重复上传复用旧文件
        let again = store.save(&tiny_png()).unwrap();
        assert!(again.deduplicated);
        assert_eq!(again.file_name, stored.file_name);
    }

    #[test]
    fn test_save_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let store = GalleryStore::new(dir.path().to_path_buf());
        assert!(store.save(b"definitely not an image").is_err());
    }

    #[test]
    fn test_delete_by_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = GalleryStore::new(dir.path().to_path_buf());

        let stored = store.save(&tiny_png()).unwrap();
        assert!(store.delete(&stored.url).unwrap());
        assert!(!store.delete(&stored.url).unwrap());

        // 路径穿越只取文件名，落在 gallery 目录内
        assert!(!store.delete("/uploads/gallery/../../etc/passwd").unwrap());
    }
}
