//! Filesystem Image Repository
//!
//! ImageRepositoryのファイルシステム実装
//!
//! 拡張子からメディアタイプを推定する。ファイルピッカーの
//! image/*フィルタ相当の検証はここで行う（サーバ側では
//! 強制されないため、未知の拡張子は警告の上octet-streamで送る）。

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::warn;
use std::path::Path;

use crate::domain::entities::selected_image::SelectedImage;
use crate::domain::repositories::image_repository::ImageRepository;

/// 拡張子から宣言メディアタイプを推定する
pub fn media_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// ファイルシステム画像リポジトリ
pub struct FsImageRepository;

impl FsImageRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsImageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageRepository for FsImageRepository {
    async fn load_image(&self, path: &Path) -> Result<SelectedImage> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .with_context(|| format!("Path has no file name: {}", path.display()))?;

        let media_type = path
            .extension()
            .and_then(|ext| media_type_for_extension(&ext.to_string_lossy()))
            .unwrap_or_else(|| {
                warn!("Unrecognized image extension for {}", file_name);
                "application/octet-stream"
            })
            .to_string();

        SelectedImage::new(file_name, media_type, bytes)
    }
}
