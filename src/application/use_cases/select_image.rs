//! # Select Image Use Case
//!
//! 画像選択ユースケース

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::selected_image::SelectedImage;
use crate::domain::repositories::image_repository::ImageRepository;

/// 画像選択ユースケース
///
/// 指定されたパスから画像を読み込む（ファイルピッカー相当）
pub struct SelectImageUseCase<R: ImageRepository> {
    image_repository: Arc<R>,
}

impl<R: ImageRepository> SelectImageUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `image_repository` - 画像リポジトリ
    pub fn new(image_repository: Arc<R>) -> Self {
        Self { image_repository }
    }

    /// 画像を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 画像ファイルのパス
    ///
    /// # Errors
    ///
    /// 読み込みに失敗した場合、またはサイズ上限を超える場合にエラーを返す
    pub async fn execute(&self, path: &Path) -> Result<SelectedImage> {
        self.image_repository.load_image(path).await
    }
}
