//! # Image Repository Trait
//!
//! ローカル画像の読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::selected_image::SelectedImage;

/// 画像リポジトリ
///
/// ユーザーが指定したパスから画像を読み込む。
/// ブラウザUIにおけるファイルピッカーに相当するシーム。
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// 画像ファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 画像ファイルのパス
    ///
    /// # Returns
    ///
    /// 読み込まれた選択画像（ファイル名・メディアタイプ・バイト列）
    ///
    /// # Errors
    ///
    /// ファイルの読み込みに失敗した場合、
    /// または画像がサイズ上限を超える場合にエラーを返す
    async fn load_image(&self, path: &Path) -> Result<SelectedImage>;
}
