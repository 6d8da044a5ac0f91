//! # Detection Repository Trait
//!
//! 検出サービスへのアップロードを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::detection_result::DetectionResult;
use crate::domain::entities::selected_image::SelectedImage;
use crate::domain::errors::DetectError;

/// 検出リポジトリ
///
/// 外部の検出サービス（不透明なHTTPコラボレータ）への
/// 1回のリクエスト/レスポンスラウンドトリップを担当する。
/// テストではモック、本番ではHTTPクライアント実装を使用する。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DetectionRepository: Send + Sync {
    /// 画像をアップロードして検出結果を受け取る
    ///
    /// # Arguments
    ///
    /// * `image` - アップロードする選択画像
    ///
    /// # Returns
    ///
    /// 検出結果（画像バイト列、または表示URL）
    ///
    /// # Errors
    ///
    /// トランスポートエラー、2xx以外のステータス、
    /// ペイロード欠落の場合に分類済みの `DetectError` を返す
    async fn detect(&self, image: &SelectedImage) -> Result<DetectionResult, DetectError>;

    /// サーバ側outputsファイルの内容を取得する
    ///
    /// `RemoteFile` 形の結果をローカル保存するための補助GET。
    /// ブラウザUIにおける `<img>` タグのフェッチに相当する。
    async fn fetch_output(&self, url: &str) -> Result<Vec<u8>, DetectError>;
}
