//! # Detection Configuration DTO
//!
//! 検出リクエスト設定のData Transfer Object

use serde::{Deserialize, Serialize};

/// レスポンス形
///
/// 検出サービスが返すレスポンスの形。デプロイ先ごとの
/// コード分岐ではなく、設定として1つのクライアントを
/// パラメータ化する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    /// 200レスポンスのボディが注釈付き画像そのもの
    Image,
    /// 200レスポンスがJSON `{"filename": "..."}` で、
    /// 画像は `{base_url}/outputs/{filename}` から取得する
    Filename,
}

/// 検出リクエスト設定
///
/// 1回のアップロードに必要な、APIコントラクトで合意済みの値
#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// 検出サービスのベースURL
    pub base_url: String,
    /// 検出エンドポイントのパス（例: "/detect", "/upload/"）
    pub detect_path: String,
    /// multipartのファイルパートのフィールド名
    /// サーバの期待と正確に一致しなければならない（"image" or "file"）
    pub field_name: String,
    /// レスポンス形
    pub response_shape: ResponseShape,
    /// クライアント側タイムアウト（秒）
    pub timeout_secs: u64,
}

impl DetectConfig {
    /// 新しい検出設定を作成
    pub fn new(
        base_url: String,
        detect_path: String,
        field_name: String,
        response_shape: ResponseShape,
        timeout_secs: u64,
    ) -> Self {
        Self {
            base_url,
            detect_path,
            field_name,
            response_shape,
            timeout_secs,
        }
    }
}
