//! # DetectionResult Value Object
//!
//! 検出結果のバリューオブジェクト

/// 検出結果
///
/// 1回のリクエスト/レスポンスサイクルにつき、
/// 必ずどちらか一方の表現のみがアクティブになる：
///
/// - `ImageBytes`: レスポンスボディとして直接返された注釈付き画像
/// - `RemoteFile`: JSONで返されたファイル名から組み立てた表示URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionResult {
    /// レスポンスボディの画像バイト列
    ImageBytes {
        bytes: Vec<u8>,
        media_type: String,
    },
    /// サーバ側outputsディレクトリ上のファイルへの表示URL
    RemoteFile { url: String },
}

impl DetectionResult {
    /// 結果の人間可読な説明を返す（ログ・進捗表示用）
    pub fn describe(&self) -> String {
        match self {
            DetectionResult::ImageBytes { bytes, media_type } => {
                format!("{} bytes ({})", bytes.len(), media_type)
            }
            DetectionResult::RemoteFile { url } => url.clone(),
        }
    }
}
