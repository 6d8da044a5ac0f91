//! # Detection Error Taxonomy
//!
//! エラー分類とユーザー向けメッセージ

use thiserror::Error;

/// 検出リクエストのエラー分類
///
/// - ユーザー入力エラー: `NoImageSelected`, `DetectionInProgress`
/// - タイムアウト: `Timeout`（クライアント側デッドライン、advisory）
/// - 論理的失敗: `MissingPayload`（200だが期待ペイロードなし）
/// - トランスポートエラー: `Status`, `Network`
///
/// いずれも致命的ではなく、発生後は必ずIdle状態へ復帰する。
#[derive(Debug, Error)]
pub enum DetectError {
    /// 画像未選択のままsubmitされた
    #[error("no image selected")]
    NoImageSelected,

    /// アップロード中に再度submitされた（二重送信ガード）
    #[error("a detection request is already in progress")]
    DetectionInProgress,

    /// クライアント側デッドラインの超過
    #[error("detection request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// 200レスポンスに期待されたペイロードがない
    /// （空ボディ、またはfilenameフィールドの欠落）
    #[error("detection service returned no result payload")]
    MissingPayload,

    /// 2xx以外のHTTPステータス
    #[error("detection service responded with status {code}")]
    Status { code: u16 },

    /// トランスポートレベルの失敗（接続不可など）
    #[error("network error: {detail}")]
    Network { detail: String },
}

impl DetectError {
    /// ユーザーに提示するメッセージを返す
    ///
    /// 診断の詳細はログにのみ出力し、ユーザーには
    /// 種別ごとの汎用メッセージだけを見せる
    pub fn user_message(&self) -> &'static str {
        match self {
            DetectError::NoImageSelected => "Please select an image first.",
            DetectError::DetectionInProgress => "Detection is already running. Please wait.",
            DetectError::Timeout { .. } => "The detection request timed out. Please try again.",
            DetectError::MissingPayload => "Detection failed. Please try another image.",
            DetectError::Status { .. } | DetectError::Network { .. } => {
                "Server error! Please try again later."
            }
        }
    }

    /// ユーザー入力に起因するエラーかどうか
    ///
    /// ネットワーク呼び出しの前にブロックされる検証エラー
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DetectError::NoImageSelected | DetectError::DetectionInProgress
        )
    }

    /// トランスポートレベルの失敗かどうか
    pub fn is_transport_error(&self) -> bool {
        matches!(self, DetectError::Status { .. } | DetectError::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_distinct_per_category() {
        // 論理的失敗はトランスポートエラーと区別して提示される
        let logical = DetectError::MissingPayload.user_message();
        let transport = DetectError::Status { code: 500 }.user_message();
        let timeout = DetectError::Timeout { secs: 10 }.user_message();
        let validation = DetectError::NoImageSelected.user_message();

        assert_ne!(logical, transport);
        assert_ne!(logical, timeout);
        assert_ne!(validation, transport);
    }

    #[test]
    fn test_status_and_network_share_generic_message() {
        assert_eq!(
            DetectError::Status { code: 502 }.user_message(),
            DetectError::Network {
                detail: "connection refused".to_string()
            }
            .user_message()
        );
    }

    #[test]
    fn test_is_user_error() {
        assert!(DetectError::NoImageSelected.is_user_error());
        assert!(DetectError::DetectionInProgress.is_user_error());
        assert!(!DetectError::Timeout { secs: 10 }.is_user_error());
        assert!(!DetectError::MissingPayload.is_user_error());
        assert!(!DetectError::Status { code: 500 }.is_user_error());
    }

    #[test]
    fn test_is_transport_error() {
        assert!(DetectError::Status { code: 404 }.is_transport_error());
        assert!(DetectError::Network {
            detail: "EOF".to_string()
        }
        .is_transport_error());
        assert!(!DetectError::MissingPayload.is_transport_error());
        assert!(!DetectError::Timeout { secs: 10 }.is_transport_error());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = DetectError::Timeout { secs: 10 };
        assert!(err.to_string().contains("10 seconds"));

        let err = DetectError::Status { code: 503 };
        assert!(err.to_string().contains("503"));
    }
}
