//! # RequestState
//!
//! アップロードリクエストの状態機械

/// リクエスト状態
///
/// 状態遷移: `Idle → Uploading → {Succeeded, Failed} → Idle`
///
/// 不変条件: ビジー表示（送信操作の無効化）は状態がUploadingの場合に限る。
/// SucceededとFailedは一時的な状態で、リトライも失敗記録の永続化も
/// 存在しないため、即座にIdleへ畳み込まれる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

impl RequestState {
    /// アップロード中かどうかを返す
    #[inline]
    pub fn is_uploading(&self) -> bool {
        matches!(self, RequestState::Uploading)
    }

    /// 一時的な完了状態をIdleへ畳み込む
    ///
    /// UploadingはそのままUploadingに留まる（完了処理のみが解除できる）
    pub fn settle(self) -> RequestState {
        match self {
            RequestState::Succeeded | RequestState::Failed => RequestState::Idle,
            other => other,
        }
    }
}
