//! # Submit Detection Use Case
//!
//! アップロードクライアントの状態機械
//!
//! 選択 → リクエスト構築 → 送信 → 受信 → 結果適用（または失敗報告）の
//! 1ラウンドトリップを所有する。同時に進行するリクエストは常に1つで、
//! タイムアウトで打ち切られた試行の遅延結果が後続の状態を
//! 上書きすることはない（シーケンスIDによるstaleガード）。

use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::domain::entities::detection_result::DetectionResult;
use crate::domain::entities::preview::Preview;
use crate::domain::entities::request_state::RequestState;
use crate::domain::entities::selected_image::SelectedImage;
use crate::domain::errors::DetectError;
use crate::domain::repositories::detection_repository::DetectionRepository;

/// アップロードクライアント
///
/// UIフラグ相当の全状態（選択画像・プレビュー・リクエスト状態・
/// 検出結果）を所有し、検出リポジトリへの1回の呼び出しを調停する。
pub struct UploadClient<D: DetectionRepository> {
    detection_repository: Arc<D>,
    timeout: Duration,
    selected: Option<SelectedImage>,
    preview: Option<Preview>,
    result: Option<DetectionResult>,
    state: RequestState,
    /// 送信試行ごとに進むシーケンスID
    /// 古い試行に属する結果は適用されない
    seq: u64,
}

impl<D: DetectionRepository> UploadClient<D> {
    /// 新しいクライアントを作成
    ///
    /// # Arguments
    ///
    /// * `detection_repository` - 検出リポジトリ
    /// * `timeout_secs` - クライアント側タイムアウト（秒）
    pub fn new(detection_repository: Arc<D>, timeout_secs: u64) -> Self {
        Self {
            detection_repository,
            timeout: Duration::from_secs(timeout_secs),
            selected: None,
            preview: None,
            result: None,
            state: RequestState::Idle,
            seq: 0,
        }
    }

    /// 画像を選択する
    ///
    /// 前回のプレビュー参照をrevokeして新しい参照に置き換え、
    /// 前回の検出結果をクリアする。進行中の試行があれば
    /// シーケンスIDを進めて無効化する。
    pub fn select_image(&mut self, image: SelectedImage) -> &Preview {
        if let Some(prev) = self.preview.as_mut() {
            prev.revoke();
        }
        let preview = Preview::for_file(image.file_name());
        info!("Selected image: {} ({} bytes)", image.file_name(), image.len());

        self.selected = Some(image);
        self.result = None;
        self.seq += 1;

        &*self.preview.insert(preview)
    }

    /// 選択中の画像を返す
    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    /// 現在のプレビュー参照を返す
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// 最後に適用された検出結果を返す
    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }

    /// 現在のリクエスト状態を返す
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// 選択中の画像をアップロードして検出結果を適用する
    ///
    /// # Errors
    ///
    /// - 画像未選択: `NoImageSelected`（ネットワーク呼び出しなし）
    /// - アップロード中: `DetectionInProgress`（二重送信ガード）
    /// - デッドライン超過: `Timeout`（トランスポートfutureはdropされる）
    /// - その他は検出リポジトリの分類済みエラーをそのまま返す
    ///
    /// いずれの経路でも復帰後の状態はUploadingではない。
    pub async fn submit(&mut self) -> Result<DetectionResult, DetectError> {
        if self.state.is_uploading() {
            return Err(DetectError::DetectionInProgress);
        }
        let image = match self.selected.clone() {
            Some(image) => image,
            None => return Err(DetectError::NoImageSelected),
        };

        self.state = RequestState::Uploading;
        self.seq += 1;
        let seq = self.seq;

        let request_id = Uuid::new_v4();
        info!(
            "Uploading {} for detection (request {})",
            image.file_name(),
            request_id
        );

        let outcome = tokio::time::timeout(
            self.timeout,
            self.detection_repository.detect(&image),
        )
        .await;

        match outcome {
            Err(_) => {
                // デッドラインが先に切れた。futureのdropで転送は中断されるが、
                // 念のためシーケンスIDを進めて遅延結果の適用を禁じる
                self.seq += 1;
                self.state = RequestState::Failed.settle();
                warn!("Detection request {} timed out", request_id);
                Err(DetectError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
            Ok(Ok(result)) => {
                if !self.apply_result(seq, result.clone()) {
                    warn!("Discarding stale result for request {}", request_id);
                    self.state = RequestState::Failed.settle();
                    return Err(DetectError::Timeout {
                        secs: self.timeout.as_secs(),
                    });
                }
                info!("Detection request {} succeeded", request_id);
                Ok(result)
            }
            Ok(Err(err)) => {
                // 診断の詳細はログへ。ユーザーには汎用メッセージのみ
                warn!("Detection request {} failed: {}", request_id, err);
                self.state = RequestState::Failed.settle();
                Err(err)
            }
        }
    }

    /// 結果を適用する
    ///
    /// 結果のシーケンスIDが現在の試行と一致する場合に限り適用する。
    /// タイムアウト報告済み、または新しい選択で置き換えられた試行の
    /// 結果が後から届いても状態を上書きしない。
    ///
    /// # Returns
    ///
    /// 適用された場合に `true`
    fn apply_result(&mut self, seq: u64, result: DetectionResult) -> bool {
        if seq != self.seq {
            return false;
        }
        self.result = Some(result);
        self.state = RequestState::Succeeded.settle();
        true
    }
}
