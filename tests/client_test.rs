//! UploadClient Integration Tests
//!
//! UploadClient の統合テスト（スタブリポジトリ使用）

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use detsend::application::use_cases::submit_detection::UploadClient;
use detsend::domain::entities::detection_result::DetectionResult;
use detsend::domain::entities::request_state::RequestState;
use detsend::domain::entities::selected_image::SelectedImage;
use detsend::domain::errors::DetectError;
use detsend::domain::repositories::detection_repository::DetectionRepository;
use detsend::domain::services::display_url::output_display_url;

type Outcome = Box<dyn Fn() -> Result<DetectionResult, DetectError> + Send + Sync>;

/// スクリプト化された結果を返すスタブリポジトリ
struct StubRepository {
    detect_calls: AtomicUsize,
    outcome: Outcome,
}

impl StubRepository {
    fn new(outcome: Outcome) -> Self {
        Self {
            detect_calls: AtomicUsize::new(0),
            outcome,
        }
    }

    fn calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DetectionRepository for StubRepository {
    async fn detect(&self, _image: &SelectedImage) -> Result<DetectionResult, DetectError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        (self.outcome)()
    }

    async fn fetch_output(&self, _url: &str) -> Result<Vec<u8>, DetectError> {
        Ok(vec![0xFF, 0xD8])
    }
}

fn test_image(name: &str) -> SelectedImage {
    SelectedImage::new(name.to_string(), "image/jpeg".to_string(), vec![0xFF, 0xD8, 0xFF]).unwrap()
}

#[tokio::test]
async fn test_binary_response_round_trip() {
    let repo = Arc::new(StubRepository::new(Box::new(|| {
        Ok(DetectionResult::ImageBytes {
            bytes: vec![1, 2, 3, 4],
            media_type: "image/jpeg".to_string(),
        })
    })));
    let mut client = UploadClient::new(repo.clone(), 10);
    client.select_image(test_image("photo.jpg"));

    let result = client.submit().await.unwrap();

    // 表示参照はレスポンスのバイト列から導出される
    match result {
        DetectionResult::ImageBytes { bytes, media_type } => {
            assert_eq!(bytes, vec![1, 2, 3, 4]);
            assert_eq!(media_type, "image/jpeg");
        }
        other => panic!("expected ImageBytes, got {:?}", other),
    }
    assert_eq!(repo.calls(), 1);
    assert_eq!(client.state(), RequestState::Idle);
    assert!(client.result().is_some());
}

#[tokio::test]
async fn test_filename_response_round_trip() {
    let url = output_display_url("http://x", "out.png");
    assert_eq!(url, "http://x/outputs/out.png");

    let repo = Arc::new(StubRepository::new(Box::new(move || {
        Ok(DetectionResult::RemoteFile {
            url: output_display_url("http://x", "out.png"),
        })
    })));
    let mut client = UploadClient::new(repo, 10);
    client.select_image(test_image("photo.jpg"));

    let result = client.submit().await.unwrap();

    assert_eq!(
        result,
        DetectionResult::RemoteFile {
            url: "http://x/outputs/out.png".to_string()
        }
    );
}

#[tokio::test]
async fn test_submit_without_selection_issues_no_request() {
    let repo = Arc::new(StubRepository::new(Box::new(|| {
        panic!("detect should not be called")
    })));
    let mut client = UploadClient::new(repo.clone(), 10);

    let err = client.submit().await.unwrap_err();

    assert!(matches!(err, DetectError::NoImageSelected));
    assert_eq!(err.user_message(), "Please select an image first.");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_missing_payload_sets_no_result() {
    let repo = Arc::new(StubRepository::new(Box::new(|| {
        Err(DetectError::MissingPayload)
    })));
    let mut client = UploadClient::new(repo, 10);
    client.select_image(test_image("photo.jpg"));

    let err = client.submit().await.unwrap_err();

    assert!(matches!(err, DetectError::MissingPayload));
    assert!(client.result().is_none());
    assert_eq!(client.state(), RequestState::Idle);
}

#[tokio::test]
async fn test_transport_error_sets_no_result_and_settles_to_idle() {
    let repo = Arc::new(StubRepository::new(Box::new(|| {
        Err(DetectError::Status { code: 502 })
    })));
    let mut client = UploadClient::new(repo, 10);
    client.select_image(test_image("photo.jpg"));

    let err = client.submit().await.unwrap_err();

    assert!(err.is_transport_error());
    assert!(client.result().is_none());
    assert_eq!(client.state(), RequestState::Idle);
}

#[tokio::test]
async fn test_new_selection_clears_previous_result() {
    let repo = Arc::new(StubRepository::new(Box::new(|| {
        Ok(DetectionResult::ImageBytes {
            bytes: vec![7],
            media_type: "image/jpeg".to_string(),
        })
    })));
    let mut client = UploadClient::new(repo, 10);

    let first_preview_id = client.select_image(test_image("a.jpg")).id();
    client.submit().await.unwrap();
    assert!(client.result().is_some());

    let second_preview_id = client.select_image(test_image("b.jpg")).id();

    assert_ne!(first_preview_id, second_preview_id);
    assert!(client.result().is_none());
    assert_eq!(client.selected().unwrap().file_name(), "b.jpg");
}

/// 応答しないリポジトリ（タイムアウト検証用）
struct NeverRepository {
    detect_calls: AtomicUsize,
}

#[async_trait]
impl DetectionRepository for NeverRepository {
    async fn detect(&self, _image: &SelectedImage) -> Result<DetectionResult, DetectError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(24 * 3600)).await;
        unreachable!("the deadline should fire first")
    }

    async fn fetch_output(&self, _url: &str) -> Result<Vec<u8>, DetectError> {
        Ok(vec![])
    }
}

#[tokio::test(start_paused = true)]
async fn test_timeout_surfaces_exactly_once() {
    let repo = Arc::new(NeverRepository {
        detect_calls: AtomicUsize::new(0),
    });
    let mut client = UploadClient::new(repo.clone(), 10);
    client.select_image(test_image("photo.jpg"));

    let err = client.submit().await.unwrap_err();

    assert!(matches!(err, DetectError::Timeout { secs: 10 }));
    assert_eq!(client.state(), RequestState::Idle);
    assert!(client.result().is_none());
    assert_eq!(repo.detect_calls.load(Ordering::SeqCst), 1);

    // タイムアウト後もクライアントは使用可能（再送信できる）
    let err = client.submit().await.unwrap_err();
    assert!(matches!(err, DetectError::Timeout { .. }));
    assert_eq!(repo.detect_calls.load(Ordering::SeqCst), 2);
}
