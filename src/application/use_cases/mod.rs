//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SelectImageUseCase**: ローカル画像の読み込み（ファイル選択）
//! - **UploadClient**: 選択 → アップロード → 結果適用の状態機械

pub mod select_image;
pub mod submit_detection;
