//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **SelectedImage**: アップロード対象として選択された画像
//! - **Preview**: 選択画像のプレビュー参照（破棄可能なハンドル）
//! - **DetectionResult**: 検出結果（画像バイト列 or リモートファイル参照）
//! - **RequestState**: アップロードリクエストの状態

pub mod detection_result;
pub mod preview;
pub mod request_state;
pub mod selected_image;
