//! HTTP Adapter
//!
//! 検出サービスAPIへのHTTPクライアント実装

pub mod detection_api_client;

pub use detection_api_client::DetectionApiClient;
