//! Adapter Layer
//!
//! 外部システム（検出サービスHTTP API, ファイルシステム）との統合

pub mod config;
pub mod http;
pub mod repositories;
