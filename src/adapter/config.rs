//! Configuration
//!
//! JSON設定ファイルの読み込みと検証
//!
//! ベースURLは環境変数 `DETSEND_API_BASE_URL` で上書きできる
//! （環境変数が設定ファイルより優先される）。必須値の検証は
//! 起動時にfail fastで行い、未解決のプレースホルダを
//! 実行時まで持ち越さない。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::detect_config::{DetectConfig, ResponseShape};

/// ベースURLを上書きする環境変数名
pub const BASE_URL_ENV: &str = "DETSEND_API_BASE_URL";

/// 元のWeb UIが未解決のまま出荷していたプレースホルダ
/// 設定値として現れた場合は設定エラーとして弾く
const UNRESOLVED_PLACEHOLDER: &str = "NEXT_PUBLIC_API_BASE_URL";

fn default_detect_path() -> String {
    "/detect".to_string()
}

fn default_field_name() -> String {
    "image".to_string()
}

fn default_response_shape() -> ResponseShape {
    ResponseShape::Image
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// 検出サービスのベースURL（必須）
    #[serde(default)]
    pub base_url: String,
    /// 検出エンドポイントのパス
    #[serde(default = "default_detect_path")]
    pub detect_path: String,
    /// multipartファイルパートのフィールド名
    #[serde(default = "default_field_name")]
    pub field_name: String,
    /// レスポンス形（"image" or "filename"）
    #[serde(default = "default_response_shape")]
    pub response_shape: ResponseShape,
    /// クライアント側タイムアウト（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            detect_path: default_detect_path(),
            field_name: default_field_name(),
            response_shape: default_response_shape(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 設定を解決する
    ///
    /// ファイル（存在すれば）→ 環境変数上書き → 検証の順。
    /// ファイルがなくても環境変数でベースURLが与えられていれば
    /// 残りはデフォルト値で動作する。
    ///
    /// # Errors
    ///
    /// ファイルのパース失敗、または検証失敗の場合にエラーを返す
    pub fn resolve(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::load(path)?
        } else {
            Config::default()
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// 必須値を検証する
    ///
    /// # Errors
    ///
    /// - ベースURLが空、プレースホルダのまま、またはhttp(s)でない
    /// - 検出パスが `/` で始まらない
    /// - フィールド名が空
    /// - タイムアウトが0
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!(
                "base_url is not configured (set it in the config file or via {})",
                BASE_URL_ENV
            );
        }
        if self.base_url.contains(UNRESOLVED_PLACEHOLDER) {
            anyhow::bail!("base_url contains an unresolved placeholder: {}", self.base_url);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://: {}", self.base_url);
        }
        if !self.detect_path.starts_with('/') {
            anyhow::bail!("detect_path must start with '/': {}", self.detect_path);
        }
        if self.field_name.trim().is_empty() {
            anyhow::bail!("field_name must not be empty");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Application層のDTOへ変換する
    pub fn to_detect_config(&self) -> DetectConfig {
        DetectConfig::new(
            self.base_url.clone(),
            self.detect_path.clone(),
            self.field_name.clone(),
            self.response_shape,
            self.timeout_secs,
        )
    }
}
