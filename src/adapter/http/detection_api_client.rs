//! Detection API Client
//!
//! DetectionRepositoryのHTTP実装
//!
//! multipart/form-dataで画像を1パートだけ含むPOSTを発行し、
//! 設定されたレスポンス形に応じてボディをデコードする。
//! reqwestクライアント自体にもタイムアウトを設定しているため、
//! デッドライン超過時は転送も協調的に中断される。

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::dto::detect_config::{DetectConfig, ResponseShape};
use crate::domain::entities::detection_result::DetectionResult;
use crate::domain::entities::selected_image::SelectedImage;
use crate::domain::errors::DetectError;
use crate::domain::repositories::detection_repository::DetectionRepository;
use crate::domain::services::display_url::{endpoint_url, output_display_url};

/// filename形レスポンスのボディ
#[derive(Debug, Deserialize)]
struct FilenameResponse {
    filename: Option<String>,
}

/// filename形レスポンスのボディをパースする
///
/// 200レスポンスのボディ不備はすべて論理的失敗（`MissingPayload`）であり、
/// トランスポートエラーとは区別される
fn parse_filename_response(body: &[u8]) -> Result<String, DetectError> {
    let response: FilenameResponse =
        serde_json::from_slice(body).map_err(|_| DetectError::MissingPayload)?;
    match response.filename {
        Some(filename) if !filename.trim().is_empty() => Ok(filename),
        _ => Err(DetectError::MissingPayload),
    }
}

/// 検出サービスAPIクライアント
pub struct DetectionApiClient {
    client: reqwest::Client,
    config: DetectConfig,
}

impl DetectionApiClient {
    /// 新しいクライアントを作成
    ///
    /// # Errors
    ///
    /// reqwestクライアントの構築に失敗した場合にエラーを返す
    pub fn new(config: DetectConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// reqwestのエラーを分類済みエラーへ変換する
    fn map_error(&self, err: reqwest::Error) -> DetectError {
        if err.is_timeout() {
            DetectError::Timeout {
                secs: self.config.timeout_secs,
            }
        } else {
            DetectError::Network {
                detail: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl DetectionRepository for DetectionApiClient {
    async fn detect(&self, image: &SelectedImage) -> Result<DetectionResult, DetectError> {
        let part = multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.media_type())
            .map_err(|e| DetectError::Network {
                detail: format!("invalid media type {}: {}", image.media_type(), e),
            })?;
        // フィールド名はサーバの期待と正確に一致しなければならない
        let form = multipart::Form::new().part(self.config.field_name.clone(), part);

        let url = endpoint_url(&self.config.base_url, &self.config.detect_path);
        debug!("POST {} (field: {})", url, self.config.field_name);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectError::Status {
                code: status.as_u16(),
            });
        }

        match self.config.response_shape {
            ResponseShape::Image => {
                let media_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("image/jpeg")
                    .to_string();
                let bytes = response.bytes().await.map_err(|e| self.map_error(e))?;
                if bytes.is_empty() {
                    return Err(DetectError::MissingPayload);
                }
                Ok(DetectionResult::ImageBytes {
                    bytes: bytes.to_vec(),
                    media_type,
                })
            }
            ResponseShape::Filename => {
                let body = response.bytes().await.map_err(|e| self.map_error(e))?;
                let filename = parse_filename_response(&body)?;
                Ok(DetectionResult::RemoteFile {
                    url: output_display_url(&self.config.base_url, &filename),
                })
            }
        }
    }

    async fn fetch_output(&self, url: &str) -> Result<Vec<u8>, DetectError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectError::Status {
                code: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.map_error(e))?;
        if bytes.is_empty() {
            return Err(DetectError::MissingPayload);
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filename_response_success() {
        let filename = parse_filename_response(br#"{"filename": "out.png"}"#).unwrap();
        assert_eq!(filename, "out.png");
    }

    #[test]
    fn test_parse_filename_response_missing_field() {
        let err = parse_filename_response(br#"{}"#).unwrap_err();
        assert!(matches!(err, DetectError::MissingPayload));
    }

    #[test]
    fn test_parse_filename_response_empty_filename() {
        let err = parse_filename_response(br#"{"filename": ""}"#).unwrap_err();
        assert!(matches!(err, DetectError::MissingPayload));
    }

    #[test]
    fn test_parse_filename_response_null_filename() {
        let err = parse_filename_response(br#"{"filename": null}"#).unwrap_err();
        assert!(matches!(err, DetectError::MissingPayload));
    }

    #[test]
    fn test_parse_filename_response_invalid_json() {
        let err = parse_filename_response(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, DetectError::MissingPayload));
    }

    #[test]
    fn test_parse_filename_response_ignores_extra_fields() {
        let filename =
            parse_filename_response(br#"{"filename": "out.png", "classes": ["car"]}"#).unwrap();
        assert_eq!(filename, "out.png");
    }
}
