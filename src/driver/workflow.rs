//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::http::DetectionApiClient;
use crate::adapter::repositories::fs_image_repository::FsImageRepository;
use crate::application::use_cases::select_image::SelectImageUseCase;
use crate::application::use_cases::submit_detection::UploadClient;
use crate::domain::entities::detection_result::DetectionResult;
use crate::domain::errors::DetectError;
use crate::domain::repositories::detection_repository::DetectionRepository;
use crate::domain::services::display_url::endpoint_url;

use super::cli::Args;

/// 注釈付き画像のデフォルト保存先を導出する
pub fn default_output_path(input_file_name: &str) -> PathBuf {
    PathBuf::from(format!("detected-{}", input_file_name))
}

/// 検出アップロードワークフロー
pub struct DetectionWorkflow {
    config: Config,
}

impl DetectionWorkflow {
    /// 新しいワークフローを作成
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// ワークフローを実行する
    ///
    /// 設定の解決 → 画像の選択 → アップロード → 結果の保存
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting detection upload...");
        info!("Dry run: {}", args.dry_run);

        // Apply CLI overrides, then fail fast on the merged configuration
        let mut config = self.config.clone();
        if let Some(base_url) = &args.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = args.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config.validate()?;

        println!("✓ Using configuration:");
        println!("  Base URL: {}", config.base_url);
        println!(
            "  Endpoint: {}",
            endpoint_url(&config.base_url, &config.detect_path)
        );
        println!("  Field:    {}", config.field_name);
        println!("  Shape:    {:?}", config.response_shape);
        println!("  Timeout:  {}s", config.timeout_secs);

        // Image path is the CLI equivalent of the file picker
        let image_path = match &args.image {
            Some(path) => shellexpand::tilde(path).to_string(),
            None => {
                println!("⚠ {}", DetectError::NoImageSelected.user_message());
                return Ok(());
            }
        };

        let image_repo = Arc::new(FsImageRepository::new());
        let select_use_case = SelectImageUseCase::new(image_repo);
        let image = select_use_case.execute(Path::new(&image_path)).await?;
        println!(
            "✓ Selected {} ({} bytes, {})",
            image.file_name(),
            image.len(),
            image.media_type()
        );

        let detect_config = config.to_detect_config();
        let api_client = Arc::new(DetectionApiClient::new(detect_config)?);

        let mut upload_client = UploadClient::new(api_client.clone(), config.timeout_secs);
        let output_path = args
            .output
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| default_output_path(image.file_name()));

        let preview = upload_client.select_image(image);
        println!("✓ Preview ready: {}", preview.source().unwrap_or_default());

        if args.dry_run {
            println!("✓ Dry-run mode (not actually uploading)");
            println!(
                "  Would POST the image as field '{}' and save the result to {}",
                config.field_name,
                output_path.display()
            );
            return Ok(());
        }

        match upload_client.submit().await {
            Ok(DetectionResult::ImageBytes { bytes, media_type }) => {
                tokio::fs::write(&output_path, &bytes).await?;
                println!(
                    "✓ Saved annotated image to {} ({} bytes, {})",
                    output_path.display(),
                    bytes.len(),
                    media_type
                );
            }
            Ok(DetectionResult::RemoteFile { url }) => {
                println!("✓ Annotated image available at {}", url);
                let bytes = api_client.fetch_output(&url).await?;
                tokio::fs::write(&output_path, &bytes).await?;
                println!(
                    "✓ Saved annotated image to {} ({} bytes)",
                    output_path.display(),
                    bytes.len()
                );
            }
            Err(err) => {
                println!("⚠ {}", err.user_message());
                return Err(err.into());
            }
        }

        println!("✓ Detection complete!");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path("photo.jpg");
        assert_eq!(path, PathBuf::from("detected-photo.jpg"));
    }

    #[test]
    fn test_default_output_path_keeps_extension() {
        let path = default_output_path("scan.tiff");
        assert_eq!(path, PathBuf::from("detected-scan.tiff"));
    }
}
