//! Detsend - Detection Upload Client
//!
//! 画像を物体検出サービスにアップロードして注釈付き画像を保存する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use detsend::adapter::config::Config;
use detsend::driver::{Args, DetectionWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Resolve configuration (file + env override), failing fast on bad values
    let config = Config::resolve(&args.config)?;

    let workflow = DetectionWorkflow::new(config);

    workflow.execute(args).await
}
