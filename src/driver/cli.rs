//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 画像を検出サービスにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "detsend")]
#[command(about = "Upload an image to an object-detection service and save the annotated result", long_about = None)]
pub struct Args {
    /// Image file to upload (omit to see the validation message)
    pub image: Option<String>,

    /// Dry run mode - validate and report without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Where to save the annotated image (default: detected-<input name>)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the configured API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the configured client-side timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Config file path
    #[arg(short, long, default_value = "./.detsend/config.json")]
    pub config: String,
}
