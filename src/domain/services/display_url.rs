//! # Display URL Service
//!
//! 検出結果の表示URLを組み立てる

/// サーバ側outputsディレクトリのパスセグメント
///
/// 検出サーバは注釈付き画像を `outputs/{元ファイル名}` に保存する
pub const OUTPUTS_PATH: &str = "/outputs";

/// ベースURLと検出パスからエンドポイントURLを組み立てる
///
/// ベースURL末尾のスラッシュの有無に依存しない
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// JSONレスポンスのファイル名から検出画像の表示URLを組み立てる
///
/// # Arguments
///
/// * `base_url` - 検出サービスのベースURL
/// * `filename` - レスポンスで返されたファイル名
///
/// # Returns
///
/// `{base_url}/outputs/{filename}` 形式の表示URL
pub fn output_display_url(base_url: &str, filename: &str) -> String {
    format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        OUTPUTS_PATH,
        filename.trim_start_matches('/')
    )
}
