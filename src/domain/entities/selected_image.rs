//! # SelectedImage Entity
//!
//! アップロード対象として選択された画像のドメインエンティティ

/// アップロードサイズの上限（バイト）
///
/// 検出サーバは8MBを超えるアップロードを拒否するため、
/// クライアント側でも送信前に検証する
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// 選択された画像
///
/// ユーザーが選んだ画像ファイルを表現するエンティティ。
/// ファイル名・宣言されたメディアタイプ・生のバイト列を保持する。
/// 新しい選択が行われると丸ごと置き換えられる。
#[derive(Debug, Clone)]
pub struct SelectedImage {
    file_name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl SelectedImage {
    /// 新しい選択画像を作成
    ///
    /// # Arguments
    ///
    /// * `file_name` - 元ファイル名（multipartのファイル名として送信される）
    /// * `media_type` - 宣言されたメディアタイプ（例: "image/jpeg"）
    /// * `bytes` - 画像の生バイト列
    ///
    /// # Errors
    ///
    /// バイト列が空、またはサイズ上限を超える場合にエラーを返す
    pub fn new(file_name: String, media_type: String, bytes: Vec<u8>) -> anyhow::Result<Self> {
        if bytes.is_empty() {
            anyhow::bail!("Selected image is empty: {}", file_name);
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            anyhow::bail!(
                "Selected image exceeds the 8MB upload limit: {} ({} bytes)",
                file_name,
                bytes.len()
            );
        }

        Ok(Self {
            file_name,
            media_type,
            bytes,
        })
    }

    /// ファイル名を返す
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// メディアタイプを返す
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// バイト列への参照を返す
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 画像サイズ（バイト）を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// 画像が空かどうかを返す
    ///
    /// コンストラクタが空を拒否するため常にfalseだが、
    /// `len` とのペアとしてclippy規約上提供する
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
