//! # Preview Value Object
//!
//! 選択画像のプレビュー参照

use uuid::Uuid;

/// プレビュー参照
///
/// 選択された画像をアップロード前に表示するための、
/// 破棄可能なクライアントローカルハンドル。
/// 新しい選択で置き換えられた参照はrevokeされ、
/// 以降は表示ソースとして使用できない。
#[derive(Debug, Clone)]
pub struct Preview {
    id: Uuid,
    source: String,
    revoked: bool,
}

impl Preview {
    /// 選択画像のファイル名から新しいプレビュー参照を作成
    pub fn for_file(file_name: &str) -> Self {
        let id = Uuid::new_v4();
        Self {
            // ブラウザのObject URLに相当するローカルスキームのソース
            source: format!("preview://{}/{}", id, file_name),
            id,
            revoked: false,
        }
    }

    /// プレビューの一意識別子を返す
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 表示ソースを返す
    ///
    /// # Returns
    ///
    /// revoke済みの場合は `None`
    pub fn source(&self) -> Option<&str> {
        if self.revoked {
            None
        } else {
            Some(&self.source)
        }
    }

    /// 参照を破棄する
    ///
    /// 置き換えられたプレビューのリソースハンドルをリークさせないため、
    /// 新しい選択時に必ず呼ばれる
    pub fn revoke(&mut self) {
        self.revoked = true;
    }

    /// 参照が破棄済みかどうかを返す
    pub fn is_revoked(&self) -> bool {
        self.revoked
    }
}
