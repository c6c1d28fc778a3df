// note-presigner/src/domain/attachment_key.rs

use serde::Serialize;
use std::fmt;

/// 添付ファイルを格納するキーの名前空間
pub const ATTACHMENT_NAMESPACE: &str = "notes";

/// ファイル名が空になった場合のフォールバック
pub const DEFAULT_FILE_NAME: &str = "attachment";

/// ファイル名をオブジェクトキーとして安全な形に正規化する
///
/// 1. 最後の `/` までのディレクトリ部分を取り除く
/// 2. 半角スペースを `_` に置き換える
/// 3. `[A-Za-z0-9_.-]` 以外の文字を削除する
/// 4. 空文字列、またはドットのみ（`.` / `..`）になった場合は `attachment`
///
/// 結果には `/` が含まれず、再適用しても変化しない。
pub fn sanitize_filename(file_name: &str) -> String {
    let base_name = file_name.rsplit('/').next().unwrap_or_default();

    let sanitized: String = base_name
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();

    if sanitized.chars().all(|c| c == '.') {
        DEFAULT_FILE_NAME.to_string()
    } else {
        sanitized
    }
}

/// オブジェクトストア上の添付ファイルの位置 `notes/{noteId}/{fileName}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AttachmentKey(String);

impl AttachmentKey {
    /// ノートIDと（未サニタイズの）ファイル名からキーを導出
    pub fn for_note(note_id: &str, file_name: &str) -> Self {
        Self(format!(
            "{}/{}/{}",
            ATTACHMENT_NAMESPACE,
            note_id,
            sanitize_filename(file_name)
        ))
    }

    /// 呼び出し元が保持していたキーをそのまま扱う
    pub fn from_issued(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// キーの最後のセグメント（サニタイズ済みファイル名）
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }
}

impl fmt::Display for AttachmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
