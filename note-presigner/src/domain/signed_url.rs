// note-presigner/src/domain/signed_url.rs

use serde::Serialize;

use super::attachment_key::AttachmentKey;

/// ブローカーの成功結果
///
/// - アップロード: `{uploadUrl, attachmentKey, expiresIn}`
/// - ダウンロード: `{downloadUrl, expiresIn}`
/// - 添付なし: `{}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignedUrlResult {
    #[serde(rename_all = "camelCase")]
    Upload {
        upload_url: String,
        attachment_key: AttachmentKey,
        expires_in: u64,
    },
    #[serde(rename_all = "camelCase")]
    Download { download_url: String, expires_in: u64 },
    /// キー未指定、またはオブジェクトが存在しない
    NoAttachment {},
}

impl SignedUrlResult {
    pub fn no_attachment() -> Self {
        SignedUrlResult::NoAttachment {}
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SignedUrlResult::NoAttachment {})
    }
}
