// note-presigner/src/service/presigner_service.rs

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{DOWNLOAD_URL_EXPIRATION, UPLOAD_URL_EXPIRATION};
use crate::domain::{
    content_type_for, AccessRequest, AttachmentKey, SignedUrlResult, DEFAULT_FILE_NAME,
};
use crate::error::AppResult;
use crate::service::storage_service::StorageService;
use crate::utils::error_helper::validation_error;

/// ノート添付ファイルの署名付きURLを発行するサービス
///
/// オブジェクト本体には触れず、ストレージへの署名と存在確認だけを行う。
pub struct PresignerService {
    storage: Arc<dyn StorageService>,
}

impl PresignerService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// 操作ごとに処理を振り分ける
    pub async fn handle(&self, request: AccessRequest) -> AppResult<SignedUrlResult> {
        match request {
            AccessRequest::Upload { note_id, file_name } => {
                self.generate_upload_url(note_id.as_deref(), file_name.as_deref())
                    .await
            }
            AccessRequest::Download { attachment_key } => {
                self.generate_download_url(attachment_key.as_deref()).await
            }
        }
    }

    /// アップロード用の署名付きURLを生成
    ///
    /// `noteId` は必須。ファイル名は省略時 `attachment`。
    pub async fn generate_upload_url(
        &self,
        note_id: Option<&str>,
        file_name: Option<&str>,
    ) -> AppResult<SignedUrlResult> {
        let note_id = note_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                validation_error("noteId is required", "presigner_service::generate_upload_url")
            })?;

        let attachment_key =
            AttachmentKey::for_note(note_id, file_name.unwrap_or(DEFAULT_FILE_NAME));
        let content_type = content_type_for(attachment_key.file_name());

        let upload_url = self
            .storage
            .generate_upload_url(
                attachment_key.as_str(),
                content_type.essence_str(),
                UPLOAD_URL_EXPIRATION,
            )
            .await?;

        info!(
            note_id = %note_id,
            attachment_key = %attachment_key,
            content_type = %content_type,
            "Generated upload URL"
        );

        Ok(SignedUrlResult::Upload {
            upload_url,
            attachment_key,
            expires_in: UPLOAD_URL_EXPIRATION,
        })
    }

    /// ダウンロード用の署名付きURLを生成
    ///
    /// キーが無い、またはオブジェクトが存在しない場合は空の結果を返す。
    /// どちらも「添付なし」として扱い、削除済みとの区別はしない。
    pub async fn generate_download_url(
        &self,
        attachment_key: Option<&str>,
    ) -> AppResult<SignedUrlResult> {
        let Some(attachment_key) = attachment_key.filter(|key| !key.is_empty()) else {
            info!("No attachment key provided, skipping download URL generation");
            return Ok(SignedUrlResult::no_attachment());
        };
        let attachment_key = AttachmentKey::from_issued(attachment_key);

        if !self.storage.exists(attachment_key.as_str()).await? {
            warn!(attachment_key = %attachment_key, "Attachment not found");
            return Ok(SignedUrlResult::no_attachment());
        }

        let download_url = self
            .storage
            .generate_download_url(attachment_key.as_str(), DOWNLOAD_URL_EXPIRATION)
            .await?;

        info!(attachment_key = %attachment_key, "Generated download URL");

        Ok(SignedUrlResult::Download {
            download_url,
            expires_in: DOWNLOAD_URL_EXPIRATION,
        })
    }
}
