// tests/common/mock_storage.rs

use async_trait::async_trait;
use note_presigner::error::{AppError, AppResult};
use note_presigner::service::storage_service::StorageService;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// 署名要求の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresignCall {
    Upload {
        key: String,
        content_type: String,
        expires_in_seconds: u64,
    },
    Download {
        key: String,
        expires_in_seconds: u64,
    },
}

/// テスト用のモックストレージサービス
#[derive(Clone, Default)]
pub struct MockStorageService {
    objects: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<PresignCall>>>,
    head_requests: Arc<Mutex<Vec<String>>>,
    fail_signing: Arc<AtomicBool>,
    fail_exists: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockStorageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存オブジェクトを登録
    pub fn with_object(self, key: &str) -> Self {
        self.objects.lock().unwrap().insert(key.to_string());
        self
    }

    /// 署名処理を失敗させる
    pub fn failing_signing(self) -> Self {
        self.fail_signing.store(true, Ordering::SeqCst);
        self
    }

    /// 存在確認を（not found 以外の理由で）失敗させる
    pub fn failing_exists(self) -> Self {
        self.fail_exists.store(true, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> Vec<PresignCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn head_requests(&self) -> Vec<String> {
        self.head_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn exists(&self, key: &str) -> AppResult<bool> {
        self.head_requests.lock().unwrap().push(key.to_string());

        if self.fail_exists.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "Failed to generate download URL: AccessDenied".to_string(),
            ));
        }

        Ok(self.objects.lock().unwrap().contains(key))
    }

    async fn generate_download_url(&self, key: &str, expires_in_seconds: u64) -> AppResult<String> {
        if self.fail_signing.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "Failed to generate download URL: mock signing failure".to_string(),
            ));
        }

        self.calls.lock().unwrap().push(PresignCall::Download {
            key: key.to_string(),
            expires_in_seconds,
        });

        // モックストレージではダミーの署名付きURLを返す
        Ok(format!(
            "http://mock-storage.local/{}?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Expires={}",
            key, expires_in_seconds
        ))
    }

    async fn generate_upload_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in_seconds: u64,
    ) -> AppResult<String> {
        if self.fail_signing.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "Failed to generate upload URL: mock signing failure".to_string(),
            ));
        }

        self.calls.lock().unwrap().push(PresignCall::Upload {
            key: key.to_string(),
            content_type: content_type.to_string(),
            expires_in_seconds,
        });

        Ok(format!(
            "http://mock-storage.local/{}?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Expires={}&x-id=PutObject",
            key, expires_in_seconds
        ))
    }
}
