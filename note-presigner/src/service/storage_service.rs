// note-presigner/src/service/storage_service.rs

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{PresignerConfig, DEFAULT_REGION};
use crate::error::AppResult;
use crate::utils::error_helper::storage_error;

/// オブジェクトストレージの署名・存在確認を抽象化するトレイト
///
/// ブローカーはオブジェクト本体には触れないため、読み書き操作は持たない。
#[async_trait]
pub trait StorageService: Send + Sync {
    /// ファイルの存在確認
    ///
    /// 存在しない場合は `Ok(false)`。それ以外の失敗は `Err`。
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// 署名付きダウンロードURL (GET) を生成
    async fn generate_download_url(&self, key: &str, expires_in_seconds: u64) -> AppResult<String>;

    /// Content-Type を束縛した署名付きアップロードURL (PUT) を生成
    async fn generate_upload_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in_seconds: u64,
    ) -> AppResult<String>;
}

/// S3 ストレージサービスの実装
pub struct S3StorageService {
    client: Client,
    bucket: String,
}

impl S3StorageService {
    /// 設定から S3 クライアントを構築
    pub async fn new(config: &PresignerConfig) -> Self {
        let region_provider = RegionProviderChain::first_try(config.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(DEFAULT_REGION);

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        let region = shared_config
            .region()
            .map_or_else(|| DEFAULT_REGION.to_string(), |r| r.to_string());
        let endpoint = config.endpoint_url(&region);

        tracing::info!(
            region = %region,
            endpoint = %endpoint,
            force_path_style = config.provider.force_path_style(),
            "S3 client configured"
        );

        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .endpoint_url(endpoint)
            .force_path_style(config.provider.force_path_style())
            .build();

        Self::with_client(Client::from_conf(s3_config), config.bucket_name.clone())
    }

    /// 構築済みクライアントから作成
    pub fn with_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    fn presigning_config(
        expires_in_seconds: u64,
        context: &str,
        user_message: &str,
    ) -> AppResult<PresigningConfig> {
        PresigningConfig::expires_in(Duration::from_secs(expires_in_seconds))
            .map_err(|e| storage_error(&e, &e.to_string(), context, user_message))
    }
}

/// SDK エラーからエラー結果に含める短い原因を組み立てる
///
/// `An error occurred (<code>) when calling the <operation> operation: <message>`。
/// エラーコードが無ければ HTTP ステータスで代用する。生のレスポンスは含めない。
fn sdk_error_cause<E>(error: &SdkError<E, HttpResponse>, operation: &str) -> String
where
    E: ProvideErrorMetadata,
{
    let service_error = error.as_service_error();
    let code = service_error
        .and_then(|e| e.code())
        .map(str::to_string)
        .or_else(|| {
            error
                .raw_response()
                .map(|response| response.status().as_u16().to_string())
        });

    match (code, service_error.and_then(|e| e.message())) {
        (Some(code), Some(message)) => format!(
            "An error occurred ({}) when calling the {} operation: {}",
            code, operation, message
        ),
        (Some(code), None) => format!(
            "An error occurred ({}) when calling the {} operation",
            code, operation
        ),
        // 送信前の失敗（接続・タイムアウト等）
        (None, _) => error.to_string(),
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn exists(&self, key: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|service_error| service_error.is_not_found())
                    || e
                        .raw_response()
                        .is_some_and(|response| response.status().as_u16() == 404);

                if not_found {
                    Ok(false)
                } else {
                    Err(storage_error(
                        DisplayErrorContext(&e),
                        &sdk_error_cause(&e, "HeadObject"),
                        "s3_storage_service::exists",
                        "Failed to generate download URL",
                    ))
                }
            }
        }
    }

    async fn generate_download_url(&self, key: &str, expires_in_seconds: u64) -> AppResult<String> {
        const CONTEXT: &str = "s3_storage_service::generate_download_url";
        const MESSAGE: &str = "Failed to generate download URL";

        let presigning_config = Self::presigning_config(expires_in_seconds, CONTEXT, MESSAGE)?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                storage_error(
                    DisplayErrorContext(&e),
                    &sdk_error_cause(&e, "GetObject"),
                    CONTEXT,
                    MESSAGE,
                )
            })?;

        Ok(presigned_request.uri().to_string())
    }

    async fn generate_upload_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in_seconds: u64,
    ) -> AppResult<String> {
        const CONTEXT: &str = "s3_storage_service::generate_upload_url";
        const MESSAGE: &str = "Failed to generate upload URL";

        let presigning_config = Self::presigning_config(expires_in_seconds, CONTEXT, MESSAGE)?;

        let presigned_request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                storage_error(
                    DisplayErrorContext(&e),
                    &sdk_error_cause(&e, "PutObject"),
                    CONTEXT,
                    MESSAGE,
                )
            })?;

        Ok(presigned_request.uri().to_string())
    }
}

/// ストレージサービスのファクトリ関数
pub async fn create_storage_service(config: &PresignerConfig) -> Arc<dyn StorageService> {
    Arc::new(S3StorageService::new(config).await)
}
