// note-presigner/src/config/app.rs

use std::env;

use crate::error::AppResult;
use crate::utils::error_helper::missing_config_error;

/// アップロード用署名付きURLの有効期限（秒）
pub const UPLOAD_URL_EXPIRATION: u64 = 3600;

/// ダウンロード用署名付きURLの有効期限（秒）
pub const DOWNLOAD_URL_EXPIRATION: u64 = 3600;

/// リージョンが解決できない場合のフォールバック
pub const DEFAULT_REGION: &str = "us-east-1";

/// ストレージプロバイダーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageProvider {
    #[default]
    Aws,
    MinIO,
}

impl StorageProvider {
    fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or_default().to_lowercase().as_str() {
            "minio" | "local" => Self::MinIO,
            _ => Self::Aws,
        }
    }

    /// MinIOはpath styleを強制
    pub fn force_path_style(self) -> bool {
        matches!(self, Self::MinIO)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresignerConfig {
    pub bucket_name: String,
    /// 起動時に読み込むのみ（署名処理では使用しない）
    pub table_name: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub provider: StorageProvider,
}

impl PresignerConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> AppResult<Self> {
        // .env があれば読み込む（Lambda 上では存在しない）
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bucket_name =
            non_empty("BUCKET_NAME").ok_or_else(|| missing_config_error("BUCKET_NAME"))?;
        let table_name =
            non_empty("TABLE_NAME").ok_or_else(|| missing_config_error("TABLE_NAME"))?;
        let provider = StorageProvider::parse(non_empty("STORAGE_PROVIDER").as_deref());

        let config = Self {
            bucket_name,
            table_name,
            region: non_empty("AWS_REGION"),
            endpoint: non_empty("STORAGE_ENDPOINT"),
            provider,
        };

        tracing::info!(
            bucket = %config.bucket_name,
            table = %config.table_name,
            region = ?config.region,
            provider = ?config.provider,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// 署名に使うエンドポイント
    ///
    /// 明示的な指定がなければリージョナルエンドポイント
    pub fn endpoint_url(&self, region: &str) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://s3.{}.amazonaws.com", region))
    }
}
