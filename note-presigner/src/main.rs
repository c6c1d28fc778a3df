// note-presigner/src/main.rs
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;

use note_presigner::api::handler::function_handler;
use note_presigner::config::PresignerConfig;
use note_presigner::logging::init_tracing;
use note_presigner::service::presigner_service::PresignerService;
use note_presigner::service::storage_service::create_storage_service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // トレーシングの設定
    init_tracing();

    tracing::info!("Starting note presigner...");

    // 設定を読み込む（プロセス起動時に一度だけ）
    let config = PresignerConfig::from_env()?;

    // S3 クライアントはプロセス全体で共有する
    let storage = create_storage_service(&config).await;
    let service = Arc::new(PresignerService::new(storage));

    tracing::info!(bucket = %config.bucket_name, "Presigner ready, waiting for invocations");

    run(service_fn(move |event: LambdaEvent<Value>| {
        let service = Arc::clone(&service);
        async move { function_handler(service, event).await }
    }))
    .await
}
