// note-presigner/src/api/handler.rs

use lambda_runtime::LambdaEvent;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, Instrument};

use crate::domain::{AccessRequest, InvocationRequest, SignedUrlResult};
use crate::error::{AppResult, ErrorResponse};
use crate::logging::InvocationContext;
use crate::service::presigner_service::PresignerService;
use crate::utils::error_helper::{internal_server_error, validation_error};

const CONTEXT: &str = "handler::handle_invocation";

/// 呼び出し元に返すペイロード
///
/// 成功時は操作の結果、失敗時は `{error, message}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InvocationResponse {
    Success(SignedUrlResult),
    Failure(ErrorResponse),
}

impl InvocationResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, InvocationResponse::Failure(_))
    }
}

/// ペイロードを解釈して操作を実行する
pub async fn dispatch(service: &PresignerService, payload: Value) -> AppResult<SignedUrlResult> {
    let request: InvocationRequest = serde_json::from_value(payload).map_err(|e| {
        validation_error(&format!("Invalid request payload: {}", e), CONTEXT)
    })?;

    let request = AccessRequest::try_from(request)?;
    info!(operation = %request.operation(), "Dispatching request");

    service.handle(request).await
}

/// 呼び出し境界
///
/// すべての失敗（パニックを含む）を `{error, message}` に変換するため、
/// ランタイムにエラーを返すことはない。エラーは生成時にログ出力済み。
pub async fn handle_invocation(
    service: Arc<PresignerService>,
    payload: Value,
) -> InvocationResponse {
    info!(event = %payload, "Received event");

    // パニックは JoinError として回収する
    let task = tokio::spawn(
        async move { dispatch(&service, payload).await }.instrument(tracing::Span::current()),
    );

    let outcome = match task.await {
        Ok(result) => result,
        Err(join_error) => Err(internal_server_error(
            join_error,
            CONTEXT,
            "Request processing aborted unexpectedly",
        )),
    };

    match outcome {
        Ok(result) => InvocationResponse::Success(result),
        Err(err) => InvocationResponse::Failure(ErrorResponse::from(err)),
    }
}

/// Lambda ランタイム用のハンドラー
pub async fn function_handler(
    service: Arc<PresignerService>,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    let invocation = InvocationContext::from_lambda(&context);

    Ok(handle_invocation(service, payload)
        .instrument(invocation.span())
        .await)
}
