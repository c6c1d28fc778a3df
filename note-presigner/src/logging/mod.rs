// note-presigner/src/logging/mod.rs

use lambda_runtime::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` が無い場合のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "note_presigner=info";

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:ident => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            _ => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
        }
    };
}

/// トレーシングの設定
///
/// CloudWatch Logs 向けに JSON 1 行形式で出力する。ANSI カラーと時刻は付けない。
/// 二重初期化はエラーを無視する。
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .without_time()
                .with_current_span(true)
                .with_target(true),
        )
        .try_init();
}

/// 1 回の呼び出しに紐づくコンテキスト
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_arn: Option<String>,
}

impl InvocationContext {
    /// Lambda ランタイムのコンテキストから生成
    pub fn from_lambda(context: &Context) -> Self {
        Self {
            request_id: context.request_id.clone(),
            function_arn: Some(context.invoked_function_arn.clone())
                .filter(|arn| !arn.is_empty()),
        }
    }

    /// ローカル実行用にリクエストIDを採番
    pub fn local() -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            function_arn: None,
        }
    }

    /// 呼び出し全体を囲むスパン
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "invocation",
            request_id = %self.request_id,
            function_arn = self.function_arn.as_deref().unwrap_or_default()
        )
    }
}
