// note-presigner/src/utils/error_helper.rs

//! エラーハンドリングの統一化ヘルパー
//!
//! サービス層とハンドラー層で共通して使用するエラー生成パターンを提供します。
//! 生成と同時に構造化ログを出力するため、呼び出し側でログを重複させないこと。

use crate::error::AppError;
use crate::log_with_context;
use tracing::{error, warn};

// =============================================================================
// バリデーションエラー
// =============================================================================

/// 単一のバリデーションエラーをログ付きで生成
pub fn validation_error(message: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        "Validation failed"
    );
    AppError::ValidationError(message.to_string())
}

// =============================================================================
// ログ付きエラー変換パターン
// =============================================================================

/// オブジェクトストレージ呼び出しの失敗をログ付きで生成
///
/// # Arguments
/// * `error` - SDK から返された元のエラー（ログにのみ出力）
/// * `cause` - エラー結果に含める短い原因
/// * `context` - エラーが発生したコンテキスト（ログ用）
/// * `user_message` - エラー結果に含める説明（`cause` が後ろに連結される）
pub fn storage_error<E: std::fmt::Display>(
    error: E,
    cause: &str,
    context: &str,
    user_message: &str,
) -> AppError {
    log_with_context!(
        tracing::Level::ERROR,
        "Object storage request failed",
        error => error.to_string(),
        cause => cause,
        context => context,
    );
    AppError::ExternalServiceError(format!("{}: {}", user_message, cause))
}

/// 内部サーバーエラーをログ付きで生成
pub fn internal_server_error<E: std::fmt::Display>(
    error: E,
    context: &str,
    user_message: &str,
) -> AppError {
    error!(
        error = %error,
        context = %context,
        "Internal server error occurred"
    );
    AppError::InternalServerError(user_message.to_string())
}

/// 必須設定値の欠落をエラーとして生成
pub fn missing_config_error(variable: &str) -> AppError {
    error!(variable = %variable, "Required configuration is missing");
    AppError::ConfigError(format!("{} must be set", variable))
}
