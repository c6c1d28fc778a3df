// note-presigner/src/domain/access_request.rs

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::utils::error_helper::validation_error;

const CONTEXT: &str = "access_request::resolve_operation";

/// 呼び出しペイロードの生の形
///
/// `{operation, noteId?, fileName?, attachmentKey?}`。未知のフィールドは無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub note_id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub attachment_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GenerateUploadUrl,
    GenerateDownloadUrl,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::GenerateUploadUrl => "generateUploadUrl",
            Operation::GenerateDownloadUrl => "generateDownloadUrl",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generateUploadUrl" => Ok(Operation::GenerateUploadUrl),
            "generateDownloadUrl" => Ok(Operation::GenerateDownloadUrl),
            other => Err(validation_error(
                &format!("Unknown operation: {}", other),
                CONTEXT,
            )),
        }
    }
}

/// 操作ごとに入力を絞り込んだリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequest {
    Upload {
        note_id: Option<String>,
        file_name: Option<String>,
    },
    Download {
        attachment_key: Option<String>,
    },
}

impl AccessRequest {
    pub fn operation(&self) -> Operation {
        match self {
            AccessRequest::Upload { .. } => Operation::GenerateUploadUrl,
            AccessRequest::Download { .. } => Operation::GenerateDownloadUrl,
        }
    }
}

impl TryFrom<InvocationRequest> for AccessRequest {
    type Error = AppError;

    /// `operation` を解決する。必須項目の検証はサービス層で行う。
    fn try_from(request: InvocationRequest) -> Result<Self, Self::Error> {
        let operation = match request.operation.as_deref() {
            Some(name) => name.parse::<Operation>()?,
            None => return Err(validation_error("Unknown operation: None", CONTEXT)),
        };

        Ok(match operation {
            Operation::GenerateUploadUrl => AccessRequest::Upload {
                note_id: request.note_id,
                file_name: request.file_name,
            },
            Operation::GenerateDownloadUrl => AccessRequest::Download {
                attachment_key: request.attachment_key,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_camel_case_payload() {
        let request: InvocationRequest = serde_json::from_value(json!({
            "operation": "generateUploadUrl",
            "noteId": "n1",
            "fileName": "a.txt",
            "extra": 42
        }))
        .unwrap();

        assert_eq!(request.operation.as_deref(), Some("generateUploadUrl"));
        assert_eq!(request.note_id.as_deref(), Some("n1"));
        assert_eq!(request.file_name.as_deref(), Some("a.txt"));
        assert_eq!(request.attachment_key, None);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let request: InvocationRequest = serde_json::from_value(json!({
            "operation": "generateDownloadUrl",
            "attachmentKey": null
        }))
        .unwrap();

        assert_eq!(request.attachment_key, None);
    }

    #[test]
    fn test_upload_operation_resolves() {
        let request = InvocationRequest {
            operation: Some("generateUploadUrl".to_string()),
            note_id: Some("n1".to_string()),
            ..Default::default()
        };

        let access = AccessRequest::try_from(request).unwrap();
        assert_eq!(access.operation(), Operation::GenerateUploadUrl);
        assert_eq!(
            access,
            AccessRequest::Upload {
                note_id: Some("n1".to_string()),
                file_name: None,
            }
        );
    }

    #[test]
    fn test_unknown_operation_is_validation_error() {
        let request = InvocationRequest {
            operation: Some("unknownOp".to_string()),
            ..Default::default()
        };

        let err = AccessRequest::try_from(request).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Unknown operation: unknownOp");
        assert_eq!(err.cause(), "Unknown operation: unknownOp");
    }

    #[test]
    fn test_missing_operation_is_validation_error() {
        let err = AccessRequest::try_from(InvocationRequest::default()).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.cause(), "Unknown operation: None");
    }

    #[test]
    fn test_operation_names_are_case_sensitive() {
        assert!("GenerateUploadUrl".parse::<Operation>().is_err());
        assert_eq!(
            "generateDownloadUrl".parse::<Operation>().unwrap().to_string(),
            "generateDownloadUrl"
        );
    }
}
