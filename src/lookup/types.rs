//! Lookup API 类型定义

use serde::{Deserialize, Serialize};

use crate::discord::FetchError;

/// GET /lookup 查询参数
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// 上游限流时建议的重试等待（秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<f64>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            retry_after: None,
        }
    }
}

impl From<&FetchError> for ErrorResponse {
    fn from(err: &FetchError) -> Self {
        let retry_after = match err {
            FetchError::RateLimited { retry_after } => *retry_after,
            _ => None,
        };
        Self {
            error: err.to_string(),
            retry_after,
        }
    }
}
