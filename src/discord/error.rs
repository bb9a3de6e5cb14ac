//! 上游请求错误分类

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("missing bot token")]
    MissingToken,

    #[error("user not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized(StatusCode),

    #[error("rate limited")]
    RateLimited { retry_after: Option<f64> },

    #[error("invalid snowflake")]
    Upstream(StatusCode),

    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid upstream response: {0}")]
    Decode(String),
}

impl FetchError {
    /// 按上游响应状态分类
    pub fn from_status(status: StatusCode, retry_after: Option<f64>) -> Self {
        if status == StatusCode::NOT_FOUND {
            Self::NotFound
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Unauthorized(status)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimited { retry_after }
        } else {
            Self::Upstream(status)
        }
    }

    /// 返回给查询方的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized(status) | Self::Upstream(status) => *status,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Transport(_) | Self::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            FetchError::from_status(StatusCode::NOT_FOUND, None),
            FetchError::NotFound
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::FORBIDDEN, None),
            FetchError::Unauthorized(status) if status == StatusCode::FORBIDDEN
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::TOO_MANY_REQUESTS, Some(1.5)),
            FetchError::RateLimited { retry_after: Some(r) } if r == 1.5
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::BAD_REQUEST, None),
            FetchError::Upstream(status) if status == StatusCode::BAD_REQUEST
        ));
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(FetchError::MissingToken.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(FetchError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            FetchError::Unauthorized(StatusCode::UNAUTHORIZED).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            FetchError::RateLimited { retry_after: None }.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            FetchError::Upstream(StatusCode::SERVICE_UNAVAILABLE).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            FetchError::Decode("bad".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::MissingToken.to_string(), "missing bot token");
        assert_eq!(
            FetchError::Upstream(StatusCode::BAD_REQUEST).to_string(),
            "invalid snowflake"
        );
    }
}
