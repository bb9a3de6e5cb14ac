//! Lookup API 请求处理器

use std::time::Instant;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::discord::{UserFetcher, decode};

use super::router::LookupState;
use super::types::{ErrorResponse, LookupQuery};

/// GET /lookup?id={id}
///
/// 校验 ID 后向 Discord 查询用户，返回解码后的账号信息
pub async fn lookup<F: UserFetcher>(
    State(state): State<LookupState<F>>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new("invalid query"))).into_response();
    };
    let id = query.id.unwrap_or_default();
    if id.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new("missing id"))).into_response();
    }
    if !decode::is_valid_id(&id) {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new("invalid id"))).into_response();
    }

    let start = Instant::now();
    match state.fetcher.fetch_user(&id).await {
        Ok(raw) => {
            tracing::info!(
                "查询用户 {} 成功，耗时 {}ms",
                id,
                start.elapsed().as_millis()
            );
            Json(decode::decode_user(&raw, Utc::now())).into_response()
        }
        Err(e) => {
            let status = e.status_code();
            tracing::warn!(
                "查询用户 {} 失败 ({}): {}，耗时 {}ms",
                id,
                status.as_u16(),
                e,
                start.elapsed().as_millis()
            );
            (status, Json(ErrorResponse::from(&e))).into_response()
        }
    }
}

/// GET /healthz
pub async fn health() -> &'static str {
    "ok"
}
