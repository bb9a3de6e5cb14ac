//! Lookup API 路由配置

use std::sync::Arc;

use axum::{Router, routing::get};
use http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::discord::UserFetcher;

use super::handlers;

/// Lookup API 共享状态
pub struct LookupState<F> {
    pub fetcher: Arc<F>,
}

impl<F> Clone for LookupState<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

/// 创建 Lookup API 路由
///
/// # 端点
/// - `GET /lookup?id={id}` - 查询账号信息（允许跨域）
/// - `GET /healthz` - 健康检查
pub fn create_lookup_router<F: UserFetcher>(fetcher: Arc<F>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/lookup", get(handlers::lookup::<F>))
        .layer(cors)
        .route("/healthz", get(handlers::health))
        .with_state(LookupState { fetcher })
}
