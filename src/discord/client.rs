//! Discord REST API 客户端

use std::future::Future;

use anyhow::Context;
use reqwest::{Client, Response, header};

use super::error::FetchError;
use super::model::RawUser;
use crate::http_client::{ProxyConfig, build_client};
use crate::model::config::{Config, TlsBackend};

pub const USER_AGENT: &str = "discord-lookup (https://github.com/yourpov/discord-lookup, 1.0)";

/// 上游响应体大小上限（1 MiB）
const MAX_BODY_BYTES: usize = 1 << 20;

/// 按 ID 获取原始用户数据
pub trait UserFetcher: Send + Sync + 'static {
    fn fetch_user(&self, id: &str) -> impl Future<Output = Result<RawUser, FetchError>> + Send;
}

/// Discord API 客户端
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl DiscordClient {
    /// 创建客户端
    pub fn new(
        api_base: impl Into<String>,
        token: Option<String>,
        proxy: Option<&ProxyConfig>,
        timeout_secs: u64,
        tls_backend: TlsBackend,
    ) -> anyhow::Result<Self> {
        let client = build_client(proxy, timeout_secs, tls_backend, USER_AGENT)
            .context("创建 HTTP 客户端失败")?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// 从应用配置创建客户端
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.api_base.clone(),
            config.effective_token().map(str::to_string),
            ProxyConfig::from_config(config).as_ref(),
            config.request_timeout_secs,
            config.tls_backend,
        )
    }

    /// 是否配置了 Bot Token
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// GET /users/{id}
    pub async fn get_user(&self, id: &str) -> Result<RawUser, FetchError> {
        let token = self.token.as_deref().ok_or(FetchError::MissingToken)?;

        let url = format!("{}/users/{}", self.api_base, id);
        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bot {}", token))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<f64>().ok());
            tracing::debug!("Discord API 返回 {}: {}", status, url);
            return Err(FetchError::from_status(status, retry_after));
        }

        let body = read_limited(response).await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl UserFetcher for DiscordClient {
    async fn fetch_user(&self, id: &str) -> Result<RawUser, FetchError> {
        self.get_user(id).await
    }
}

/// 读取响应体，超过上限时报错
async fn read_limited(mut response: Response) -> Result<Vec<u8>, FetchError> {
    if response
        .content_length()
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
    {
        return Err(FetchError::Decode("response body too large".to_string()));
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(FetchError::Transport)? {
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(FetchError::Decode("response body too large".to_string()));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
