mod discord;
mod http_client;
mod lookup;
mod model;
mod web_ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use discord::DiscordClient;
use model::arg::Args;
use model::config::Config;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path)?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    // 初始化日志
    let _log_guard = init_logging(config.log_dir.as_deref())?;

    match config.config_path() {
        Some(path) if path.exists() => tracing::info!("已加载配置文件: {}", path.display()),
        _ => tracing::warn!("配置文件 {} 不存在，使用默认配置", config_path),
    }

    let client = Arc::new(DiscordClient::from_config(&config)?);
    if !client.has_token() {
        tracing::warn!("未配置 Bot Token，查询请求将返回 500");
    }
    let app = lookup::create_lookup_router(client).merge(web_ui::create_web_ui_router());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("绑定地址失败: {}", addr))?;

    tracing::info!("监听地址: {}", addr);
    tracing::info!("API 端点: http://localhost:{}/lookup?id={{id}}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    tracing::info!("服务已停止");
    Ok(())
}

/// 初始化日志：标准输出 + 可选的按天滚动文件
///
/// 返回的 guard 需在进程结束前保持存活，否则文件日志可能丢失
fn init_logging(log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "discord-lookup.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            registry.try_init()?;
            Ok(None)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("收到 Ctrl+C，正在关闭"),
            Err(e) => {
                tracing::error!("注册 Ctrl+C 处理失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("收到 SIGTERM，正在关闭");
            }
            Err(e) => {
                tracing::error!("注册 SIGTERM 处理失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
