//! Lookup API 模块
//!
//! 对外提供 `GET /lookup?id={id}`，不暴露 Bot Token 与徽章解码逻辑。

mod handlers;
mod router;
mod types;

pub use router::create_lookup_router;
