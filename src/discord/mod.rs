//! Discord 账号查询
//!
//! `client` 负责从 Discord REST API 拉取原始用户数据，
//! `decode` 负责把原始数据展开为展示字段。

pub mod client;
pub mod decode;
pub mod error;
pub mod model;

pub use client::{DiscordClient, UserFetcher};
pub use error::FetchError;
