//! 账号字段解码
//!
//! 将原始用户数据中的位掩码、媒体哈希与 Snowflake ID 展开为可读的展示字段。
//! 所有函数均为纯函数，非法输入回退为默认值而不是报错。

use chrono::{DateTime, Utc};

use super::model::{LookupUser, RawUser};

/// Discord 自定义纪元（2015-01-01T00:00:00Z，毫秒）
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Snowflake 低位（worker / process / sequence）位数
const TIMESTAMP_SHIFT: u32 = 22;

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// 默认头像数量
const DEFAULT_AVATAR_COUNT: u32 = 5;

/// 徽章位表（按位序升序）
pub const BADGES: &[(u32, &str)] = &[
    (0, "Discord Staff"),
    (1, "Partnered Owner"),
    (2, "HypeSquad Events"),
    (3, "Bug Hunter 1"),
    (6, "House Bravery"),
    (7, "House Brilliance"),
    (8, "House Balance"),
    (9, "Early Supporter"),
    (14, "Bug Hunter 2"),
    (16, "Verified Bot"),
    (17, "Early Bot Dev"),
    (18, "Moderator Alumni"),
    (22, "Active Developer"),
];

/// 将公开徽章位掩码转换为徽章名称
///
/// 表外的位被忽略
pub fn decode_badges(flags: u64) -> Vec<&'static str> {
    BADGES
        .iter()
        .filter(|(bit, _)| (flags & (1u64 << bit)) != 0)
        .map(|(_, label)| *label)
        .collect()
}

/// 从 Snowflake ID 提取账号创建日期（`MM-DD-YYYY`，UTC）
///
/// ID 无法解析时返回空字符串
pub fn created_at(id: &str) -> String {
    let Some(snowflake) = parse_decimal(id) else {
        return String::new();
    };

    i64::try_from(snowflake >> TIMESTAMP_SHIFT)
        .ok()
        .and_then(|offset| offset.checked_add(DISCORD_EPOCH_MS))
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|time| time.format("%m-%d-%Y").to_string())
        .unwrap_or_default()
}

/// 头像 URL
///
/// 有自定义头像时返回 CDN 地址，否则按 discriminator 或 ID 选择默认头像
pub fn avatar_url(user: &RawUser) -> String {
    if let Some(hash) = media_hash(user.avatar.as_deref()) {
        return format!(
            "{CDN_BASE}/avatars/{}/{hash}.{}?size=1024",
            user.id,
            media_extension(hash)
        );
    }

    format!(
        "{CDN_BASE}/embed/avatars/{}.png",
        default_avatar_index(user)
    )
}

/// 横幅 URL，无自定义横幅时为空字符串
pub fn banner_url(user: &RawUser) -> String {
    match media_hash(user.banner.as_deref()) {
        Some(hash) => format!(
            "{CDN_BASE}/banners/{}/{hash}.{}?size=1024",
            user.id,
            media_extension(hash)
        ),
        None => String::new(),
    }
}

/// 校验用户 ID：17-19 位十进制数字、无前导零、可放入 u64
pub fn is_valid_id(id: &str) -> bool {
    (17..=19).contains(&id.len())
        && id.bytes().all(|b| b.is_ascii_digit())
        && !id.starts_with('0')
        && id.parse::<u64>().is_ok()
}

/// 组装查询结果
///
/// `searched_at` 由调用方提供
pub fn decode_user(user: &RawUser, searched_at: DateTime<Utc>) -> LookupUser {
    LookupUser {
        id: user.id.clone(),
        username: user.username.clone().unwrap_or_default(),
        display_name: user.global_name.clone().unwrap_or_default(),
        discriminator: user.discriminator.clone().unwrap_or_default(),
        bot: user.bot,
        system: user.system,
        flags: user.public_flags,
        badges: decode_badges(user.public_flags),
        avatar: avatar_url(user),
        banner: banner_url(user),
        created_at: created_at(&user.id),
        searched_at,
    }
}

/// 默认头像序号
///
/// 旧账号使用 discriminator 取模，新账号（discriminator 为空或 "0"）使用 ID 取模，
/// 解析失败时为 0
fn default_avatar_index(user: &RawUser) -> u32 {
    match user.discriminator.as_deref() {
        Some(discriminator) if !discriminator.is_empty() && discriminator != "0" => {
            decimal_rem(discriminator, DEFAULT_AVATAR_COUNT).unwrap_or(0)
        }
        _ => decimal_rem(&user.id, DEFAULT_AVATAR_COUNT).unwrap_or(0),
    }
}

/// 有效的媒体哈希（空字符串与字面量 "null" 视为无）
fn media_hash(hash: Option<&str>) -> Option<&str> {
    hash.filter(|h| !h.is_empty() && *h != "null")
}

fn media_extension(hash: &str) -> &'static str {
    if hash.starts_with("a_") { "gif" } else { "png" }
}

/// 解析纯数字十进制串，超过 128 位时返回 None
fn parse_decimal(s: &str) -> Option<u128> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// 任意长度十进制串对 `modulus` 取余
fn decimal_rem(s: &str, modulus: u32) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    s.bytes().try_fold(0u32, |acc, b| {
        b.is_ascii_digit()
            .then(|| (acc * 10 + u32::from(b - b'0')) % modulus)
    })
}
