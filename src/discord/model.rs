//! 账号数据模型
//!
//! 包含 Discord `GET /users/{id}` 的响应类型，以及本服务对外返回的展示类型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Discord API 返回的原始用户数据
///
/// 除 `id` 外的字段均可能缺失或为 null
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    /// Snowflake ID（十进制字符串）
    pub id: String,

    #[serde(default)]
    pub username: Option<String>,

    /// 显示名称
    #[serde(default)]
    pub global_name: Option<String>,

    /// 旧版 4 位标签，新账号为 "0"
    #[serde(default)]
    pub discriminator: Option<String>,

    /// 头像哈希，`a_` 前缀表示动图
    #[serde(default)]
    pub avatar: Option<String>,

    /// 横幅哈希，`a_` 前缀表示动图
    #[serde(default)]
    pub banner: Option<String>,

    #[serde(default)]
    pub bot: bool,

    #[serde(default)]
    pub system: bool,

    /// 公开徽章位掩码
    #[serde(default)]
    pub public_flags: u64,
}

/// 查询接口返回的账号信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub discriminator: String,
    pub bot: bool,
    pub system: bool,
    pub flags: u64,
    /// 按位序排列的徽章名称
    pub badges: Vec<&'static str>,
    pub avatar: String,
    pub banner: String,
    /// 账号创建日期（MM-DD-YYYY），ID 无法解析时为空
    pub created_at: String,
    /// 查询时间，格式 `YYYY-MM-DD HH:MM UTC`
    #[serde(serialize_with = "serialize_searched_at")]
    pub searched_at: DateTime<Utc>,
}

fn serialize_searched_at<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%Y-%m-%d %H:%M UTC"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_raw_user_deserialize_full() {
        let json = r#"{
            "id": "80351110224678912",
            "username": "nelly",
            "global_name": "Nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "banner": null,
            "public_flags": 131328,
            "accent_color": 16711680
        }"#;
        let user: RawUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "80351110224678912");
        assert_eq!(user.username.as_deref(), Some("nelly"));
        assert_eq!(user.global_name.as_deref(), Some("Nelly"));
        assert_eq!(user.discriminator.as_deref(), Some("1337"));
        assert!(user.banner.is_none());
        assert!(!user.bot);
        assert!(!user.system);
        assert_eq!(user.public_flags, 131328);
    }

    #[test]
    fn test_raw_user_deserialize_minimal() {
        let user: RawUser = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(user.id, "1");
        assert!(user.username.is_none());
        assert_eq!(user.public_flags, 0);
    }

    #[test]
    fn test_lookup_user_serialize_field_names() {
        let user = LookupUser {
            id: "1".to_string(),
            username: "a".to_string(),
            display_name: String::new(),
            discriminator: "0".to_string(),
            bot: true,
            system: false,
            flags: 0,
            badges: Vec::new(),
            avatar: "https://cdn.discordapp.com/embed/avatars/1.png".to_string(),
            banner: String::new(),
            created_at: String::new(),
            searched_at: Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 59).unwrap(),
        };
        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "id", "username", "display_name", "discriminator", "bot", "system", "flags",
            "badges", "avatar", "banner", "created_at", "searched_at",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
        assert_eq!(keys.len(), 12);
        assert_eq!(value["badges"], serde_json::json!([]));
        assert_eq!(value["searched_at"], "2024-03-09 07:05 UTC");
    }
}
