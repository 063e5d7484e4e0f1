//! Data shapes shared across API areas

use serde::{Deserialize, Serialize};

/// Localized names keyed by locale
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nName {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zh_cn: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ja_jp: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub en_us: String,
}

impl I18nName {
    pub fn is_empty(&self) -> bool {
        self.zh_cn.is_empty() && self.ja_jp.is_empty() && self.en_us.is_empty()
    }
}

/// Kind of ID a user identifier is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserIdType {
    #[default]
    OpenId,
    UserId,
    UnionId,
}

impl UserIdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserIdType::OpenId => "open_id",
            UserIdType::UserId => "user_id",
            UserIdType::UnionId => "union_id",
        }
    }
}

impl std::fmt::Display for UserIdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
