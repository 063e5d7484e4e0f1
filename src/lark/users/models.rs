//! User data models

use serde::{Deserialize, Serialize};

use crate::lark::models::UserIdType;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStatus {
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub is_resigned: bool,
    #[serde(default)]
    pub is_activated: bool,
    #[serde(default)]
    pub is_exited: bool,
    #[serde(default)]
    pub is_unjoin: bool,
}

/// User as returned by the batch get endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub open_id: String,
    #[serde(default)]
    pub union_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub en_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    /// The user's ID of the given kind
    pub fn id_of(&self, id_type: UserIdType) -> &str {
        match id_type {
            UserIdType::OpenId => &self.open_id,
            UserIdType::UserId => &self.user_id,
            UserIdType::UnionId => &self.union_id,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserBatchData {
    #[serde(default)]
    pub items: Vec<User>,
}

#[derive(Serialize, Debug)]
pub(crate) struct UserIdByEmailRequest<'a> {
    pub emails: &'a [String],
}

/// Email to user ID mapping; `user_id` is empty for unknown emails
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdByEmail {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub status: UserStatus,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserIdByEmailData {
    #[serde(default)]
    pub user_list: Vec<UserIdByEmail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_of() {
        let user = User {
            user_id: "u1".to_string(),
            open_id: "ou_1".to_string(),
            union_id: "on_1".to_string(),
            ..Default::default()
        };
        assert_eq!(user.id_of(UserIdType::OpenId), "ou_1");
        assert_eq!(user.id_of(UserIdType::UserId), "u1");
        assert_eq!(user.id_of(UserIdType::UnionId), "on_1");
    }
}
