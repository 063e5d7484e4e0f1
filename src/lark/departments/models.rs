//! Department data models

use serde::{Deserialize, Serialize};

use crate::lark::models::I18nName;

/// Department leader reference
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DepartmentLeader {
    #[serde(rename = "leaderID")]
    pub leader_id: String,
    #[serde(rename = "leaderType")]
    pub leader_type: i64,
}

/// Writable department fields (create/update body)
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DepartmentFields {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "I18nName::is_empty")]
    pub i18n_name: I18nName,
    #[serde(default)]
    pub parent_department_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub leader_user_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leaders: Vec<DepartmentLeader>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_chat_employee_types: Vec<i64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub create_group_chat: bool,
}

/// Create body: writable fields plus an optional custom department ID
#[derive(Serialize, Debug, Clone)]
pub(crate) struct DepartmentCreateRequest<'a> {
    #[serde(flatten)]
    pub fields: &'a DepartmentFields,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub department_id: String,
}

/// Body of the update-department-ID call
#[derive(Serialize, Debug, Clone)]
pub struct DepartmentUpdateIdRequest {
    pub new_department_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentStatus {
    #[serde(default)]
    pub is_deleted: bool,
}

/// Department as returned by the API
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Department {
    #[serde(flatten)]
    pub fields: DepartmentFields,
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub open_department_id: String,
    #[serde(default)]
    pub chat_id: String,
    #[serde(default)]
    pub member_count: i64,
    #[serde(default)]
    pub status: DepartmentStatus,
}

/// `data` payload wrapping a single department
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct DepartmentData {
    #[serde(default)]
    pub department: Department,
}
