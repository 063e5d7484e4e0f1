//! Workforce type data models

use serde::{Deserialize, Serialize};

use crate::lark::pagination::{Page, PageData};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nContent {
    pub locale: String,
    pub value: String,
}

/// Body of the create and update calls
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkforceTypeRequest {
    pub content: String,
    /// `1` for built-in types, `2` for custom ones
    pub enum_type: i32,
    /// `1` active, `2` inactive
    pub enum_status: i32,
    #[serde(default)]
    pub i18n_content: Vec<I18nContent>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkforceType {
    #[serde(default)]
    pub enum_id: String,
    #[serde(default)]
    pub enum_value: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub enum_type: i32,
    #[serde(default)]
    pub enum_status: i32,
    #[serde(default)]
    pub i18n_content: Vec<I18nContent>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct WorkforceTypeData {
    #[serde(default)]
    pub employee_type_enum: WorkforceType,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct WorkforceTypeList {
    #[serde(default)]
    pub items: Vec<WorkforceType>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub page_token: String,
}

impl PageData<WorkforceType> for WorkforceTypeList {
    fn into_page(self) -> Page<WorkforceType> {
        Page {
            items: self.items,
            page_token: self.page_token,
        }
    }

    fn from_items(items: Vec<WorkforceType>) -> Self {
        Self {
            items,
            has_more: false,
            page_token: String::new(),
        }
    }
}
