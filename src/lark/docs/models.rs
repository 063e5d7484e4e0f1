//! Drive folder data models

use serde::{Deserialize, Serialize};

use crate::lark::pagination::{Page, PageData};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootFolderMeta {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderMeta {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub token: String,
    #[serde(default, rename = "createUid")]
    pub create_uid: String,
    #[serde(default, rename = "editUid")]
    pub edit_uid: String,
    #[serde(default, rename = "parentId")]
    pub parent_id: String,
    #[serde(default, rename = "ownUid")]
    pub own_uid: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct FolderCreateRequest<'a> {
    pub name: &'a str,
    pub folder_token: &'a str,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedFolder {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct FileMoveRequest<'a> {
    pub r#type: &'a str,
    pub folder_token: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct FileTask {
    #[serde(default)]
    pub task_id: String,
}

/// File or folder inside a folder
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChild {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub r#type: String,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct FolderChildren {
    #[serde(default)]
    pub files: Vec<FileChild>,
    #[serde(default)]
    pub next_page_token: String,
    #[serde(default)]
    pub has_more: bool,
}

impl PageData<FileChild> for FolderChildren {
    fn into_page(self) -> Page<FileChild> {
        Page {
            items: self.files,
            page_token: self.next_page_token,
        }
    }

    fn from_items(items: Vec<FileChild>) -> Self {
        Self {
            files: items,
            next_page_token: String::new(),
            has_more: false,
        }
    }
}

/// Outcome of renaming a folder by re-creating it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderRename {
    /// Token of the replacement folder
    pub token: String,
    /// Parent the replacement folder was created in
    pub parent_token: String,
    /// Steps that failed without aborting the rename
    pub warnings: Vec<String>,
}
