//! Drive folder API operations

use log::{debug, error, info, warn};

use crate::config::api;
use crate::error::Result;
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;

use super::models::{
    CreatedFolder, FileChild, FileMoveRequest, FileTask, FolderChildren, FolderCreateRequest,
    FolderMeta, FolderRename, RootFolderMeta,
};

/// Drive file type of folders
const FOLDER_TYPE: &str = "folder";

impl LarkClient {
    /// Metadata of the app's root folder
    pub async fn get_root_folder_meta(&self) -> Result<RootFolderMeta> {
        let path = format!("{}/meta", api::EXPLORER_ROOT_FOLDER);
        let response: ApiResponse<RootFolderMeta> =
            self.tenant_request(HttpMethod::Get, &path, NO_BODY).await?;
        Ok(response.into_data())
    }

    pub async fn get_folder_meta(&self, folder_token: &str) -> Result<FolderMeta> {
        let path = format!(
            "{}/{}/meta",
            api::EXPLORER_FOLDER,
            urlencoding::encode(folder_token)
        );
        let response: ApiResponse<FolderMeta> =
            self.tenant_request(HttpMethod::Get, &path, NO_BODY).await?;
        Ok(response.into_data())
    }

    /// Resolve an optional parent token, falling back to the root folder
    async fn parent_or_root(&self, parent_token: Option<&str>) -> Result<String> {
        match parent_token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(token.to_string()),
            None => {
                let root = self.get_root_folder_meta().await?;
                debug!("Using root folder '{}' as parent", root.token);
                Ok(root.token)
            }
        }
    }

    /// Create a folder under `parent_token`, or under the root folder
    pub async fn create_folder(
        &self,
        name: &str,
        parent_token: Option<&str>,
    ) -> Result<CreatedFolder> {
        let folder_token = self.parent_or_root(parent_token).await?;
        info!("Creating folder '{}' in '{}'", name, folder_token);

        let path = format!("{}/create_folder", api::DOCS_FILES);
        let response: ApiResponse<CreatedFolder> = self
            .tenant_request(
                HttpMethod::Post,
                &path,
                Some(&FolderCreateRequest {
                    name,
                    folder_token: &folder_token,
                }),
            )
            .await?;
        Ok(response.into_data())
    }

    /// List the direct children of a folder
    pub async fn list_folder_children(&self, folder_token: &str) -> Result<Vec<FileChild>> {
        let path = format!(
            "{}?folder_token={}",
            api::DOCS_FILES,
            urlencoding::encode(folder_token)
        );
        let response = self
            .fetch_all_pages::<FileChild, FolderChildren>(&path, api::DEFAULT_PAGE_SIZE)
            .await?;
        Ok(response.into_data().files)
    }

    /// Move a file or folder; returns the asynchronous task ID
    pub async fn move_file(
        &self,
        file_token: &str,
        file_type: &str,
        folder_token: &str,
    ) -> Result<String> {
        info!("Moving {} '{}' to '{}'", file_type, file_token, folder_token);
        let path = format!(
            "{}/{}/move",
            api::DOCS_FILES,
            urlencoding::encode(file_token)
        );
        let response: ApiResponse<FileTask> = self
            .tenant_request(
                HttpMethod::Post,
                &path,
                Some(&FileMoveRequest {
                    r#type: file_type,
                    folder_token,
                }),
            )
            .await?;
        Ok(response.into_data().task_id)
    }

    pub async fn delete_file(&self, file_token: &str, file_type: &str) -> Result<()> {
        info!("Deleting {} '{}'", file_type, file_token);
        let path = format!(
            "{}/{}?type={}",
            api::DOCS_FILES,
            urlencoding::encode(file_token),
            urlencoding::encode(file_type)
        );
        let _: ApiResponse<serde_json::Value> =
            self.tenant_request(HttpMethod::Delete, &path, NO_BODY).await?;
        Ok(())
    }

    /// Move a folder under a new parent (the root folder when `None`)
    pub async fn move_folder(
        &self,
        folder_token: &str,
        parent_token: Option<&str>,
    ) -> Result<String> {
        let destination = self.parent_or_root(parent_token).await?;
        self.move_file(folder_token, FOLDER_TYPE, &destination)
            .await?;
        Ok(destination)
    }

    /// Rename a folder
    ///
    /// Drive folders cannot be renamed in place. A new folder is created,
    /// the old folder's children are moved into it and the old folder is
    /// deleted. Failing to move a child or to delete the old folder is
    /// reported as a warning; the new folder is kept either way.
    pub async fn rename_folder(
        &self,
        folder_token: &str,
        new_name: &str,
        parent_token: Option<&str>,
    ) -> Result<FolderRename> {
        let parent_token = self.parent_or_root(parent_token).await?;
        let created = self.create_folder(new_name, Some(&parent_token)).await?;

        let children = match self.list_folder_children(folder_token).await {
            Ok(children) => children,
            Err(e) => {
                error!(
                    "Failed to list items in old folder {}: {}. New folder {} was created but cannot be populated",
                    folder_token, e, created.token
                );
                return Err(e);
            }
        };

        let mut warnings = Vec::new();
        for child in &children {
            if let Err(e) = self
                .move_file(&child.token, &child.r#type, &created.token)
                .await
            {
                warn!("Moving '{}' failed: {}", child.token, e);
                warnings.push(format!(
                    "Could not move item {} ({}) from old folder to new folder. You may need to move it manually.",
                    child.name, child.token
                ));
            }
        }

        if let Err(e) = self.delete_file(folder_token, FOLDER_TYPE).await {
            warn!("Deleting old folder '{}' failed: {}", folder_token, e);
            warnings.push(format!(
                "The old folder {} could not be deleted after rename. You may need to delete it manually.",
                folder_token
            ));
        }

        Ok(FolderRename {
            token: created.token,
            parent_token,
            warnings,
        })
    }
}
