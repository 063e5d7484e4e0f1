//! Department API operations

use log::{debug, info};

use crate::config::api;
use crate::error::{LarkError, Result};
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;

use super::models::{
    Department, DepartmentCreateRequest, DepartmentData, DepartmentFields,
    DepartmentUpdateIdRequest,
};

/// Parent ID of top-level departments
const ROOT_DEPARTMENT_ID: &str = "0";

impl LarkClient {
    /// Create a department, optionally with a custom department ID
    ///
    /// Refuses an ID that already belongs to an existing department.
    pub async fn create_department(
        &self,
        fields: &DepartmentFields,
        department_id: &str,
    ) -> Result<Department> {
        if !department_id.is_empty() && self.find_department(department_id).await?.is_some() {
            return Err(LarkError::Validation(format!(
                "Department with ID '{}' already exists",
                department_id
            )));
        }
        self.ensure_parent_department(&fields.parent_department_id)
            .await?;

        info!("Creating department '{}'", fields.name);
        let path = format!("{}?department_id_type=department_id", api::DEPARTMENTS);
        let request = DepartmentCreateRequest {
            fields,
            department_id: department_id.to_string(),
        };
        let response: ApiResponse<DepartmentData> = self
            .tenant_request(HttpMethod::Post, &path, Some(&request))
            .await?;
        Ok(response.into_data().department)
    }

    /// Get a department by its custom department ID
    pub async fn get_department(&self, department_id: &str) -> Result<Department> {
        let path = format!(
            "{}/{}?department_id_type=department_id",
            api::DEPARTMENTS,
            urlencoding::encode(department_id)
        );
        debug!("Fetching department from: {}", path);
        let response: ApiResponse<DepartmentData> =
            self.tenant_request(HttpMethod::Get, &path, NO_BODY).await?;
        Ok(response.into_data().department)
    }

    /// Get a department, mapping API-level "not found" answers to `None`
    pub async fn find_department(&self, department_id: &str) -> Result<Option<Department>> {
        match self.get_department(department_id).await {
            Ok(department) if department.status.is_deleted => Ok(None),
            Ok(department) => Ok(Some(department)),
            Err(LarkError::Api { code, message }) => {
                debug!(
                    "Department '{}' not found: code={}, message={}",
                    department_id, code, message
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn ensure_parent_department(&self, parent_department_id: &str) -> Result<()> {
        if parent_department_id.is_empty() || parent_department_id == ROOT_DEPARTMENT_ID {
            return Ok(());
        }
        match self.find_department(parent_department_id).await? {
            Some(_) => Ok(()),
            None => Err(LarkError::NotFound(format!(
                "Parent department '{}' not found",
                parent_department_id
            ))),
        }
    }

    /// Replace a department's fields, addressed by open department ID
    pub async fn update_department(
        &self,
        open_department_id: &str,
        fields: &DepartmentFields,
    ) -> Result<Department> {
        self.ensure_parent_department(&fields.parent_department_id)
            .await?;

        info!("Updating department '{}'", open_department_id);
        let path = format!(
            "{}/{}?department_id_type=open_department_id",
            api::DEPARTMENTS,
            urlencoding::encode(open_department_id)
        );
        let response: ApiResponse<DepartmentData> = self
            .tenant_request(HttpMethod::Put, &path, Some(fields))
            .await?;
        Ok(response.into_data().department)
    }

    /// Change the custom department ID of a department
    pub async fn update_department_id(
        &self,
        open_department_id: &str,
        new_department_id: &str,
    ) -> Result<()> {
        info!(
            "Changing department ID of '{}' to '{}'",
            open_department_id, new_department_id
        );
        let path = format!(
            "{}/{}/update_department_id?department_id_type=open_department_id",
            api::DEPARTMENTS,
            urlencoding::encode(open_department_id)
        );
        let request = DepartmentUpdateIdRequest {
            new_department_id: new_department_id.to_string(),
        };
        let _: ApiResponse<serde_json::Value> = self
            .tenant_request(HttpMethod::Patch, &path, Some(&request))
            .await?;
        Ok(())
    }

    /// Delete a department by open department ID
    pub async fn delete_department(&self, open_department_id: &str) -> Result<()> {
        info!("Deleting department '{}'", open_department_id);
        let path = format!(
            "{}/{}?department_id_type=open_department_id",
            api::DEPARTMENTS,
            urlencoding::encode(open_department_id)
        );
        let _: ApiResponse<serde_json::Value> =
            self.tenant_request(HttpMethod::Delete, &path, NO_BODY).await?;
        Ok(())
    }
}
