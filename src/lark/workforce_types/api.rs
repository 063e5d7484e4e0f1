//! Workforce type API operations

use log::info;

use crate::config::api;
use crate::error::Result;
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;

use super::models::{WorkforceType, WorkforceTypeData, WorkforceTypeList, WorkforceTypeRequest};

fn enum_path(enum_id: &str) -> String {
    format!("{}/{}", api::WORKFORCE_TYPES, urlencoding::encode(enum_id))
}

impl LarkClient {
    pub async fn create_workforce_type(
        &self,
        request: &WorkforceTypeRequest,
    ) -> Result<WorkforceType> {
        info!("Creating workforce type '{}'", request.content);
        let response: ApiResponse<WorkforceTypeData> = self
            .tenant_request(HttpMethod::Post, api::WORKFORCE_TYPES, Some(request))
            .await?;
        Ok(response.into_data().employee_type_enum)
    }

    pub async fn update_workforce_type(
        &self,
        enum_id: &str,
        request: &WorkforceTypeRequest,
    ) -> Result<WorkforceType> {
        info!("Updating workforce type '{}'", enum_id);
        let response: ApiResponse<WorkforceTypeData> = self
            .tenant_request(HttpMethod::Put, &enum_path(enum_id), Some(request))
            .await?;
        Ok(response.into_data().employee_type_enum)
    }

    pub async fn delete_workforce_type(&self, enum_id: &str) -> Result<()> {
        info!("Deleting workforce type '{}'", enum_id);
        let _: ApiResponse<serde_json::Value> = self
            .tenant_request(HttpMethod::Delete, &enum_path(enum_id), NO_BODY)
            .await?;
        Ok(())
    }

    /// List every workforce type of the tenant
    pub async fn list_workforce_types(&self) -> Result<Vec<WorkforceType>> {
        let response = self
            .fetch_all_pages::<WorkforceType, WorkforceTypeList>(
                api::WORKFORCE_TYPES,
                api::DEFAULT_PAGE_SIZE,
            )
            .await?;
        Ok(response.into_data().items)
    }

    /// The workforce type with this enum ID, if any
    ///
    /// The API has no single-item lookup, so this scans the full list.
    pub async fn find_workforce_type(&self, enum_id: &str) -> Result<Option<WorkforceType>> {
        Ok(self
            .list_workforce_types()
            .await?
            .into_iter()
            .find(|t| t.enum_id == enum_id))
    }
}
