//! Page-token pagination shared by every list endpoint

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::error::Result;
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::transport::HttpMethod;

/// One page of items plus the token for the next one (empty when done)
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_token: String,
}

/// Envelope wrapper used by most endpoints: `{code, msg, data}`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ApiResponse<D> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<D>,
}

impl<D> ApiResponse<D> {
    /// Successful envelope around `data`
    pub fn success(data: D) -> Self {
        Self {
            code: 0,
            msg: "success".to_string(),
            data: Some(data),
        }
    }
}

impl<D: Default> ApiResponse<D> {
    /// Take the payload, defaulting when the server omitted it
    pub fn into_data(self) -> D {
        self.data.unwrap_or_default()
    }
}

/// `data` payload of a paginated endpoint
///
/// Implement this for each list payload to use it with
/// [`LarkClient::fetch_all_pages`].
pub trait PageData<T>: Sized {
    /// Split one page into its items and continuation token
    fn into_page(self) -> Page<T>;

    /// Payload describing a complete, single-page result
    fn from_items(items: Vec<T>) -> Self;
}

/// Full response that can be rebuilt from accumulated items
pub trait PaginatedResponse<T> {
    /// Single-page-looking response: code 0, no token, no more pages
    fn aggregated(items: Vec<T>) -> Self;
}

impl<T, D: PageData<T>> PaginatedResponse<T> for ApiResponse<D> {
    fn aggregated(items: Vec<T>) -> Self {
        ApiResponse::success(D::from_items(items))
    }
}

/// Follow continuation tokens until the server returns an empty one
///
/// `fetch` receives the token for the page to load (empty for the first
/// page). Any page error aborts the walk; items gathered so far are dropped.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page_token = String::new();
    let mut pages = 0u32;

    loop {
        let page = fetch(page_token).await?;
        pages += 1;
        items.extend(page.items);

        if page.page_token.is_empty() {
            break;
        }
        page_token = page.page_token;
    }

    debug!("Collected {} items across {} page(s)", items.len(), pages);
    Ok(items)
}

/// Append `page_size` and (when non-empty) `page_token` to a path
pub(crate) fn page_path(path: &str, page_size: u32, page_token: &str) -> String {
    let separator = if path.contains('?') { "&" } else { "?" };
    let mut url = format!("{}{}page_size={}", path, separator, page_size);
    if !page_token.is_empty() {
        url.push_str("&page_token=");
        url.push_str(&urlencoding::encode(page_token));
    }
    url
}

impl LarkClient {
    /// Fetch every page of a tenant-authenticated GET list endpoint
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., `Group`, `ChatMember`)
    /// * `D` - The `data` payload type implementing [`PageData<T>`]
    pub async fn fetch_all_pages<T, D>(
        &self,
        path: &str,
        page_size: u32,
    ) -> Result<ApiResponse<D>>
    where
        D: DeserializeOwned + Default + PageData<T>,
    {
        let items = collect_pages(|page_token| async move {
            let url = page_path(path, page_size, &page_token);
            debug!("Fetching page from: {}", url);
            let response: ApiResponse<D> =
                self.tenant_request(HttpMethod::Get, &url, NO_BODY).await?;
            Ok(response.into_data().into_page())
        })
        .await?;

        Ok(ApiResponse::aggregated(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LarkError;
    use std::cell::Cell;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug, Default)]
    struct NumberList {
        #[serde(default)]
        items: Vec<u32>,
        #[serde(default)]
        page_token: String,
        #[serde(default)]
        has_more: bool,
    }

    impl PageData<u32> for NumberList {
        fn into_page(self) -> Page<u32> {
            Page {
                items: self.items,
                page_token: self.page_token,
            }
        }

        fn from_items(items: Vec<u32>) -> Self {
            Self {
                items,
                page_token: String::new(),
                has_more: false,
            }
        }
    }

    #[tokio::test]
    async fn test_collect_pages_follows_tokens_in_order() {
        let calls = Cell::new(0);
        let items = collect_pages(|token| {
            calls.set(calls.get() + 1);
            async move {
                match token.as_str() {
                    "" => Ok(Page {
                        items: vec![1, 2],
                        page_token: "t2".to_string(),
                    }),
                    "t2" => Ok(Page {
                        items: vec![3],
                        page_token: String::new(),
                    }),
                    other => panic!("unexpected token {}", other),
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_collect_pages_single_page() {
        let calls = Cell::new(0);
        let items = collect_pages(|_| {
            calls.set(calls.get() + 1);
            async {
                Ok(Page {
                    items: vec!["a"],
                    page_token: String::new(),
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a"]);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_collect_pages_error_discards_partial_results() {
        let result: Result<Vec<u32>> = collect_pages(|token| async move {
            if token.is_empty() {
                Ok(Page {
                    items: vec![1],
                    page_token: "t2".to_string(),
                })
            } else {
                Err(LarkError::ErrorStatus(500))
            }
        })
        .await;

        assert!(matches!(result, Err(LarkError::ErrorStatus(500))));
    }

    #[test]
    fn test_page_path() {
        assert_eq!(page_path("/x", 100, ""), "/x?page_size=100");
        assert_eq!(page_path("/x?a=b", 50, ""), "/x?a=b&page_size=50");
        assert_eq!(
            page_path("/x", 10, "tok+/="),
            "/x?page_size=10&page_token=tok%2B%2F%3D"
        );
    }

    #[test]
    fn test_aggregated_envelope() {
        let response: ApiResponse<NumberList> = ApiResponse::aggregated(vec![4, 5]);
        assert_eq!(response.code, 0);
        assert_eq!(response.msg, "success");
        let data = response.into_data();
        assert_eq!(data.items, vec![4, 5]);
        assert!(data.page_token.is_empty());
        assert!(!data.has_more);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_against_mock_server() {
        let mock_server = MockServer::start().await;

        // Mounted first so it wins over the broader first-page mock
        Mock::given(method("GET"))
            .and(path("/numbers"))
            .and(query_param("page_token", "next"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "msg": "success",
                "data": {"items": [3], "page_token": "", "has_more": false}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/numbers"))
            .and(query_param("page_size", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "msg": "success",
                "data": {"items": [1, 2], "page_token": "next", "has_more": true}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let response = client
            .fetch_all_pages::<u32, NumberList>("/numbers", 2)
            .await
            .unwrap();

        assert_eq!(response.into_data().items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_propagates_page_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/numbers"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 40001,
                "msg": "invalid page token"
            })))
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let err = client
            .fetch_all_pages::<u32, NumberList>("/numbers", 100)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("code=40001"));
    }
}
