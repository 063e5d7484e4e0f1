//! Lark Open API client module
//!
//! The request engine lives in `client`; every API area adds its
//! operations to [`LarkClient`] through its own `api` module.

pub mod auth;
pub mod batch;
pub mod chat_members;
mod client;
mod commands;
mod credentials;
pub mod departments;
pub mod docs;
pub mod group_chats;
pub mod models;
pub mod pagination;
pub mod roles;
pub mod transport;
pub mod user_group_members;
pub mod user_groups;
pub mod users;
pub mod validation;
pub mod workforce_types;

pub use batch::{split_bots_and_persons, BatchRunner, MemberDiff, MemberKind};
pub use client::{AccessTokens, BaseResponse, ClientConfig, LarkClient, RetryPolicy, TokenKind};
pub use commands::run_delete_command;
pub use credentials::{AppCredentials, CredentialsResolver};
pub use models::{I18nName, UserIdType};
pub use pagination::{collect_pages, ApiResponse, Page, PageData, PaginatedResponse};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
