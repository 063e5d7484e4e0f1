//! larkctl - Manage Lark tenant resources through the Open API
//!
//! A client library and CLI covering departments, group chats and their
//! members, user groups, functional roles, workforce types and docs folders.
//!
//! # Features
//!
//! - One request engine with token selection and bounded retry with backoff
//! - Automatic pagination handling for every list endpoint
//! - Member batches split into bot and person chunks the API accepts
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Verify app credentials
//! larkctl token
//!
//! # List user groups whose name contains "ops"
//! larkctl get ug -f ops
//!
//! # Chat members as YAML
//! larkctl get chat-members oc_123 -o yaml
//!
//! # Make two users the only members of a role
//! larkctl members sync role r_1 ou_1,ou_2 --yes
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lark;
pub mod output;
pub mod ui;

pub use cli::{
    Cli, Command, DeleteResource, GetResource, MembersAction, MembersTarget, OutputFormat,
};
pub use error::{LarkError, Result};
pub use lark::{
    AppCredentials, ClientConfig, CredentialsResolver, LarkClient, MemberDiff, RetryPolicy,
};
