/// Configuration constants for the Lark Open API
pub mod api {
    /// Base URL every API path is appended to
    pub const BASE_URL: &str = "https://open.larksuite.com/open-apis";

    /// Tenant/app access token bootstrap endpoint
    pub const AUTH: &str = "/auth/v3/tenant_access_token/internal";

    /// Departments endpoint
    pub const DEPARTMENTS: &str = "/contact/v3/departments";

    /// Group chats endpoint
    pub const GROUP_CHATS: &str = "/im/v1/chats";

    /// User groups endpoint
    pub const USER_GROUPS: &str = "/contact/v3/group";

    /// Users endpoint
    pub const USERS: &str = "/contact/v3/users";

    /// Functional roles endpoint
    pub const ROLES: &str = "/contact/v3/functional_roles";

    /// Explorer root folder metadata endpoint
    pub const EXPLORER_ROOT_FOLDER: &str = "/drive/explorer/v2/root_folder";

    /// Explorer folder endpoint
    pub const EXPLORER_FOLDER: &str = "/drive/explorer/v2/folder";

    /// Drive files endpoint
    pub const DOCS_FILES: &str = "/drive/v1/files";

    /// Workforce type (employee type enum) endpoint
    pub const WORKFORCE_TYPES: &str = "/contact/v3/employee_type_enums";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Maximum IDs per user batch lookup
    pub const USER_BATCH_LIMIT: usize = 50;

    /// Maximum concurrent lookup requests
    pub const MAX_CONCURRENT_REQUESTS: usize = 5;
}

/// Retry defaults for the request engine
pub mod retry {
    /// Number of attempts per logical request
    pub const BASE_RETRY_COUNT: u32 = 2;

    /// Base backoff delay in seconds (doubled before every further attempt)
    pub const BASE_DELAY_SECS: u64 = 1;

    /// Error text fragments (lowercase, matched case-insensitively) that
    /// mark a transport failure as transient
    pub const TRANSIENT_PHRASES: &[&str] = &[
        "connection refused",
        "no such host",
        "timeout",
        "timed out",
        "connection reset",
        "eof",
        "broken pipe",
        "tls handshake timeout",
        "connect error",
        "dns error",
        "failed to lookup address",
        "connection closed before message completed",
    ];
}

/// API-imposed batch limits for member operations
pub mod batch {
    /// Prefix of application (bot) IDs
    pub const BOT_PREFIX: &str = "cli_";

    /// Prefix of user open IDs
    pub const PERSON_PREFIX: &str = "ou_";

    /// Bots per chat member/administrator request
    pub const BOT_CHUNK_SIZE: usize = 5;

    /// Persons per chat member/administrator request
    pub const PERSON_CHUNK_SIZE: usize = 50;

    /// Members per user group batch request
    pub const USER_GROUP_MEMBER_CHUNK_SIZE: usize = 100;

    /// Maximum administrators of a common group chat
    pub const MAX_ADMINISTRATORS: usize = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file path (relative to the user config dir)
    pub const FILE_PATH: &str = "larkctl/credentials.json";

    /// Environment variable holding the application ID
    pub const APP_ID_ENV: &str = "LARK_APP_ID";

    /// Environment variable holding the application secret
    pub const APP_SECRET_ENV: &str = "LARK_APP_SECRET";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_format() {
        for p in [
            api::AUTH,
            api::DEPARTMENTS,
            api::GROUP_CHATS,
            api::USER_GROUPS,
            api::USERS,
            api::ROLES,
            api::EXPLORER_ROOT_FOLDER,
            api::EXPLORER_FOLDER,
            api::DOCS_FILES,
            api::WORKFORCE_TYPES,
        ] {
            assert!(p.starts_with('/'), "{} must start with '/'", p);
            assert!(!p.ends_with('/'));
        }
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(api::BASE_URL.starts_with("https://"));
        assert!(!api::BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_retry_defaults() {
        assert_eq!(retry::BASE_RETRY_COUNT, 2);
        assert_eq!(retry::BASE_DELAY_SECS, 1);
        assert!(retry::TRANSIENT_PHRASES.contains(&"eof"));
        assert!(retry::TRANSIENT_PHRASES
            .iter()
            .all(|phrase| *phrase == phrase.to_lowercase()));
    }

    #[test]
    fn test_batch_limits() {
        assert_eq!(batch::BOT_CHUNK_SIZE, 5);
        assert_eq!(batch::PERSON_CHUNK_SIZE, 50);
        assert_eq!(batch::USER_GROUP_MEMBER_CHUNK_SIZE, 100);
        assert_eq!(batch::MAX_ADMINISTRATORS, 10);
    }
}
