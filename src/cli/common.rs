//! Common CLI types shared across commands

use clap::ValueEnum;

use crate::lark::user_group_members::UserGroupMemberType;
use crate::lark::UserIdType;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// User ID kinds accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IdTypeArg {
    #[default]
    OpenId,
    UserId,
    UnionId,
}

impl From<IdTypeArg> for UserIdType {
    fn from(arg: IdTypeArg) -> Self {
        match arg {
            IdTypeArg::OpenId => UserIdType::OpenId,
            IdTypeArg::UserId => UserIdType::UserId,
            IdTypeArg::UnionId => UserIdType::UnionId,
        }
    }
}

/// User group member kinds accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MemberTypeArg {
    #[default]
    User,
    Department,
}

impl From<MemberTypeArg> for UserGroupMemberType {
    fn from(arg: MemberTypeArg) -> Self {
        match arg {
            MemberTypeArg::User => UserGroupMemberType::User,
            MemberTypeArg::Department => UserGroupMemberType::Department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_id_type_conversion() {
        assert_eq!(UserIdType::from(IdTypeArg::OpenId), UserIdType::OpenId);
        assert_eq!(UserIdType::from(IdTypeArg::UnionId).as_str(), "union_id");
    }

    #[test]
    fn test_member_type_conversion() {
        assert_eq!(
            UserGroupMemberType::from(MemberTypeArg::Department).as_str(),
            "department"
        );
    }
}
