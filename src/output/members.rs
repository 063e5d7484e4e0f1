//! Member list output formatters (chats, user groups, roles)

use super::common::print_rows;
use crate::cli::OutputFormat;
use crate::lark::chat_members::ChatMember;
use crate::lark::roles::RoleMember;
use crate::lark::user_group_members::UserGroupMember;

const CHAT_HEADERS: [&str; 4] = ["MEMBER ID", "ID TYPE", "NAME", "TENANT"];
const UG_HEADERS: [&str; 3] = ["MEMBER ID", "MEMBER TYPE", "ID TYPE"];
const ROLE_HEADERS: [&str; 3] = ["USER ID", "SCOPE", "DEPARTMENTS"];

fn chat_row(member: &ChatMember) -> Vec<String> {
    vec![
        member.member_id.clone(),
        member.member_id_type.clone(),
        member.name.clone(),
        member.tenant_key.clone(),
    ]
}

fn ug_row(member: &UserGroupMember) -> Vec<String> {
    vec![
        member.member_id.clone(),
        member.member_type.clone(),
        member.member_id_type.clone(),
    ]
}

fn role_row(member: &RoleMember) -> Vec<String> {
    vec![
        member.user_id.clone(),
        member.scope_type.clone(),
        member.department_ids.join(" "),
    ]
}

/// Output group chat members in the specified format
pub fn output_chat_members(members: &[ChatMember], format: OutputFormat, no_header: bool) {
    let rows: Vec<Vec<String>> = members.iter().map(chat_row).collect();
    print_rows(&CHAT_HEADERS, &rows, members, format, no_header);
}

/// Output user group members in the specified format
pub fn output_ug_members(members: &[UserGroupMember], format: OutputFormat, no_header: bool) {
    let rows: Vec<Vec<String>> = members.iter().map(ug_row).collect();
    print_rows(&UG_HEADERS, &rows, members, format, no_header);
}

/// Output role members in the specified format
pub fn output_role_members(members: &[RoleMember], format: OutputFormat, no_header: bool) {
    let rows: Vec<Vec<String>> = members.iter().map(role_row).collect();
    print_rows(&ROLE_HEADERS, &rows, members, format, no_header);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::common::{render_csv, render_table};

    #[test]
    fn test_chat_member_table() {
        let member = ChatMember {
            member_id: "ou_1".to_string(),
            member_id_type: "open_id".to_string(),
            name: "Ada".to_string(),
            tenant_key: "t1".to_string(),
        };
        let table = render_table(&CHAT_HEADERS, &[chat_row(&member)], false);
        assert!(table.contains("MEMBER ID"));
        assert!(table.contains("ou_1"));
        assert!(table.contains("Ada"));
    }

    #[test]
    fn test_role_member_departments_joined() {
        let member = RoleMember {
            user_id: "ou_1".to_string(),
            scope_type: "Part".to_string(),
            department_ids: vec!["od_1".to_string(), "od_2".to_string()],
        };
        let csv = render_csv(&ROLE_HEADERS, &[role_row(&member)], true);
        assert_eq!(csv, "ou_1,Part,od_1 od_2");
    }

    #[test]
    fn test_ug_member_row() {
        let member = UserGroupMember::user("ou_9");
        assert_eq!(ug_row(&member), vec!["ou_9", "user", "open_id"]);
    }
}
