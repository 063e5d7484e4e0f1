//! User group member command handlers

use log::warn;

use super::models::UserGroupMemberType;
use crate::cli::{MembersAction, MembersTarget};
use crate::lark::validation::validate_non_empty_ids;
use crate::lark::{LarkClient, MemberDiff, UserIdType};
use crate::output::{output_changes, output_ug_members, ChangeReport};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the 'get ug-members' command
pub async fn run_ug_members_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::UgMembers(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let member_type = UserGroupMemberType::from(args.member_type);
    let spinner = create_spinner(
        &format!(
            "Fetching {} members of user group '{}'...",
            member_type, args.group_id
        ),
        cli.batch,
    );
    let members = client
        .list_user_group_members(&args.group_id, member_type)
        .await;
    finish_spinner(spinner);
    let members = members?;

    if members.is_empty() {
        eprintln!(
            "No {} members found in user group '{}'",
            member_type, args.group_id
        );
        return Ok(());
    }

    output_ug_members(&members, args.output, cli.no_header);
    Ok(())
}

/// Run 'members <action> ug'
pub async fn run_ug_membership_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Members { action } = &cli.command else {
        unreachable!()
    };
    let MembersTarget::Ug(args) = action.target() else {
        unreachable!()
    };

    validate_non_empty_ids(&args.members)?;
    if !matches!(action, MembersAction::Remove { .. }) && !args.members.is_empty() {
        client
            .validate_user_ids(&args.members, UserIdType::OpenId, false)
            .await?;
    }
    let group_id = args.group_id.as_str();

    let diff = match action {
        MembersAction::Add { .. } => {
            let spinner = create_spinner(
                &format!("Adding members to user group '{}'...", group_id),
                cli.batch,
            );
            let results = client.add_user_group_members(group_id, &args.members).await;
            finish_spinner(spinner);

            let rejected: Vec<String> = results?
                .into_iter()
                .filter(|r| r.code != 0)
                .map(|r| r.member_id)
                .collect();
            if !rejected.is_empty() {
                warn!("Members not added: {}", rejected.join(", "));
            }
            let accepted: Vec<String> = args
                .members
                .iter()
                .filter(|id| !rejected.contains(id))
                .cloned()
                .collect();
            MemberDiff::additions(&accepted)
        }
        MembersAction::Remove { .. } => {
            let prompt = format!(
                "Remove {} member(s) from user group '{}'?",
                args.members.len(),
                group_id
            );
            if !confirm_action(&prompt, args.yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            let spinner = create_spinner(
                &format!("Removing members from user group '{}'...", group_id),
                cli.batch,
            );
            let result = client
                .remove_user_group_members(group_id, &args.members)
                .await;
            finish_spinner(spinner);
            result?;
            MemberDiff::removals(&args.members)
        }
        MembersAction::Sync { .. } => {
            let current: Vec<String> = client
                .list_user_group_members(group_id, UserGroupMemberType::User)
                .await?
                .into_iter()
                .map(|m| m.member_id)
                .collect();
            let dropped = MemberDiff::between(&current, &args.members).removed;
            if !dropped.is_empty() {
                let prompt = format!(
                    "Sync will remove {} member(s) from user group '{}': {}. Continue?",
                    dropped.len(),
                    group_id,
                    dropped.join(", ")
                );
                if !confirm_action(&prompt, args.yes, cli.batch)? {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            let spinner = create_spinner(
                &format!("Syncing members of user group '{}'...", group_id),
                cli.batch,
            );
            let diff = client.sync_user_group_members(group_id, &args.members).await;
            finish_spinner(spinner);
            diff?
        }
    };

    let report = ChangeReport::new("user group", group_id, action.verb(), diff);
    output_changes(&report, args.output, cli.no_header);
    Ok(())
}
