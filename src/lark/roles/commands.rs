//! Functional role command handlers

use crate::cli::{MembersAction, MembersTarget};
use crate::lark::validation::validate_non_empty_ids;
use crate::lark::{LarkClient, MemberDiff, UserIdType};
use crate::output::{output_changes, output_role_members, ChangeReport};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the 'get role-members' command
pub async fn run_role_members_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::RoleMembers(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching members of role '{}'...", args.role_id),
        cli.batch,
    );
    let members = client.list_role_members(&args.role_id).await;
    finish_spinner(spinner);
    let members = members?;

    if members.is_empty() {
        eprintln!("No members found in role '{}'", args.role_id);
        return Ok(());
    }

    output_role_members(&members, args.output, cli.no_header);
    Ok(())
}

/// Run 'members <action> role'
pub async fn run_role_membership_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Members { action } = &cli.command else {
        unreachable!()
    };
    let MembersTarget::Role(args) = action.target() else {
        unreachable!()
    };

    validate_non_empty_ids(&args.members)?;
    if !matches!(action, MembersAction::Remove { .. }) && !args.members.is_empty() {
        client
            .validate_user_ids(&args.members, UserIdType::OpenId, false)
            .await?;
    }
    let role_id = args.role_id.as_str();

    let diff = match action {
        MembersAction::Add { .. } => {
            let spinner = create_spinner(
                &format!("Adding members to role '{}'...", role_id),
                cli.batch,
            );
            let result = client.add_role_members(role_id, &args.members).await;
            finish_spinner(spinner);
            result?;
            MemberDiff::additions(&args.members)
        }
        MembersAction::Remove { .. } => {
            let prompt = format!(
                "Remove {} member(s) from role '{}'?",
                args.members.len(),
                role_id
            );
            if !confirm_action(&prompt, args.yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            let spinner = create_spinner(
                &format!("Removing members from role '{}'...", role_id),
                cli.batch,
            );
            let result = client.remove_role_members(role_id, &args.members).await;
            finish_spinner(spinner);
            result?;
            MemberDiff::removals(&args.members)
        }
        MembersAction::Sync { .. } => {
            let current: Vec<String> = client
                .list_role_members(role_id)
                .await?
                .into_iter()
                .map(|m| m.user_id)
                .collect();
            let dropped = MemberDiff::between(&current, &args.members).removed;
            if !dropped.is_empty() {
                let prompt = format!(
                    "Sync will remove {} member(s) from role '{}': {}. Continue?",
                    dropped.len(),
                    role_id,
                    dropped.join(", ")
                );
                if !confirm_action(&prompt, args.yes, cli.batch)? {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            let spinner = create_spinner(
                &format!("Syncing members of role '{}'...", role_id),
                cli.batch,
            );
            let diff = client.sync_role_members(role_id, &args.members).await;
            finish_spinner(spinner);
            diff?
        }
    };

    let report = ChangeReport::new("role", role_id, action.verb(), diff);
    output_changes(&report, args.output, cli.no_header);
    Ok(())
}
