//! Chat member command handlers

use log::{debug, warn};

use super::models::{ChatMemberAddResult, ChatMembership};
use crate::cli::{MembersAction, MembersTarget};
use crate::lark::validation::validate_non_empty_ids;
use crate::lark::{LarkClient, MemberDiff, UserIdType};
use crate::output::{output_changes, output_chat_members, ChangeReport};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the 'get chat-members' command
pub async fn run_chat_members_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::ChatMembers(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching members of chat '{}'...", args.chat_id),
        cli.batch,
    );
    let members = client.list_group_chat_members(&args.chat_id).await;
    finish_spinner(spinner);
    let members = members?;

    if members.is_empty() {
        eprintln!("No members found in chat '{}'", args.chat_id);
        return Ok(());
    }

    output_chat_members(&members, args.output, cli.no_header);
    Ok(())
}

fn warn_add_result(result: &ChatMemberAddResult) {
    if !result.invalid_id_list.is_empty() {
        warn!("Invalid member IDs: {}", result.invalid_id_list.join(", "));
    }
    if !result.not_existed_id_list.is_empty() {
        warn!(
            "Member IDs that do not exist: {}",
            result.not_existed_id_list.join(", ")
        );
    }
    if !result.pending_approval_id_list.is_empty() {
        warn!(
            "Members pending approval: {}",
            result.pending_approval_id_list.join(", ")
        );
    }
}

/// Run 'members <action> chat'
pub async fn run_chat_membership_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Members { action } = &cli.command else {
        unreachable!()
    };
    let MembersTarget::Chat(args) = action.target() else {
        unreachable!()
    };

    validate_non_empty_ids(&args.members)?;
    validate_non_empty_ids(&args.admins)?;
    if !matches!(action, MembersAction::Remove { .. }) && !args.members.is_empty() {
        client
            .validate_user_ids(&args.members, UserIdType::OpenId, true)
            .await?;
    }
    let chat_id = args.chat_id.as_str();

    let report = match action {
        MembersAction::Add { .. } => {
            let spinner = create_spinner(&format!("Adding to chat '{}'...", chat_id), cli.batch);
            let result = async {
                if !args.members.is_empty() {
                    let result = client.add_group_chat_members(chat_id, &args.members).await?;
                    warn_add_result(&result);
                }
                if !args.admins.is_empty() {
                    client
                        .add_group_chat_administrators(chat_id, &args.admins)
                        .await?;
                }
                Ok::<_, crate::error::LarkError>(())
            }
            .await;
            finish_spinner(spinner);
            result?;

            ChangeReport::new(
                "chat",
                chat_id,
                action.verb(),
                MemberDiff::additions(&args.members),
            )
            .with_administrators(MemberDiff::additions(&args.admins))
        }
        MembersAction::Remove { .. } => {
            let prompt = format!(
                "Remove {} member(s) and {} administrator(s) from chat '{}'?",
                args.members.len(),
                args.admins.len(),
                chat_id
            );
            if !confirm_action(&prompt, args.yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            let spinner =
                create_spinner(&format!("Removing from chat '{}'...", chat_id), cli.batch);
            let result = async {
                if !args.admins.is_empty() {
                    client
                        .delete_group_chat_administrators(chat_id, &args.admins)
                        .await?;
                }
                if !args.members.is_empty() {
                    client
                        .delete_group_chat_members(chat_id, &args.members)
                        .await?;
                }
                Ok::<_, crate::error::LarkError>(())
            }
            .await;
            finish_spinner(spinner);
            result?;

            ChangeReport::new(
                "chat",
                chat_id,
                action.verb(),
                MemberDiff::removals(&args.members),
            )
            .with_administrators(MemberDiff::removals(&args.admins))
        }
        MembersAction::Sync { .. } => {
            let spinner = create_spinner(
                &format!("Reading membership of chat '{}'...", chat_id),
                cli.batch,
            );
            let current = client.group_chat_membership(chat_id).await;
            finish_spinner(spinner);
            let current = current?;
            let desired = ChatMembership {
                members: args.members.clone(),
                administrators: args.admins.clone(),
            };
            debug!(
                "Chat '{}' has {} member(s), {} administrator(s)",
                chat_id,
                current.members.len(),
                current.administrators.len()
            );

            let dropped = MemberDiff::between(&current.members, &desired.members).removed;
            if !dropped.is_empty() {
                let prompt = format!(
                    "Sync will remove {} member(s) from chat '{}': {}. Continue?",
                    dropped.len(),
                    chat_id,
                    dropped.join(", ")
                );
                if !confirm_action(&prompt, args.yes, cli.batch)? {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            let spinner = create_spinner(&format!("Syncing chat '{}'...", chat_id), cli.batch);
            let changes = client
                .sync_group_chat_members(chat_id, &current, &desired)
                .await;
            finish_spinner(spinner);
            let changes = changes?;

            ChangeReport::new("chat", chat_id, action.verb(), changes.members)
                .with_administrators(changes.administrators)
        }
    };

    output_changes(&report, args.output, cli.no_header);
    Ok(())
}
