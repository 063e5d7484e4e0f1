//! User group command handlers

use log::debug;

use crate::lark::LarkClient;
use crate::output::output_user_groups;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the 'get user-groups' command
pub async fn run_user_groups_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::UserGroups(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching user group '{}'...", id), cli.batch);
        let group = client.find_user_group(id).await;
        finish_spinner(spinner);

        return match group? {
            Some(group) => {
                output_user_groups(&[group], args.output, cli.no_header);
                Ok(())
            }
            None => Err(format!("User group '{}' not found", id).into()),
        };
    }

    let spinner = create_spinner("Fetching user groups...", cli.batch);
    let groups = client.list_user_groups().await;
    finish_spinner(spinner);
    let mut groups = groups?;

    if let Some(filter) = &args.filter {
        let filter_lower = filter.to_lowercase();
        groups.retain(|group| group.name.to_lowercase().contains(&filter_lower));
        debug!("Filtered to {} groups matching '{}'", groups.len(), filter);
    }

    if groups.is_empty() {
        if args.filter.is_some() {
            eprintln!("No user groups found matching filter");
        } else {
            eprintln!("No user groups found");
        }
        return Ok(());
    }

    output_user_groups(&groups, args.output, cli.no_header);
    Ok(())
}
