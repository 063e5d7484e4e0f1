//! User lookup command handlers

use log::debug;

use crate::lark::validation::validate_non_empty_ids;
use crate::lark::{LarkClient, UserIdType};
use crate::output::{output_user_ids_by_email, output_users};
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the 'get users' command
pub async fn run_users_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Users(args),
    } = &cli.command
    else {
        unreachable!()
    };

    validate_non_empty_ids(&args.ids)?;

    if args.email {
        let spinner = create_spinner(
            &format!("Looking up {} email address(es)...", args.ids.len()),
            cli.batch,
        );
        let entries = client.get_user_ids_by_emails(&args.ids).await;
        finish_spinner(spinner);
        output_user_ids_by_email(&entries?, args.output, cli.no_header);
        return Ok(());
    }

    let id_type = UserIdType::from(args.id_type);
    debug!("Looking up {} user(s) by {}", args.ids.len(), id_type);
    let spinner = create_spinner(
        &format!("Fetching {} user(s)...", args.ids.len()),
        cli.batch,
    );
    let users = client.get_users_by_ids(&args.ids, id_type).await;
    finish_spinner(spinner);
    let users = users?;

    if users.is_empty() {
        eprintln!("No users found");
        return Ok(());
    }

    output_users(&users, args.output, cli.no_header);
    Ok(())
}
