//! Delete command handler shared by every resource kind

use crate::cli::DeleteResource;
use crate::lark::LarkClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command};

const FOLDER_TYPE: &str = "folder";

/// Run the 'delete <resource>' command
pub async fn run_delete_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Delete { resource } = &cli.command else {
        unreachable!()
    };

    let args = resource.args();
    let label = resource.label();

    let prompt = format!("Delete {} '{}'?", label, args.id);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting {} '{}'...", label, args.id), cli.batch);
    let result = match resource {
        DeleteResource::Chat(_) => client.delete_group_chat(&args.id).await,
        DeleteResource::UserGroup(_) => client.delete_user_group(&args.id).await,
        DeleteResource::Role(_) => client.delete_role(&args.id).await,
        DeleteResource::WorkforceType(_) => client.delete_workforce_type(&args.id).await,
        DeleteResource::Department(_) => client.delete_department(&args.id).await,
        DeleteResource::Folder(_) => client.delete_file(&args.id, FOLDER_TYPE).await,
    };
    finish_spinner(spinner);
    result?;

    println!("✓ Deleted {} '{}'", label, args.id);
    Ok(())
}
