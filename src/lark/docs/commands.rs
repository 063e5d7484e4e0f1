//! Docs folder command handlers

use log::debug;

use crate::lark::LarkClient;
use crate::output::output_folder_children;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the 'get folder-children' command
pub async fn run_folder_children_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::FolderChildren(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching folder contents...", cli.batch);
    let children = async {
        let folder_token = match &args.folder_token {
            Some(token) => token.clone(),
            None => {
                let root = client.get_root_folder_meta().await?;
                debug!("Using root folder '{}'", root.token);
                root.token
            }
        };
        client.list_folder_children(&folder_token).await
    }
    .await;
    finish_spinner(spinner);
    let children = children?;

    if children.is_empty() {
        eprintln!("Folder is empty");
        return Ok(());
    }

    output_folder_children(&children, args.output, cli.no_header);
    Ok(())
}
