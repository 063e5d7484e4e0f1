//! Workforce type command handlers

use crate::lark::LarkClient;
use crate::output::output_workforce_types;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the 'get workforce-types' command
pub async fn run_workforce_types_command(
    client: &LarkClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::WorkforceTypes(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching workforce types...", cli.batch);
    let types = match &args.enum_id {
        Some(enum_id) => client
            .find_workforce_type(enum_id)
            .await
            .map(|found| found.into_iter().collect::<Vec<_>>()),
        None => client.list_workforce_types().await,
    };
    finish_spinner(spinner);
    let types = types?;

    if types.is_empty() {
        match &args.enum_id {
            Some(enum_id) => return Err(format!("Workforce type '{}' not found", enum_id).into()),
            None => eprintln!("No workforce types found"),
        }
        return Ok(());
    }

    output_workforce_types(&types, args.output, cli.no_header);
    Ok(())
}
