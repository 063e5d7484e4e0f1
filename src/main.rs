//! larkctl - Main entry point

use std::time::Duration;

use clap::Parser;
use log::{debug, info, warn};

use larkctl::cli::MembersTarget;
use larkctl::lark::auth::run_token_command;
use larkctl::lark::chat_members::{run_chat_members_command, run_chat_membership_command};
use larkctl::lark::docs::run_folder_children_command;
use larkctl::lark::roles::{run_role_members_command, run_role_membership_command};
use larkctl::lark::user_group_members::{run_ug_members_command, run_ug_membership_command};
use larkctl::lark::user_groups::run_user_groups_command;
use larkctl::lark::users::run_users_command;
use larkctl::lark::workforce_types::run_workforce_types_command;
use larkctl::lark::{run_delete_command, AccessTokens};
use larkctl::{
    Cli, ClientConfig, Command, CredentialsResolver, GetResource, LarkClient, LarkError,
    RetryPolicy,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting larkctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let credentials =
        CredentialsResolver::new().resolve(cli.app_id.as_deref(), cli.app_secret.as_deref())?;

    if !cli.base_url.starts_with("https://") && !cli.base_url.starts_with("http://") {
        return Err(LarkError::Config(format!(
            "invalid base URL '{}': expected an http:// or https:// URL",
            cli.base_url
        ))
        .into());
    }

    let config = ClientConfig {
        base_url: cli.base_url.trim_end_matches('/').to_string(),
        retry: RetryPolicy::new(cli.retry_count, Duration::from_secs(cli.base_delay)),
    };
    debug!(
        "Using {} with up to {} attempt(s) per request",
        config.base_url, config.retry.max_attempts
    );

    let unauthenticated = LarkClient::new(&credentials.app_id, AccessTokens::default(), config);

    // Ctrl-C aborts pending retries and in-flight requests
    let cancel = unauthenticated.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling pending requests");
            cancel.cancel();
        }
    });

    let secret = &credentials.app_secret;
    match &cli.command {
        Command::Token(_) => run_token_command(&unauthenticated, secret, cli).await,
        Command::Get { resource } => {
            let client = unauthenticated.login(secret).await?;
            match resource {
                GetResource::UserGroups(_) => run_user_groups_command(&client, cli).await,
                GetResource::ChatMembers(_) => run_chat_members_command(&client, cli).await,
                GetResource::UgMembers(_) => run_ug_members_command(&client, cli).await,
                GetResource::RoleMembers(_) => run_role_members_command(&client, cli).await,
                GetResource::WorkforceTypes(_) => {
                    run_workforce_types_command(&client, cli).await
                }
                GetResource::FolderChildren(_) => {
                    run_folder_children_command(&client, cli).await
                }
                GetResource::Users(_) => run_users_command(&client, cli).await,
            }
        }
        Command::Members { action } => {
            let client = unauthenticated.login(secret).await?;
            match action.target() {
                MembersTarget::Chat(_) => run_chat_membership_command(&client, cli).await,
                MembersTarget::Ug(_) => run_ug_membership_command(&client, cli).await,
                MembersTarget::Role(_) => run_role_membership_command(&client, cli).await,
            }
        }
        Command::Delete { .. } => {
            let client = unauthenticated.login(secret).await?;
            run_delete_command(&client, cli).await
        }
    }
}
