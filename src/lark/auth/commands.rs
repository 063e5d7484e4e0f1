//! Token command handler

use chrono::{Duration, SecondsFormat, Utc};

use crate::lark::LarkClient;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command};

/// Run the 'token' command: request fresh tokens and report their expiry
pub async fn run_token_command(
    client: &LarkClient,
    app_secret: &str,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Token(args) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner("Requesting access tokens...", cli.batch);
    let response = client.fetch_access_tokens(app_secret).await;
    finish_spinner(spinner);
    let response = response?;

    let expires_at = (Utc::now() + Duration::seconds(response.expire))
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    println!(
        "✓ Authenticated as app '{}' (tokens valid until {})",
        client.app_id(),
        expires_at
    );
    if args.show {
        println!("{}", response.tenant_access_token);
    }
    Ok(())
}
