//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask before a destructive operation
///
/// `--yes` always proceeds. In batch mode without `--yes` the operation is
/// declined (fails safe) after printing why.
pub fn confirm_action(
    prompt: &str,
    yes: bool,
    batch_mode: bool,
) -> std::result::Result<bool, dialoguer::Error> {
    if yes {
        return Ok(true);
    }
    if batch_mode {
        eprintln!("{} Declined in batch mode; pass --yes to proceed.", prompt);
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
}
