//! Input checks applied before any request is issued

use std::collections::HashSet;

use crate::error::{LarkError, Result};

/// Minimum length of a group chat name
const MIN_GROUP_NAME_CHARS: usize = 2;

/// Group chat names: public chats need a name, private ones may omit it
pub fn validate_group_chat_name(chat_type: &str, name: &str) -> Result<()> {
    let too_short = name.chars().count() < MIN_GROUP_NAME_CHARS;
    match chat_type {
        "public" if too_short => Err(LarkError::Validation(format!(
            "Public group name must be at least {} characters long",
            MIN_GROUP_NAME_CHARS
        ))),
        "private" if !name.is_empty() && too_short => Err(LarkError::Validation(format!(
            "If provided, private group name must be at least {} characters long",
            MIN_GROUP_NAME_CHARS
        ))),
        _ => Ok(()),
    }
}

/// Every entry of `subset` must appear in `superset`
pub fn validate_subset<S: AsRef<str>, T: AsRef<str>>(
    subset: &[S],
    superset: &[T],
    subset_name: &str,
    superset_name: &str,
) -> Result<()> {
    let known: HashSet<&str> = superset.iter().map(|s| s.as_ref()).collect();
    let missing: Vec<&str> = subset
        .iter()
        .map(|s| s.as_ref())
        .filter(|id| !known.contains(id))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LarkError::Validation(format!(
            "{} must also be listed in {}: {}",
            subset_name,
            superset_name,
            missing.join(", ")
        )))
    }
}

/// Reject empty IDs in a list
pub fn validate_non_empty_ids<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    if ids.iter().any(|id| id.as_ref().trim().is_empty()) {
        return Err(LarkError::Validation("ID cannot be empty".to_string()));
    }
    Ok(())
}
