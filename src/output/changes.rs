//! Membership change report formatter

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::common::print_rows;
use crate::cli::OutputFormat;
use crate::lark::MemberDiff;

const HEADERS: [&str; 3] = ["CHANGE", "ROLE", "ID"];

/// Serializable summary of one membership operation
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub target: String,
    pub id: String,
    pub action: String,
    pub members_added: Vec<String>,
    pub members_removed: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub administrators_added: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub administrators_removed: Vec<String>,
    pub last_updated: String,
}

impl ChangeReport {
    /// Report stamped with the current time
    pub fn new(target: &str, id: &str, action: &str, members: MemberDiff) -> Self {
        Self {
            target: target.to_string(),
            id: id.to_string(),
            action: action.to_string(),
            members_added: members.added,
            members_removed: members.removed,
            administrators_added: Vec::new(),
            administrators_removed: Vec::new(),
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn with_administrators(mut self, administrators: MemberDiff) -> Self {
        self.administrators_added = administrators.added;
        self.administrators_removed = administrators.removed;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members_added.is_empty()
            && self.members_removed.is_empty()
            && self.administrators_added.is_empty()
            && self.administrators_removed.is_empty()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let groups = [
            ("added", "member", &self.members_added),
            ("added", "administrator", &self.administrators_added),
            ("removed", "administrator", &self.administrators_removed),
            ("removed", "member", &self.members_removed),
        ];
        groups
            .iter()
            .flat_map(|(change, role, ids)| {
                ids.iter()
                    .map(move |id| vec![change.to_string(), role.to_string(), id.clone()])
            })
            .collect()
    }
}

/// Output a change report in the specified format
pub fn output_changes(report: &ChangeReport, format: OutputFormat, no_header: bool) {
    if report.is_empty() && matches!(format, OutputFormat::Table) {
        println!(
            "✓ {} {} already up to date ({})",
            report.target, report.id, report.last_updated
        );
        return;
    }
    print_rows(&HEADERS, &report.rows(), report, format, no_header);
}
