//! Member ID classification, chunked batch execution and set diffs

use log::debug;
use std::collections::HashSet;
use std::future::Future;

use crate::config::batch;
use crate::error::{LarkError, Result};

/// Kind of chat member an ID refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Application bot (`cli_` prefix)
    Bot,
    /// User open ID (`ou_` prefix)
    Person,
}

impl MemberKind {
    /// IDs per request the API accepts for this kind
    pub fn chunk_size(&self) -> usize {
        match self {
            MemberKind::Bot => batch::BOT_CHUNK_SIZE,
            MemberKind::Person => batch::PERSON_CHUNK_SIZE,
        }
    }
}

/// Classify an ID by its prefix
pub fn classify_member_id(id: &str) -> Result<MemberKind> {
    if id.starts_with(batch::BOT_PREFIX) {
        Ok(MemberKind::Bot)
    } else if id.starts_with(batch::PERSON_PREFIX) {
        Ok(MemberKind::Person)
    } else {
        Err(LarkError::Validation(format!(
            "invalid administrator ID: {}",
            id
        )))
    }
}

/// Split IDs into `(bots, persons)`, preserving input order
///
/// Fails on the first ID that is neither a bot nor a person.
pub fn split_bots_and_persons<S: AsRef<str>>(ids: &[S]) -> Result<(Vec<String>, Vec<String>)> {
    let mut bots = Vec::new();
    let mut persons = Vec::new();

    for id in ids {
        let id = id.as_ref();
        match classify_member_id(id)? {
            MemberKind::Bot => bots.push(id.to_string()),
            MemberKind::Person => persons.push(id.to_string()),
        }
    }

    Ok((bots, persons))
}

/// Add `member_id_type=app_id` to a path, respecting any existing query
pub(crate) fn with_app_id_type(path: &str) -> String {
    let separator = if path.contains('?') { "&" } else { "?" };
    format!("{}{}member_id_type=app_id", path, separator)
}

/// Runs one request per chunk, stopping at the first failure
///
/// The runner remembers every ID submitted by a successful chunk, across
/// all calls to [`BatchRunner::run`]. A failing chunk turns into
/// [`LarkError::PartialBatch`] carrying those IDs, so callers can report
/// what was already applied.
#[derive(Debug, Default)]
pub struct BatchRunner {
    applied: Vec<String>,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// IDs applied so far
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    /// Call `send` once per chunk of `ids`, collecting each chunk's result
    pub async fn run<R, F, Fut>(
        &mut self,
        ids: &[String],
        chunk_size: usize,
        mut send: F,
    ) -> Result<Vec<R>>
    where
        F: FnMut(Vec<String>) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let mut results = Vec::new();
        let total = ids.len().div_ceil(chunk_size.max(1));

        for (index, chunk) in ids.chunks(chunk_size.max(1)).enumerate() {
            debug!("Sending chunk {}/{} ({} IDs)", index + 1, total, chunk.len());
            match send(chunk.to_vec()).await {
                Ok(result) => {
                    self.applied.extend_from_slice(chunk);
                    results.push(result);
                }
                Err(e) => {
                    return Err(LarkError::PartialBatch {
                        applied: std::mem::take(&mut self.applied),
                        source: Box::new(e),
                    })
                }
            }
        }

        Ok(results)
    }

    /// Drop `ids` from the applied list (submitted but rejected by the API)
    pub fn retract(&mut self, ids: &[String]) {
        self.applied.retain(|id| !ids.contains(id));
    }

    /// Attach the IDs applied so far to an error raised between chunks
    ///
    /// Errors pass through unchanged when nothing was applied yet or when
    /// they already carry the applied list.
    pub fn abort(&mut self, error: LarkError) -> LarkError {
        match error {
            partial @ LarkError::PartialBatch { .. } => partial,
            other if self.applied.is_empty() => other,
            other => LarkError::PartialBatch {
                applied: std::mem::take(&mut self.applied),
                source: Box::new(other),
            },
        }
    }
}

/// Members to add and remove to turn `current` into `desired`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDiff {
    /// In `desired` but not in `current`, in `desired` order
    pub added: Vec<String>,
    /// In `current` but not in `desired`, in `current` order
    pub removed: Vec<String>,
}

impl MemberDiff {
    pub fn between<S: AsRef<str>, D: AsRef<str>>(current: &[S], desired: &[D]) -> Self {
        let current_set: HashSet<&str> = current.iter().map(|s| s.as_ref()).collect();
        let desired_set: HashSet<&str> = desired.iter().map(|s| s.as_ref()).collect();

        let mut seen = HashSet::new();
        let added = desired
            .iter()
            .map(|s| s.as_ref())
            .filter(|id| !current_set.contains(id) && seen.insert(*id))
            .map(str::to_string)
            .collect();

        let mut seen = HashSet::new();
        let removed = current
            .iter()
            .map(|s| s.as_ref())
            .filter(|id| !desired_set.contains(id) && seen.insert(*id))
            .map(str::to_string)
            .collect();

        Self { added, removed }
    }

    /// Diff that only adds `ids`
    pub fn additions(ids: &[String]) -> Self {
        Self {
            added: ids.to_vec(),
            removed: Vec::new(),
        }
    }

    /// Diff that only removes `ids`
    pub fn removals(ids: &[String]) -> Self {
        Self {
            added: Vec::new(),
            removed: ids.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
