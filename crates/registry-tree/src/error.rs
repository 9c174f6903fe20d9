use thiserror::Error;

/// Errors surfaced by the tree engines.
///
/// Absence is never an error: lookups return `None` and removals return
/// `false` for keys that are not present.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("key {0} already exists in the tree")]
    DuplicateKey(i64),
}
