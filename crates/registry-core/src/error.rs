use registry_tree::TreeError;
use thiserror::Error;

/// Errors raised by the registry layer.
///
/// Absence stays a `None`/`false` result, never an error; these variants
/// cover domain-rule violations and duplicate keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("record must contain a 'document' field")]
    MissingDocument,

    #[error("document '{0}' cannot be converted to an integer")]
    InvalidDocument(String),

    #[error("document {0} is out of range (must be 0..=999999)")]
    DocumentOutOfRange(i64),

    #[error("document {0} already exists in the registry")]
    DuplicateDocument(i64),

    #[error("invalid traversal order '{0}' (must be 'in', 'pre', or 'post')")]
    InvalidOrder(String),
}

impl From<TreeError> for RegistryError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::DuplicateKey(key) => RegistryError::DuplicateDocument(key),
        }
    }
}
