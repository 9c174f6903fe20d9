//! Caller-owned registry handle.

use registry_tree::{AvlTree, TraverseOrder};
use serde_json::Value;

use crate::error::RegistryError;
use crate::record::{document_of, parse_document, Record, DOCUMENT_FIELD};

/// A registry of records keyed by document number, backed by an AVL tree.
///
/// This is an explicit value the caller owns and passes around — there is
/// no hidden global instance. The registry performs no synchronization;
/// hosts with concurrent callers must serialize mutations externally
/// (a lock around the handle, or a single task owning it).
#[derive(Debug, Default, Clone)]
pub struct Registry {
    tree: AvlTree<Record>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the record's document key and inserts the record.
    ///
    /// Returns the document number on success. Fails without touching the
    /// registry when the key is missing, malformed, out of range, or
    /// already present.
    pub fn insert(&mut self, record: Record) -> Result<i64, RegistryError> {
        let document = document_of(&record)?;
        self.tree.insert(document, record)?;
        Ok(document)
    }

    /// Looks up a record by document number.
    pub fn get(&self, document: i64) -> Option<&Record> {
        self.tree.get(document)
    }

    /// Looks up a record by a string-typed key. A non-numeric or
    /// out-of-range key is simply absent, not an error.
    pub fn get_str(&self, raw: &str) -> Option<&Record> {
        let document = parse_document(raw).ok()?;
        self.tree.get(document)
    }

    /// Merges `fields` into the record stored under `document` and returns
    /// the updated record, or `None` when no such record exists.
    ///
    /// The document key stays fixed: a `"document"` entry in `fields` is
    /// overwritten with the stored key, so an update can never move or
    /// invalidate a record. Changing a document means removing the old
    /// record and inserting a new one.
    pub fn update(&mut self, document: i64, fields: Record) -> Option<&Record> {
        let record = self.tree.get_mut(document)?;
        for (field, value) in fields {
            record.insert(field, value);
        }
        record.insert(DOCUMENT_FIELD.to_string(), Value::from(document));
        Some(&*record)
    }

    /// Whether a record with this document number exists.
    pub fn contains(&self, document: i64) -> bool {
        self.tree.has(document)
    }

    /// Removes a record; `true` iff it existed.
    pub fn remove(&mut self, document: i64) -> bool {
        self.tree.remove(document)
    }

    /// Removes a record by a string-typed key; non-numeric keys remove
    /// nothing.
    pub fn remove_str(&mut self, raw: &str) -> bool {
        match parse_document(raw) {
            Ok(document) => self.tree.remove(document),
            Err(_) => false,
        }
    }

    /// All records in the given traversal order. [`TraverseOrder::In`]
    /// lists them sorted by document number.
    pub fn all(&self, order: TraverseOrder) -> Vec<&Record> {
        self.tree.traverse(order)
    }

    /// All document numbers in ascending order.
    pub fn documents(&self) -> Vec<i64> {
        self.tree.keys()
    }

    pub fn size(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear()
    }

    /// Record at the tree root.
    pub fn root(&self) -> Option<&Record> {
        self.tree.root()
    }

    /// Record with the smallest document number.
    pub fn min(&self) -> Option<&Record> {
        self.tree.min()
    }

    /// Record with the largest document number.
    pub fn max(&self) -> Option<&Record> {
        self.tree.max()
    }
}

/// Parses a traversal-order name: `"in"`, `"pre"` or `"post"`,
/// case-insensitive.
pub fn parse_order(raw: &str) -> Result<TraverseOrder, RegistryError> {
    match raw.to_ascii_lowercase().as_str() {
        "in" => Ok(TraverseOrder::In),
        "pre" => Ok(TraverseOrder::Pre),
        "post" => Ok(TraverseOrder::Post),
        _ => Err(RegistryError::InvalidOrder(raw.to_string())),
    }
}
