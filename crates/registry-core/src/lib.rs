//! Record registry over the AVL ordered-key store.
//!
//! The engine in `registry-tree` treats payloads as opaque; this crate is
//! the calling layer that gives them a shape. A [`Record`] is a
//! schema-less JSON object whose `"document"` field is the ordering key:
//! an integer of at most six digits (`0..=999999`), also accepted as a
//! numeric string. The [`Registry`] is an explicit, caller-owned handle —
//! whoever constructs it controls its lifetime and serializes access to it.
//!
//! # Examples
//!
//! ```
//! use registry_core::{Registry, parse_order};
//! use serde_json::json;
//!
//! let mut registry = Registry::new();
//! let record = json!({ "document": 101, "name": "Ana", "age": 6 });
//! let document = registry.insert(record.as_object().unwrap().clone())?;
//! assert_eq!(document, 101);
//!
//! let order = parse_order("in")?;
//! assert_eq!(registry.all(order).len(), 1);
//! # Ok::<(), registry_core::RegistryError>(())
//! ```

pub mod error;
pub mod record;
pub mod registry;

pub use error::RegistryError;
pub use record::{document_of, parse_document, Record, DOCUMENT_FIELD, MAX_DOCUMENT, MIN_DOCUMENT};
pub use registry::{parse_order, Registry};

pub use registry_tree::TraverseOrder;
