//! In-memory ordered-key stores for the record registry.
//!
//! Two tree-backed maps from an `i64` key to an opaque payload:
//!
//! - [`AvlTree`] — self-balancing binary search tree. Every insertion and
//!   deletion re-establishes the AVL invariant (`|balance factor| <= 1` at
//!   every node) through rotations, so search, insert and delete stay
//!   O(log n) and in-order traversal always yields keys in ascending order.
//! - [`BstTree`] — the same external contract with no rebalancing. Useful
//!   as a behavioral baseline; degrades to O(n) on sorted input.
//!
//! The payload type is generic and never inspected; key-domain rules
//! (ranges, string conversion) belong to the calling layer.
//!
//! # Examples
//!
//! ```
//! use registry_tree::{AvlTree, TraverseOrder};
//!
//! let mut tree = AvlTree::new();
//! tree.insert(30, "c")?;
//! tree.insert(10, "a")?;
//! tree.insert(20, "b")?;
//!
//! // Rotations keep the tree balanced: 20 is now the root.
//! assert_eq!(tree.root_key(), Some(20));
//! assert_eq!(tree.traverse(TraverseOrder::In), vec![&"a", &"b", &"c"]);
//! # Ok::<(), registry_tree::TreeError>(())
//! ```

pub mod avl;
pub mod bst;
pub mod error;
pub mod traverse;

pub use avl::AvlTree;
pub use bst::BstTree;
pub use error::TreeError;
pub use traverse::TraverseOrder;
