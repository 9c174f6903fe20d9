//! Self-balancing AVL tree engine.
//!
//! Insert and delete walk down recursively and rebalance on the unwind, so
//! every ancestor of the mutation point re-checks its balance factor. For
//! insert a single rotation would suffice, but deletion can shrink a
//! subtree and tip ancestors arbitrarily far up, so the unwind re-walk is
//! required there; both paths share it.

pub(crate) mod balance;
mod node;

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::traverse::{self, TraverseOrder};

use balance::{height, rebalance};
use node::{AvlNode, Link};

/// An AVL tree mapping a unique `i64` key to an opaque payload.
///
/// Search, insert and delete are O(log n); in-order traversal yields
/// payloads in ascending key order. The tree performs no synchronization;
/// the `&mut self` receivers on mutating operations make callers serialize
/// access.
///
/// # Examples
///
/// ```
/// use registry_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(101, "ana")?;
/// tree.insert(205, "luis")?;
///
/// assert_eq!(tree.get(101), Some(&"ana"));
/// assert_eq!(tree.size(), 2);
/// assert!(tree.remove(101));
/// assert!(!tree.remove(101));
/// # Ok::<(), registry_tree::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<V> {
    root: Link<V>,
    size: usize,
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AvlTree<V> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// Fails with [`TreeError::DuplicateKey`] when the key is already
    /// present, leaving the tree untouched.
    pub fn insert(&mut self, key: i64, value: V) -> Result<(), TreeError> {
        insert_at(&mut self.root, key, value)?;
        self.size += 1;
        Ok(())
    }

    /// Looks up the payload stored under `key`.
    pub fn get(&self, key: i64) -> Option<&V> {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            match key.cmp(&node.key) {
                Ordering::Less => curr = node.left.as_deref(),
                Ordering::Greater => curr = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Mutable access to the payload stored under `key`. The key itself
    /// stays fixed, so payload edits cannot disturb the tree structure.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let mut curr = self.root.as_deref_mut();
        while let Some(node) = curr {
            match key.cmp(&node.key) {
                Ordering::Less => curr = node.left.as_deref_mut(),
                Ordering::Greater => curr = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Whether `key` is present.
    pub fn has(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry under `key`.
    ///
    /// Returns `true` iff an entry existed and was removed; an absent key
    /// leaves the tree (size and order) unchanged. A node with two
    /// children receives its in-order successor's key and payload and the
    /// successor's old position is unlinked, so exactly one structural
    /// removal happens per call.
    pub fn remove(&mut self, key: i64) -> bool {
        let (root, removed) = remove_at(self.root.take(), key);
        self.root = root;
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases the whole tree in one step.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Height of the tree; 0 when empty, 1 for a single node.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Payload at the root, if any.
    pub fn root(&self) -> Option<&V> {
        self.root.as_deref().map(|n| &n.value)
    }

    /// Key at the root, if any.
    pub fn root_key(&self) -> Option<i64> {
        self.root.as_deref().map(|n| n.key)
    }

    /// Payload under the smallest key (leftmost node).
    pub fn min(&self) -> Option<&V> {
        self.min_node().map(|n| &n.value)
    }

    /// Payload under the largest key (rightmost node).
    pub fn max(&self) -> Option<&V> {
        self.max_node().map(|n| &n.value)
    }

    pub fn min_key(&self) -> Option<i64> {
        self.min_node().map(|n| n.key)
    }

    pub fn max_key(&self) -> Option<i64> {
        self.max_node().map(|n| n.key)
    }

    /// All payloads in the requested order, eagerly materialized.
    ///
    /// [`TraverseOrder::In`] yields ascending key order; an empty tree
    /// yields an empty vector.
    pub fn traverse(&self, order: TraverseOrder) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.size);
        traverse::collect(self.root.as_deref(), order, &mut out);
        out
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.size);
        push_keys(self.root.as_deref(), &mut out);
        out
    }

    /// Walks the whole tree checking the structural invariants: BST key
    /// ordering, `|balance factor| <= 1` everywhere, cached heights equal
    /// to recomputed heights, and the tracked size equal to the number of
    /// reachable nodes. Intended for tests.
    pub fn assert_valid(&self) -> Result<(), String> {
        let mut count = 0usize;
        if let Some(root) = self.root.as_deref() {
            check_node(root, None, None, &mut count)?;
        }
        if count != self.size {
            return Err(format!(
                "size mismatch: tracked {}, reachable {count}",
                self.size
            ));
        }
        Ok(())
    }

    fn min_node(&self) -> Option<&AvlNode<V>> {
        let mut curr = self.root.as_deref()?;
        while let Some(left) = curr.left.as_deref() {
            curr = left;
        }
        Some(curr)
    }

    fn max_node(&self) -> Option<&AvlNode<V>> {
        let mut curr = self.root.as_deref()?;
        while let Some(right) = curr.right.as_deref() {
            curr = right;
        }
        Some(curr)
    }
}

fn insert_at<V>(link: &mut Link<V>, key: i64, value: V) -> Result<(), TreeError> {
    match link {
        None => {
            *link = Some(Box::new(AvlNode::new(key, value)));
            Ok(())
        }
        Some(node) => {
            match key.cmp(&node.key) {
                Ordering::Less => insert_at(&mut node.left, key, value)?,
                Ordering::Greater => insert_at(&mut node.right, key, value)?,
                Ordering::Equal => return Err(TreeError::DuplicateKey(key)),
            }
            let unwound = link.take().expect("subtree present after insert");
            *link = Some(rebalance(unwound));
            Ok(())
        }
    }
}

fn remove_at<V>(link: Link<V>, key: i64) -> (Link<V>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };
    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, removed) = remove_at(node.left.take(), key);
            node.left = child;
            removed
        }
        Ordering::Greater => {
            let (child, removed) = remove_at(node.right.take(), key);
            node.right = child;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // 0 or 1 child: the node is replaced by its (possibly absent)
            // single child; nothing above this level has moved yet, so the
            // caller's unwind handles the rebalancing.
            (None, child) | (child, None) => return (child, true),
            (Some(left), Some(right)) => {
                // Two children: overwrite this node with its in-order
                // successor (minimum of the right subtree) and unlink the
                // successor's old position, rebalancing its path.
                let (right, successor) = detach_min(right);
                node.key = successor.key;
                node.value = successor.value;
                node.left = Some(left);
                node.right = right;
                true
            }
        },
    };
    if removed {
        (Some(rebalance(node)), true)
    } else {
        (Some(node), false)
    }
}

/// Detaches the leftmost node of the subtree, rebalancing the descent path
/// on the unwind, and returns the remaining subtree plus the detached node.
fn detach_min<V>(mut node: Box<AvlNode<V>>) -> (Link<V>, Box<AvlNode<V>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = detach_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

fn push_keys<V>(node: Option<&AvlNode<V>>, out: &mut Vec<i64>) {
    let Some(node) = node else {
        return;
    };
    push_keys(node.left.as_deref(), out);
    out.push(node.key);
    push_keys(node.right.as_deref(), out);
}

fn check_node<V>(
    node: &AvlNode<V>,
    lo: Option<i64>,
    hi: Option<i64>,
    count: &mut usize,
) -> Result<u32, String> {
    if let Some(lo) = lo {
        if node.key <= lo {
            return Err(format!("key order violated: {} <= bound {lo}", node.key));
        }
    }
    if let Some(hi) = hi {
        if node.key >= hi {
            return Err(format!("key order violated: {} >= bound {hi}", node.key));
        }
    }
    *count += 1;

    let lh = match node.left.as_deref() {
        Some(left) => check_node(left, lo, Some(node.key), count)?,
        None => 0,
    };
    let rh = match node.right.as_deref() {
        Some(right) => check_node(right, Some(node.key), hi, count)?,
        None => 0,
    };

    let expected = 1 + lh.max(rh);
    if node.height != expected {
        return Err(format!(
            "height mismatch at key {}: cached {}, actual {expected}",
            node.key, node.height
        ));
    }
    let bf = lh as i32 - rh as i32;
    if !(-1..=1).contains(&bf) {
        return Err(format!("AVL balance violated at key {}: bf {bf}", node.key));
    }
    Ok(expected)
}
