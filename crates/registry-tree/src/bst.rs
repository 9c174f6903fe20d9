//! Plain (unbalanced) binary search tree with the same external contract
//! as [`AvlTree`](crate::AvlTree), minus the balancing subsystem.
//!
//! Shape depends entirely on insertion order: sorted input degrades the
//! tree to a linked list and all operations to O(n). Kept as a behavioral
//! baseline for the AVL engine.

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::traverse::{self, TraverseOrder, TreeNode};

type Link<V> = Option<Box<BstNode<V>>>;

/// A vertex of the plain BST; no height bookkeeping.
#[derive(Debug, Clone)]
pub(crate) struct BstNode<V> {
    key: i64,
    value: V,
    left: Link<V>,
    right: Link<V>,
}

impl<V> BstNode<V> {
    fn new(key: i64, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

impl<V> TreeNode for BstNode<V> {
    type Value = V;

    fn value(&self) -> &V {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// An unbalanced binary search tree mapping `i64` keys to payloads.
#[derive(Debug, Clone)]
pub struct BstTree<V> {
    root: Link<V>,
    size: usize,
}

impl<V> Default for BstTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BstTree<V> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Inserts `value` under `key`; duplicate keys are rejected and leave
    /// the tree untouched.
    pub fn insert(&mut self, key: i64, value: V) -> Result<(), TreeError> {
        insert_at(&mut self.root, key, value)?;
        self.size += 1;
        Ok(())
    }

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

    /// Mutable access to the payload stored under `key`.
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

    pub fn has(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry under `key`; `false` when absent. Two-children
    /// nodes receive their in-order successor's key and payload, same as
    /// the AVL engine.
    pub fn remove(&mut self, key: i64) -> bool {
        let (root, removed) = remove_at(self.root.take(), key);
        self.root = root;
        if removed {
            self.size -= 1;
        }
        removed
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    pub fn root(&self) -> Option<&V> {
        self.root.as_deref().map(|n| &n.value)
    }

    pub fn root_key(&self) -> Option<i64> {
        self.root.as_deref().map(|n| n.key)
    }

    pub fn min(&self) -> Option<&V> {
        let mut curr = self.root.as_deref()?;
        while let Some(left) = curr.left.as_deref() {
            curr = left;
        }
        Some(&curr.value)
    }

    pub fn max(&self) -> Option<&V> {
        let mut curr = self.root.as_deref()?;
        while let Some(right) = curr.right.as_deref() {
            curr = right;
        }
        Some(&curr.value)
    }

    /// All payloads in the requested order, eagerly materialized.
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

    /// Checks BST key ordering and the tracked size. Intended for tests.
    pub fn assert_valid(&self) -> Result<(), String> {
        let keys = self.keys();
        if keys.len() != self.size {
            return Err(format!(
                "size mismatch: tracked {}, reachable {}",
                self.size,
                keys.len()
            ));
        }
        if keys.windows(2).any(|w| w[0] >= w[1]) {
            return Err("key order violated".to_string());
        }
        Ok(())
    }
}

fn insert_at<V>(link: &mut Link<V>, key: i64, value: V) -> Result<(), TreeError> {
    match link {
        None => {
            *link = Some(Box::new(BstNode::new(key, value)));
            Ok(())
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert_at(&mut node.left, key, value),
            Ordering::Greater => insert_at(&mut node.right, key, value),
            Ordering::Equal => Err(TreeError::DuplicateKey(key)),
        },
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
            (None, child) | (child, None) => return (child, true),
            (Some(left), Some(right)) => {
                let (right, successor) = detach_min(right);
                node.key = successor.key;
                node.value = successor.value;
                node.left = Some(left);
                node.right = right;
                true
            }
        },
    };
    (Some(node), removed)
}

fn detach_min<V>(mut node: Box<BstNode<V>>) -> (Link<V>, Box<BstNode<V>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = detach_min(left);
            node.left = rest;
            (Some(node), min)
        }
    }
}

fn push_keys<V>(node: Option<&BstNode<V>>, out: &mut Vec<i64>) {
    let Some(node) = node else {
        return;
    };
    push_keys(node.left.as_deref(), out);
    out.push(node.key);
    push_keys(node.right.as_deref(), out);
}
