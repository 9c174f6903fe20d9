use crate::traverse::TreeNode;

/// Owned link to a subtree.
pub(crate) type Link<V> = Option<Box<AvlNode<V>>>;

/// A vertex of the AVL tree.
///
/// Children are exclusively owned; the height of the subtree rooted here is
/// cached and kept equal to `1 + max(height(left), height(right))` (absent
/// child = 0, leaf = 1) after every mutation.
#[derive(Debug, Clone)]
pub(crate) struct AvlNode<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
    pub(crate) left: Link<V>,
    pub(crate) right: Link<V>,
    pub(crate) height: u32,
}

impl<V> AvlNode<V> {
    pub(crate) fn new(key: i64, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

impl<V> TreeNode for AvlNode<V> {
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
