//! Traversal subsystem shared by both tree engines.

/// Order in which a traversal visits payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraverseOrder {
    /// Left subtree, node, right subtree. Yields ascending key order;
    /// this is the primary read path for listing records sorted by key.
    #[default]
    In,
    /// Node first, then left and right subtrees.
    Pre,
    /// Left and right subtrees first, node last.
    Post,
}

/// Structural view of a tree vertex, the seam between the traversal
/// subsystem and the concrete node types.
pub(crate) trait TreeNode {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Eagerly materializes the payloads under `node` into `out`.
pub(crate) fn collect<'a, N: TreeNode>(
    node: Option<&'a N>,
    order: TraverseOrder,
    out: &mut Vec<&'a N::Value>,
) {
    let Some(node) = node else {
        return;
    };
    match order {
        TraverseOrder::In => {
            collect(node.left(), order, out);
            out.push(node.value());
            collect(node.right(), order, out);
        }
        TraverseOrder::Pre => {
            out.push(node.value());
            collect(node.left(), order, out);
            collect(node.right(), order, out);
        }
        TraverseOrder::Post => {
            collect(node.left(), order, out);
            collect(node.right(), order, out);
            out.push(node.value());
        }
    }
}
