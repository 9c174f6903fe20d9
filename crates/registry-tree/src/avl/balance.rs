//! Height bookkeeping and the four rotation patterns.
//!
//! All functions here are pure structural operations over owned links and
//! are shared by the insert and delete unwind paths. A rotation on a node
//! missing the required child would mean the balance bookkeeping is broken,
//! so those cases abort rather than being tolerated.

use super::node::{AvlNode, Link};

/// Cached height of a subtree; 0 for an absent child.
#[inline]
pub(crate) fn height<V>(link: &Link<V>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

#[inline]
pub(crate) fn update_height<V>(node: &mut AvlNode<V>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

/// `height(left) - height(right)`.
#[inline]
pub(crate) fn balance_factor<V>(node: &AvlNode<V>) -> i32 {
    height(&node.left) as i32 - height(&node.right) as i32
}

/// Promotes `z.left`; `z` becomes its right child. Heights are recomputed
/// demoted node first, promoted node second.
pub(crate) fn rotate_right<V>(mut z: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let mut y = z.left.take().expect("rotate_right: left child must exist");
    z.left = y.right.take();
    update_height(&mut z);
    y.right = Some(z);
    update_height(&mut y);
    y
}

/// Promotes `z.right`; `z` becomes its left child.
pub(crate) fn rotate_left<V>(mut z: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let mut y = z.right.take().expect("rotate_left: right child must exist");
    z.right = y.left.take();
    update_height(&mut z);
    y.left = Some(z);
    update_height(&mut y);
    y
}

/// Refreshes `z`'s height and restores `|balance factor| <= 1` at `z`.
///
/// Case selection by the child's balance factor handles both unwind paths:
/// on insert the child is never perfectly balanced at the moment `z` tips
/// past +/-1, while on delete it commonly is, and a tied child takes the
/// single-rotation branch.
///
/// | balance(z) | child condition           | action                  |
/// |------------|---------------------------|-------------------------|
/// | > 1        | balance(left) >= 0 (LL)   | rotate_right            |
/// | > 1        | balance(left) < 0 (LR)    | rotate_left then right  |
/// | < -1       | balance(right) <= 0 (RR)  | rotate_left             |
/// | < -1       | balance(right) > 0 (RL)   | rotate_right then left  |
pub(crate) fn rebalance<V>(mut z: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    update_height(&mut z);
    let bf = balance_factor(&z);

    if bf > 1 {
        let left = z.left.as_deref().expect("left-heavy node has a left child");
        if balance_factor(left) < 0 {
            let rotated = rotate_left(z.left.take().expect("left child just observed"));
            z.left = Some(rotated);
        }
        return rotate_right(z);
    }

    if bf < -1 {
        let right = z
            .right
            .as_deref()
            .expect("right-heavy node has a right child");
        if balance_factor(right) > 0 {
            let rotated = rotate_right(z.right.take().expect("right child just observed"));
            z.right = Some(rotated);
        }
        return rotate_left(z);
    }

    z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i64) -> Box<AvlNode<i64>> {
        Box::new(AvlNode::new(key, key))
    }

    #[test]
    fn rotate_right_reassigns_middle_subtree() {
        // z=30 with left y=10 carrying right subtree T=20.
        let mut z = leaf(30);
        let mut y = leaf(10);
        y.right = Some(leaf(20));
        y.height = 2;
        z.left = Some(y);
        z.height = 3;

        let y = rotate_right(z);
        assert_eq!(y.key, 10);
        assert_eq!(y.height, 2);
        let z = y.right.as_ref().unwrap();
        assert_eq!(z.key, 30);
        assert_eq!(z.height, 1);
        assert_eq!(z.left.as_ref().unwrap().key, 20);
    }

    #[test]
    fn rotate_left_reassigns_middle_subtree() {
        let mut z = leaf(10);
        let mut y = leaf(30);
        y.left = Some(leaf(20));
        y.height = 2;
        z.right = Some(y);
        z.height = 3;

        let y = rotate_left(z);
        assert_eq!(y.key, 30);
        let z = y.left.as_ref().unwrap();
        assert_eq!(z.key, 10);
        assert_eq!(z.right.as_ref().unwrap().key, 20);
    }

    #[test]
    fn rebalance_is_identity_within_tolerance() {
        let mut z = leaf(20);
        z.left = Some(leaf(10));
        z.height = 7; // stale on purpose; rebalance must refresh it
        let z = rebalance(z);
        assert_eq!(z.key, 20);
        assert_eq!(z.height, 2);
        assert_eq!(balance_factor(&z), 1);
    }
}
