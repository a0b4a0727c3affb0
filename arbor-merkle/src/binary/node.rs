/// Index of a node inside a tree's node arena.
pub type NodeId = usize;

/// A vertex of the binary tree.
///
/// Links are arena indices. `left` and `right` point down to the children the
/// node was built from; `parent` is a back-reference used only to walk from a
/// leaf up to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    digest: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn create_leaf(digest: T) -> Self {
        Self {
            digest,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn create_node(digest: T, left: NodeId, right: NodeId) -> Self {
        Self {
            digest,
            parent: None,
            left: Some(left),
            right: Some(right),
        }
    }

    /// A padding copy: same digest and children, no parent yet. The children
    /// keep pointing at the node that was copied.
    pub(crate) fn duplicate(&self) -> Self
    where
        T: Clone,
    {
        Self {
            digest: self.digest.clone(),
            parent: None,
            left: self.left,
            right: self.right,
        }
    }

    pub fn digest(&self) -> &T {
        &self.digest
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left_child(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right_child(&self) -> Option<NodeId> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn digest_mut(&mut self) -> &mut T {
        &mut self.digest
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::sum;

    #[test]
    fn create_leaf_has_no_links() {
        let leaf = Node::create_leaf(sum(b"leaf"));

        assert!(leaf.is_leaf());
        assert!(leaf.is_root());
        assert_eq!(leaf.left_child(), None);
        assert_eq!(leaf.right_child(), None);
        assert_eq!(leaf.digest(), &sum(b"leaf"));
    }

    #[test]
    fn create_node_links_both_children() {
        let mut node = Node::create_node(sum(b"node"), 4, 5);
        assert!(!node.is_leaf());
        assert_eq!(node.left_child(), Some(4));
        assert_eq!(node.right_child(), Some(5));

        node.set_parent(9);
        assert!(!node.is_root());
        assert_eq!(node.parent(), Some(9));
    }

    #[test]
    fn duplicate_keeps_digest_and_children_but_not_the_parent() {
        let mut node = Node::create_node(sum(b"node"), 0, 1);
        node.set_parent(7);

        let copy = node.duplicate();
        assert_eq!(copy.digest(), node.digest());
        assert_eq!(copy.left_child(), Some(0));
        assert_eq!(copy.right_child(), Some(1));
        assert_eq!(copy.parent(), None);
    }
}
