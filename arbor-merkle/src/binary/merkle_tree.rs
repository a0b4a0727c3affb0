use crate::binary::{
    Hasher,
    MerkleRootCalculator,
    Node,
    NodeId,
    Proof,
    ProofError,
    Sha256Hasher,
    Side,
};

use alloc::vec::Vec;

#[derive(Debug, Clone, derive_more::Display, PartialEq, Eq)]
pub enum MerkleTreeError {
    #[display(fmt = "cannot build a tree from an empty sequence of leaves")]
    InvalidInput,

    #[display(fmt = "leaf {} is not part of the tree", "hex::encode(_0)")]
    NotFound(Vec<u8>),

    #[display(fmt = "invalid proof: {}", _0)]
    InvalidProof(ProofError),

    #[display(fmt = "proof index {_0} is not valid")]
    InvalidProofIndex(u64),

    #[display(fmt = "the parent links of the tree are broken")]
    InvalidTree,
}

impl From<ProofError> for MerkleTreeError {
    fn from(err: ProofError) -> MerkleTreeError {
        MerkleTreeError::InvalidProof(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MerkleTreeError {}

/// A binary Merkle tree built once from an ordered sequence of digests.
///
/// Every node lives in a single arena. Children are linked through `left` and
/// `right`, and each node except the root records its `parent`, so a proof is
/// produced by walking from a leaf to the root.
///
/// An odd number of leaves is padded by repeating the last leaf, and an odd
/// level during reduction is padded by repeating its last node. A single leaf
/// is its own root.
#[derive(Debug, Clone)]
pub struct MerkleTree<H: Hasher = Sha256Hasher> {
    hasher: H,
    nodes: Vec<Node<H::Output>>,
    leaves: Vec<NodeId>,
    root: Option<NodeId>,
}

impl<H: Hasher + Default> Default for MerkleTree<H> {
    /// An empty tree with no leaves and no root.
    fn default() -> Self {
        Self {
            hasher: H::default(),
            nodes: Vec::new(),
            leaves: Vec::new(),
            root: None,
        }
    }
}

impl<H: Hasher + Default> MerkleTree<H> {
    pub fn new<I>(leaves: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = H::Output>,
    {
        Self::from_leaves(H::default(), leaves)
    }
}

impl<H: Hasher> MerkleTree<H> {
    pub fn from_leaves<I>(hasher: H, leaves: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = H::Output>,
    {
        let mut nodes: Vec<Node<H::Output>> =
            leaves.into_iter().map(Node::create_leaf).collect();
        let count = nodes.len();
        if count == 0 {
            return Err(MerkleTreeError::InvalidInput)
        }

        let padded = count > 1 && count % 2 == 1;
        if padded {
            let pad = nodes[count - 1].duplicate();
            nodes.push(pad);
        }

        let leaves: Vec<NodeId> = (0..nodes.len()).collect();
        let mut level = leaves.clone();
        let mut height = 0u32;
        while level.len() > 1 {
            if level.len() % 2 == 1 {
                let last = level[level.len() - 1];
                let pad = nodes[last].duplicate();
                nodes.push(pad);
                level.push(nodes.len() - 1);
            }

            let mut next = Vec::with_capacity(level.len() / 2);
            for pair in level.chunks_exact(2) {
                let (left, right) = (pair[0], pair[1]);
                let digest = hasher.hash_pair(nodes[left].digest(), nodes[right].digest());
                let parent = nodes.len();
                nodes.push(Node::create_node(digest, left, right));
                nodes[left].set_parent(parent);
                nodes[right].set_parent(parent);
                next.push(parent);
            }
            level = next;
            height += 1;
        }

        tracing::debug!(leaves = count, padded, height, "built merkle tree");

        Ok(Self {
            hasher,
            nodes,
            leaves,
            root: level.first().copied(),
        })
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn root(&self) -> Option<&H::Output> {
        self.root_node().map(Node::digest)
    }

    pub fn root_node(&self) -> Option<&Node<H::Output>> {
        self.root.and_then(|id| self.nodes.get(id))
    }

    /// Leaf digests in order, including the padding leaf of an odd input.
    pub fn leaves(&self) -> impl Iterator<Item = &H::Output> + '_ {
        self.leaves
            .iter()
            .filter_map(move |id| self.nodes.get(*id))
            .map(Node::digest)
    }

    pub fn leaf(&self, index: u64) -> Option<&Node<H::Output>> {
        let id = self.leaf_id(index)?;
        self.nodes.get(id)
    }

    pub fn leaves_count(&self) -> u64 {
        self.leaves.len() as u64
    }

    /// Number of parent links between any leaf and the root.
    pub fn height(&self) -> u32 {
        match self.leaves.len() {
            0 | 1 => 0,
            count => usize::BITS - (count - 1).leading_zeros(),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<H::Output>> {
        self.nodes.get(id)
    }

    /// Overwrites a leaf digest in place. Ancestors are not recomputed, which
    /// is what [`MerkleTree::verify_integrity`] detects.
    ///
    /// In a single-leaf tree the leaf is the root, so overwriting it also
    /// replaces the root and the change cannot be detected.
    pub fn leaf_mut(&mut self, index: u64) -> Option<&mut H::Output> {
        let id = self.leaf_id(index)?;
        self.nodes.get_mut(id).map(Node::digest_mut)
    }

    pub fn proof_iter(&self, leaf: NodeId) -> ProofIter<'_, H> {
        ProofIter {
            tree: self,
            current: Some(leaf),
            budget: self.nodes.len(),
        }
    }

    /// Builds the inclusion proof of the first leaf carrying `digest`.
    pub fn prove(&self, digest: &H::Output) -> Result<Proof<H>, MerkleTreeError> {
        let leaf = self
            .leaves
            .iter()
            .copied()
            .find(|id| self.nodes.get(*id).map(Node::digest) == Some(digest))
            .ok_or_else(|| MerkleTreeError::NotFound(digest.as_ref().to_vec()))?;
        self.collect_proof(leaf)
    }

    pub fn prove_index(&self, index: u64) -> Result<Proof<H>, MerkleTreeError> {
        let leaf = self
            .leaf_id(index)
            .ok_or(MerkleTreeError::InvalidProofIndex(index))?;
        self.collect_proof(leaf)
    }

    /// Recomputes the root from the current leaves and compares it with the
    /// stored root.
    ///
    /// Returns `false` for an empty tree. Always returns `true` for a
    /// single-leaf tree, whose stored root is the leaf itself.
    pub fn verify_integrity(&self) -> bool {
        let Some(stored) = self.root() else {
            return false
        };
        if self.leaves.is_empty() {
            return false
        }

        let computed = MerkleRootCalculator::new(&self.hasher)
            .root_from_iterator(self.leaves().cloned());
        match computed {
            Some(computed) if computed == *stored => true,
            computed => {
                tracing::debug!(
                    stored = %hex::encode(stored),
                    computed = ?computed.as_ref().map(hex::encode),
                    "merkle root mismatch"
                );
                false
            }
        }
    }

    fn leaf_id(&self, index: u64) -> Option<NodeId> {
        let index = usize::try_from(index).ok()?;
        self.leaves.get(index).copied()
    }

    fn collect_proof(&self, leaf: NodeId) -> Result<Proof<H>, MerkleTreeError> {
        let mut proof = Proof::with_capacity(self.height() as usize);
        for step in self.proof_iter(leaf) {
            let (sibling, side) = step?;
            proof.push(sibling.digest().clone(), side);
        }
        tracing::trace!(leaf, steps = proof.len(), "generated inclusion proof");
        Ok(proof)
    }
}

/// Walks from a node to the root, yielding the sibling met at every level and
/// the side it sits on.
#[derive(Debug)]
pub struct ProofIter<'a, H: Hasher> {
    tree: &'a MerkleTree<H>,
    current: Option<NodeId>,
    budget: usize,
}

impl<'a, H: Hasher> ProofIter<'a, H> {
    fn broken(&mut self) -> Option<<Self as Iterator>::Item> {
        self.current = None;
        Some(Err(MerkleTreeError::InvalidTree))
    }
}

impl<'a, H: Hasher> Iterator for ProofIter<'a, H> {
    type Item = Result<(&'a Node<H::Output>, Side), MerkleTreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let current = self.current?;
        let Some(node) = tree.nodes.get(current) else {
            return self.broken()
        };
        let Some(parent_id) = node.parent() else {
            self.current = None;
            return None
        };
        if self.budget == 0 {
            return self.broken()
        }
        self.budget -= 1;

        let Some(parent) = tree.nodes.get(parent_id) else {
            return self.broken()
        };
        let (sibling_id, side) = match (parent.left_child(), parent.right_child()) {
            (Some(left), Some(right)) if left == current => (right, Side::Right),
            (Some(left), Some(right)) if right == current => (left, Side::Left),
            _ => return self.broken(),
        };
        let Some(sibling) = tree.nodes.get(sibling_id) else {
            return self.broken()
        };

        self.current = Some(parent_id);
        Some(Ok((sibling, side)))
    }
}
