use crate::binary::{
    Hasher,
    Sha256Hasher,
};

use alloc::vec::Vec;

/// Computes the root of a digest sequence without building a node arena.
///
/// The stack holds the roots of completed perfect subtrees, tallest first.
/// Finishing the calculation pads every unpaired subtree with a copy of
/// itself, which reproduces the level-by-level duplication of
/// [`MerkleTree`](crate::binary::MerkleTree).
#[derive(Debug, Clone)]
pub struct MerkleRootCalculator<H: Hasher = Sha256Hasher> {
    hasher: H,
    stack: Vec<(u32, H::Output)>,
    leaves_count: u64,
}

impl<H: Hasher + Default> Default for MerkleRootCalculator<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H: Hasher> MerkleRootCalculator<H> {
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            stack: Vec::new(),
            leaves_count: 0,
        }
    }

    pub fn push(&mut self, digest: H::Output) {
        self.leaves_count += 1;
        self.stack.push((0, digest));

        while self.stack.len() > 1 {
            let (right_height, _) = &self.stack[self.stack.len() - 1];
            let (left_height, _) = &self.stack[self.stack.len() - 2];
            if right_height != left_height {
                break
            }
            self.merge_top();
        }
    }

    pub fn leaves_count(&self) -> u64 {
        self.leaves_count
    }

    /// The root of every digest pushed so far, or `None` if nothing was
    /// pushed.
    pub fn root(mut self) -> Option<H::Output> {
        while let [.., (left_height, _), (right_height, right)] = self.stack.as_mut_slice() {
            if left_height == right_height {
                self.merge_top();
            } else {
                *right = self.hasher.hash_pair(right, right);
                *right_height += 1;
            }
        }
        self.stack.pop().map(|(_, digest)| digest)
    }

    pub fn root_from_iterator<I: IntoIterator<Item = H::Output>>(
        mut self,
        iterator: I,
    ) -> Option<H::Output> {
        for digest in iterator {
            self.push(digest);
        }
        self.root()
    }

    fn merge_top(&mut self) {
        if let (Some((height, right)), Some((_, left))) = (self.stack.pop(), self.stack.pop()) {
            let merged = self.hasher.hash_pair(&left, &right);
            self.stack.push((height + 1, merged));
        }
    }
}
