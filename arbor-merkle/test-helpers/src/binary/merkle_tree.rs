use arbor_merkle::binary::Side;

use crate::binary::{
    node_sum,
    Data,
};

/// Reference tree kept as a list of padded levels, leaves first.
///
/// Positions are plain indices: the sibling of `i` is `i ^ 1` and its parent
/// is `i / 2`. It shares no code with the arena tree it is checked against.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    levels: Vec<Vec<Data>>,
}

impl MerkleTree {
    pub fn new(leaves: &[Data]) -> Option<Self> {
        if leaves.is_empty() {
            return None
        }

        let mut levels = vec![Self::pad(leaves.to_vec())];
        while levels[levels.len() - 1].len() > 1 {
            let current = &levels[levels.len() - 1];
            let next = current
                .chunks(2)
                .map(|pair| node_sum(&pair[0], &pair[1]))
                .collect::<Vec<_>>();
            levels.push(Self::pad(next));
        }
        Some(Self { levels })
    }

    pub fn root(&self) -> Data {
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaves_count(&self) -> u64 {
        self.levels[0].len() as u64
    }

    /// Returns the root, the sibling digests and their sides for the leaf at
    /// `proof_index`.
    pub fn prove(&self, proof_index: u64) -> Option<(Data, Vec<Data>, Vec<Side>)> {
        let mut index = usize::try_from(proof_index).ok()?;
        if index >= self.levels[0].len() {
            return None
        }

        let mut proof_set = Vec::new();
        let mut sides = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            proof_set.push(level[sibling]);
            sides.push(if index % 2 == 0 { Side::Right } else { Side::Left });
            index /= 2;
        }
        Some((self.root(), proof_set, sides))
    }

    fn pad(mut level: Vec<Data>) -> Vec<Data> {
        if level.len() > 1 && level.len() % 2 == 1 {
            level.push(level[level.len() - 1]);
        }
        level
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        binary::sum,
        TEST_DATA,
    };

    #[test]
    fn new_returns_none_for_0_leaves() {
        assert!(MerkleTree::new(&[]).is_none());
    }

    #[test]
    fn root_returns_the_leaf_for_1_leaf() {
        let leaf = sum(TEST_DATA[0].as_bytes());
        let tree = MerkleTree::new(&[leaf]).unwrap();

        assert_eq!(tree.root(), leaf);
        assert_eq!(tree.prove(0), Some((leaf, vec![], vec![])));
    }

    #[test]
    fn root_returns_the_known_root_for_3_leaves() {
        let leaves = TEST_DATA[0..3]
            .iter()
            .map(|record| sum(record.as_bytes()))
            .collect::<Vec<_>>();
        let tree = MerkleTree::new(&leaves).unwrap();

        assert_eq!(
            hex::encode(tree.root()),
            "bb20c6b229a2bcf54fd8c22b1c6db5e570cafa307e0b66cd15e6a38481fa8e15"
        );
        assert_eq!(tree.leaves_count(), 4);
    }

    #[test]
    fn prove_returns_the_padded_siblings_for_5_leaves() {
        let leaves = TEST_DATA[0..5]
            .iter()
            .map(|record| sum(record.as_bytes()))
            .collect::<Vec<_>>();
        let tree = MerkleTree::new(&leaves).unwrap();

        //                 07
        //              /       \
        //           05          06
        //          /   \       /   \
        //        01     02   03     04 = 03
        //       /  \   /  \  /  \
        //      L0  L1 L2  L3 L4  L5 = L4
        let node_1 = node_sum(&leaves[0], &leaves[1]);
        let node_2 = node_sum(&leaves[2], &leaves[3]);
        let node_3 = node_sum(&leaves[4], &leaves[4]);
        let node_5 = node_sum(&node_1, &node_2);

        let (_, proof_set, sides) = tree.prove(4).unwrap();
        assert_eq!(proof_set, vec![leaves[4], node_3, node_5]);
        assert_eq!(sides, vec![Side::Right, Side::Right, Side::Left]);
        assert!(tree.prove(6).is_none());
    }
}
