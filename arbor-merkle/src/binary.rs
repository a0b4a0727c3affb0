mod hasher;
mod merkle_tree;
mod node;
mod proof;
mod root_calculator;
mod verify;

pub use hasher::{
    DigestHasher,
    Hasher,
    Sha256Hasher,
};
pub use merkle_tree::{
    MerkleTree,
    MerkleTreeError,
    ProofIter,
};
pub use node::{
    Node,
    NodeId,
};
pub use proof::{
    Proof,
    ProofError,
    Side,
};
pub use root_calculator::MerkleRootCalculator;
pub use verify::verify;

pub(crate) use verify::fold_path;
