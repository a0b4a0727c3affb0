mod hash;
mod merkle_tree;
mod verify;

pub use hash::{
    node_sum,
    sum,
    Data,
};
pub use merkle_tree::MerkleTree;
pub use verify::verify;
