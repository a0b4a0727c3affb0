mod hash;

pub type Bytes32 = [u8; 32];

pub use hash::{
    sum,
    sum_iter,
};
