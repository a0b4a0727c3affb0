use arbor_merkle::binary::Side;

use crate::binary::{
    node_sum,
    Data,
};

pub fn verify(root: &Data, data: &Data, proof_set: &[Data], sides: &[Side]) -> bool {
    if proof_set.len() != sides.len() {
        return false
    }

    let mut sum = *data;
    for (proof_data, side) in proof_set.iter().zip(sides) {
        sum = match side {
            Side::Left => node_sum(proof_data, &sum),
            Side::Right => node_sum(&sum, proof_data),
        };
    }

    sum == *root
}
