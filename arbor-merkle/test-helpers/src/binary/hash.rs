use digest::Digest;
use sha2::Sha256 as Hash;

pub type Data = [u8; 32];

// H(d)
pub fn sum(data: &[u8]) -> Data {
    let mut hash = Hash::new();
    hash.update(data);
    hash.finalize().into()
}

// H(lhs || rhs)
pub fn node_sum(lhs_data: &[u8], rhs_data: &[u8]) -> Data {
    let mut hash = Hash::new();
    hash.update(lhs_data);
    hash.update(rhs_data);
    hash.finalize().into()
}
