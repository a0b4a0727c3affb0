use super::Bytes32;

use digest::Digest;
use sha2::Sha256;

/// SHA-256 of a single byte string.
pub fn sum<T: AsRef<[u8]>>(data: T) -> Bytes32 {
    let mut hash = Sha256::new();
    hash.update(data.as_ref());
    hash.finalize().into()
}

/// SHA-256 of the concatenation of every item yielded by `iterator`.
pub fn sum_iter<I: IntoIterator<Item = T>, T: AsRef<[u8]>>(iterator: I) -> Bytes32 {
    let mut hash = Sha256::new();
    for data in iterator {
        hash.update(data.as_ref());
    }
    hash.finalize().into()
}
